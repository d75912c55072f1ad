//! Concrete repository implementations.

pub mod item;
pub mod session;
pub mod share;
pub mod share_user;
pub mod user;

pub use item::ItemRepository;
pub use session::SessionRepository;
pub use share::ShareRepository;
pub use share_user::ShareUserRepository;
pub use user::UserRepository;

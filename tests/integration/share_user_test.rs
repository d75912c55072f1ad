//! Integration tests for share invitations and recipient listing.

mod helpers;

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

/// Create an owner with a folder share and return (owner token, share id).
async fn folder_share(app: &helpers::TestApp) -> (String, String) {
    let email = helpers::unique_email("owner");
    let owner_id = app.create_user(&email, "password123").await;
    let token = app.login(&email, "password123").await;
    let folder_id = app.create_item(owner_id, "folder").await;

    let created = app
        .request(
            "POST",
            "/api/shares",
            Some(json!({ "folder_id": folder_id })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);
    let share_id = created.body["data"]["id"].as_str().unwrap().to_string();

    (token, share_id)
}

#[tokio::test]
async fn test_invite_creates_unaccepted_invitation() {
    let Some(app) = helpers::TestApp::try_new().await else {
        helpers::skip_notice("test_invite_creates_unaccepted_invitation");
        return;
    };

    let (token, share_id) = folder_share(&app).await;
    let recipient = helpers::unique_email("recipient");

    let response = app
        .request(
            "POST",
            &format!("/api/shares/{share_id}/users"),
            Some(json!({ "email": recipient })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["is_accepted"], false);
}

#[tokio::test]
async fn test_inviting_same_email_twice_conflicts() {
    let Some(app) = helpers::TestApp::try_new().await else {
        helpers::skip_notice("test_inviting_same_email_twice_conflicts");
        return;
    };

    let (token, share_id) = folder_share(&app).await;
    let recipient = helpers::unique_email("recipient");

    let first = app
        .request(
            "POST",
            &format!("/api/shares/{share_id}/users"),
            Some(json!({ "email": recipient })),
            Some(&token),
        )
        .await;
    let second = app
        .request(
            "POST",
            &format!("/api/shares/{share_id}/users"),
            Some(json!({ "email": recipient })),
            Some(&token),
        )
        .await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(
        second.body["message"],
        format!("Already shared with user: {recipient}")
    );
}

#[tokio::test]
async fn test_invite_requires_session() {
    let Some(app) = helpers::TestApp::try_new().await else {
        helpers::skip_notice("test_invite_requires_session");
        return;
    };

    let (_, share_id) = folder_share(&app).await;

    let response = app
        .request(
            "POST",
            &format!("/api/shares/{share_id}/users"),
            Some(json!({ "email": "someone@example.com" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_only_share_owner_may_invite() {
    let Some(app) = helpers::TestApp::try_new().await else {
        helpers::skip_notice("test_only_share_owner_may_invite");
        return;
    };

    let (_, share_id) = folder_share(&app).await;

    let other_email = helpers::unique_email("other");
    app.create_user(&other_email, "password123").await;
    let other_token = app.login(&other_email, "password123").await;

    let response = app
        .request(
            "POST",
            &format!("/api/shares/{share_id}/users"),
            Some(json!({ "email": helpers::unique_email("recipient") })),
            Some(&other_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_invite_on_unknown_share_is_not_found() {
    let Some(app) = helpers::TestApp::try_new().await else {
        helpers::skip_notice("test_invite_on_unknown_share_is_not_found");
        return;
    };

    let email = helpers::unique_email("owner");
    app.create_user(&email, "password123").await;
    let token = app.login(&email, "password123").await;

    let response = app
        .request(
            "POST",
            &format!("/api/shares/{}/users", Uuid::new_v4()),
            Some(json!({ "email": "someone@example.com" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invite_with_malformed_email_is_not_found() {
    let Some(app) = helpers::TestApp::try_new().await else {
        helpers::skip_notice("test_invite_with_malformed_email_is_not_found");
        return;
    };

    let (token, share_id) = folder_share(&app).await;

    let response = app
        .request(
            "POST",
            &format!("/api/shares/{share_id}/users"),
            Some(json!({ "email": "not-an-email" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_recipients_expose_only_email_and_flag() {
    let Some(app) = helpers::TestApp::try_new().await else {
        helpers::skip_notice("test_recipients_expose_only_email_and_flag");
        return;
    };

    let (token, share_id) = folder_share(&app).await;
    let recipient = helpers::unique_email("recipient");

    app.request(
        "POST",
        &format!("/api/shares/{share_id}/users"),
        Some(json!({ "email": recipient })),
        Some(&token),
    )
    .await;

    let response = app
        .request(
            "GET",
            &format!("/api/shares/{share_id}/users"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let entries = response.body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);

    let entry = entries[0].as_object().unwrap();
    assert_eq!(entry["is_accepted"], false);
    assert_eq!(entry["user"]["email"], recipient);

    // Exactly the two documented fields, and the user carries only the
    // email — no identifier leaks.
    assert_eq!(entry.len(), 2);
    assert_eq!(entry["user"].as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn test_listing_recipients_requires_session() {
    let Some(app) = helpers::TestApp::try_new().await else {
        helpers::skip_notice("test_listing_recipients_requires_session");
        return;
    };

    let (_, share_id) = folder_share(&app).await;

    let response = app
        .request("GET", &format!("/api/shares/{share_id}/users"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_only_share_owner_lists_recipients() {
    let Some(app) = helpers::TestApp::try_new().await else {
        helpers::skip_notice("test_only_share_owner_lists_recipients");
        return;
    };

    let (_, share_id) = folder_share(&app).await;

    let other_email = helpers::unique_email("other");
    app.create_user(&other_email, "password123").await;
    let other_token = app.login(&other_email, "password123").await;

    let response = app
        .request(
            "GET",
            &format!("/api/shares/{share_id}/users"),
            None,
            Some(&other_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_invitation_provisions_unknown_recipient() {
    let Some(app) = helpers::TestApp::try_new().await else {
        helpers::skip_notice("test_invitation_provisions_unknown_recipient");
        return;
    };

    let (token, share_id) = folder_share(&app).await;
    let recipient = helpers::unique_email("fresh");

    let response = app
        .request(
            "POST",
            &format!("/api/shares/{share_id}/users"),
            Some(json!({ "email": recipient })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // The identity was created by the invitation, without a password.
    let hash: String =
        sqlx::query_scalar("SELECT password_hash FROM users WHERE email = LOWER($1)")
            .bind(&recipient)
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    assert!(hash.is_empty());
}

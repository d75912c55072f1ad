//! Integration tests for share creation, listing, and anonymous access.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_create_folder_share() {
    let Some(app) = helpers::TestApp::try_new().await else {
        helpers::skip_notice("test_create_folder_share");
        return;
    };

    let email = helpers::unique_email("owner");
    let owner_id = app.create_user(&email, "password123").await;
    let token = app.login(&email, "password123").await;
    let folder_id = app.create_item(owner_id, "folder").await;

    let response = app
        .request(
            "POST",
            "/api/shares",
            Some(serde_json::json!({ "folder_id": folder_id })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["type"], "folder");
    assert_eq!(data["folder_id"], folder_id.as_str());
    assert!(data["id"].as_str().is_some());
    // Internal fields never appear in the public representation.
    assert!(data.get("item_id").is_none());
    assert!(data.get("owner_id").is_none());
}

#[tokio::test]
async fn test_folder_share_creation_is_idempotent() {
    let Some(app) = helpers::TestApp::try_new().await else {
        helpers::skip_notice("test_folder_share_creation_is_idempotent");
        return;
    };

    let email = helpers::unique_email("owner");
    let owner_id = app.create_user(&email, "password123").await;
    let token = app.login(&email, "password123").await;
    let folder_id = app.create_item(owner_id, "folder").await;

    let body = serde_json::json!({ "folder_id": folder_id });
    let first = app
        .request("POST", "/api/shares", Some(body.clone()), Some(&token))
        .await;
    let second = app
        .request("POST", "/api/shares", Some(body), Some(&token))
        .await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(first.body["data"]["id"], second.body["data"]["id"]);

    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM shares WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_create_share_requires_folder_or_note() {
    let Some(app) = helpers::TestApp::try_new().await else {
        helpers::skip_notice("test_create_share_requires_folder_or_note");
        return;
    };

    let email = helpers::unique_email("owner");
    app.create_user(&email, "password123").await;
    let token = app.login(&email, "password123").await;

    let response = app
        .request(
            "POST",
            "/api/shares",
            Some(serde_json::json!({})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "Either folder_id or note_id must be provided"
    );
}

#[tokio::test]
async fn test_create_share_requires_session() {
    let Some(app) = helpers::TestApp::try_new().await else {
        helpers::skip_notice("test_create_share_requires_session");
        return;
    };

    let response = app
        .request(
            "POST",
            "/api/shares",
            Some(serde_json::json!({ "folder_id": "abc" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_share_unknown_folder_is_not_found() {
    let Some(app) = helpers::TestApp::try_new().await else {
        helpers::skip_notice("test_create_share_unknown_folder_is_not_found");
        return;
    };

    let email = helpers::unique_email("owner");
    app.create_user(&email, "password123").await;
    let token = app.login(&email, "password123").await;

    let response = app
        .request(
            "POST",
            "/api/shares",
            Some(serde_json::json!({ "folder_id": "does-not-exist" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_share_foreign_folder_is_not_found() {
    let Some(app) = helpers::TestApp::try_new().await else {
        helpers::skip_notice("test_create_share_foreign_folder_is_not_found");
        return;
    };

    let owner_email = helpers::unique_email("owner");
    let other_email = helpers::unique_email("other");
    let owner_id = app.create_user(&owner_email, "password123").await;
    app.create_user(&other_email, "password123").await;
    let other_token = app.login(&other_email, "password123").await;
    let folder_id = app.create_item(owner_id, "folder").await;

    // Ownership-scoped lookup fails before any permission decision, so
    // the existence of the foreign folder is not leaked.
    let response = app
        .request(
            "POST",
            "/api/shares",
            Some(serde_json::json!({ "folder_id": folder_id })),
            Some(&other_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_note_link_share() {
    let Some(app) = helpers::TestApp::try_new().await else {
        helpers::skip_notice("test_create_note_link_share");
        return;
    };

    let email = helpers::unique_email("owner");
    let owner_id = app.create_user(&email, "password123").await;
    let token = app.login(&email, "password123").await;
    let note_id = app.create_item(owner_id, "note").await;

    let response = app
        .request(
            "POST",
            "/api/shares",
            Some(serde_json::json!({ "note_id": note_id })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["type"], "link");
    assert_eq!(response.body["data"]["note_id"], note_id.as_str());
}

#[tokio::test]
async fn test_link_share_is_readable_anonymously() {
    let Some(app) = helpers::TestApp::try_new().await else {
        helpers::skip_notice("test_link_share_is_readable_anonymously");
        return;
    };

    let email = helpers::unique_email("owner");
    let owner_id = app.create_user(&email, "password123").await;
    let token = app.login(&email, "password123").await;
    let note_id = app.create_item(owner_id, "note").await;

    let created = app
        .request(
            "POST",
            "/api/shares",
            Some(serde_json::json!({ "note_id": note_id })),
            Some(&token),
        )
        .await;
    let share_id = created.body["data"]["id"].as_str().unwrap().to_string();

    // No session header at all.
    let response = app
        .request("GET", &format!("/api/shares/{share_id}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["type"], "link");
    assert_eq!(response.body["data"]["note_id"], note_id.as_str());
}

#[tokio::test]
async fn test_folder_share_is_hidden_from_anonymous_read() {
    let Some(app) = helpers::TestApp::try_new().await else {
        helpers::skip_notice("test_folder_share_is_hidden_from_anonymous_read");
        return;
    };

    let email = helpers::unique_email("owner");
    let owner_id = app.create_user(&email, "password123").await;
    let token = app.login(&email, "password123").await;
    let folder_id = app.create_item(owner_id, "folder").await;

    let created = app
        .request(
            "POST",
            "/api/shares",
            Some(serde_json::json!({ "folder_id": folder_id })),
            Some(&token),
        )
        .await;
    let share_id = created.body["data"]["id"].as_str().unwrap().to_string();

    // A folder share must be indistinguishable from a missing one, even
    // for its own owner.
    let anonymous = app
        .request("GET", &format!("/api/shares/{share_id}"), None, None)
        .await;
    let as_owner = app
        .request("GET", &format!("/api/shares/{share_id}"), None, Some(&token))
        .await;

    assert_eq!(anonymous.status, StatusCode::NOT_FOUND);
    assert_eq!(as_owner.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_share_is_not_found() {
    let Some(app) = helpers::TestApp::try_new().await else {
        helpers::skip_notice("test_missing_share_is_not_found");
        return;
    };

    let response = app
        .request(
            "GET",
            &format!("/api/shares/{}", uuid::Uuid::new_v4()),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_shares_returns_only_own() {
    let Some(app) = helpers::TestApp::try_new().await else {
        helpers::skip_notice("test_list_shares_returns_only_own");
        return;
    };

    let owner_email = helpers::unique_email("owner");
    let other_email = helpers::unique_email("other");
    let owner_id = app.create_user(&owner_email, "password123").await;
    let other_id = app.create_user(&other_email, "password123").await;
    let owner_token = app.login(&owner_email, "password123").await;
    let other_token = app.login(&other_email, "password123").await;

    let folder_id = app.create_item(owner_id, "folder").await;
    let other_folder_id = app.create_item(other_id, "folder").await;

    app.request(
        "POST",
        "/api/shares",
        Some(serde_json::json!({ "folder_id": folder_id })),
        Some(&owner_token),
    )
    .await;
    app.request(
        "POST",
        "/api/shares",
        Some(serde_json::json!({ "folder_id": other_folder_id })),
        Some(&other_token),
    )
    .await;

    let response = app
        .request("GET", "/api/shares", None, Some(&owner_token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    let items = data["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["folder_id"], folder_id.as_str());
    assert_eq!(data["has_more"], false);
}

#[tokio::test]
async fn test_list_shares_requires_session() {
    let Some(app) = helpers::TestApp::try_new().await else {
        helpers::skip_notice("test_list_shares_requires_session");
        return;
    };

    let response = app.request("GET", "/api/shares", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

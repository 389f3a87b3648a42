//! HTTP-level integration tests for the `/api/patterns` resource.

mod common;

use alarmist_db::Database;
use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth};
use serde_json::json;

fn morning() -> serde_json::Value {
    json!({ "name": "Morning", "color": "#fff", "times": [{ "time": "07:00" }] })
}

/// The end-to-end walkthrough: register, login, create, cross-user lookup.
#[tokio::test]
async fn test_pattern_scenario() {
    let app = common::build_test_app(Database::in_memory());
    let (alice_id, alice_token) = common::signup(app.clone(), "alice").await;
    let (_bob_id, bob_token) = common::signup(app.clone(), "bob").await;

    let response = post_json_auth(app.clone(), "/api/patterns", morning(), &alice_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let pattern = body_json(response).await;

    let pattern_id = pattern["id"].as_str().unwrap();
    assert!(!pattern_id.is_empty());
    assert_eq!(pattern["user_id"], alice_id);
    assert_eq!(pattern["name"], "Morning");
    assert_eq!(pattern["times"][0]["time"], "07:00");
    assert_eq!(pattern["times"][0]["sound"], "default");
    assert_eq!(pattern["times"][0]["volume"], 100);
    assert_eq!(pattern["times"][0]["gradual_increase"], false);
    assert_eq!(pattern["times"][0]["snooze_duration"], 5);

    // Bob cannot see it, and gets 404 rather than 403.
    let uri = format!("/api/patterns/{pattern_id}");
    let response = get_auth(app.clone(), &uri, &bob_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Pattern not found");

    // Alice can.
    let response = get_auth(app, &uri, &alice_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"], pattern_id);
}

/// A client-supplied owner or id is ignored on create.
#[tokio::test]
async fn test_create_ignores_client_owner_and_id() {
    let app = common::build_test_app(Database::in_memory());
    let (alice_id, token) = common::signup(app.clone(), "alice").await;

    let body = json!({
        "id": "chosen-by-client",
        "user_id": "someone-else",
        "name": "Sneaky",
        "color": "#000",
        "times": []
    });
    let response = post_json_auth(app, "/api/patterns", body, &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user_id"], alice_id);
    assert_ne!(json["id"], "chosen-by-client");
}

/// Listing returns the owner's patterns in creation order, wrapped in
/// `{ "patterns": [...] }`.
#[tokio::test]
async fn test_list_patterns() {
    let app = common::build_test_app(Database::in_memory());
    let (_id, token) = common::signup(app.clone(), "alice").await;
    let (_bob, bob_token) = common::signup(app.clone(), "bob").await;

    let response = get_auth(app.clone(), "/api/patterns", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "patterns": [] }));

    for name in ["Weekday", "Weekend"] {
        let body = json!({ "name": name, "color": "#123456", "times": [] });
        post_json_auth(app.clone(), "/api/patterns", body, &token).await;
    }

    let response = get_auth(app.clone(), "/api/patterns", &token).await;
    let json = body_json(response).await;
    let names: Vec<_> = json["patterns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Weekday", "Weekend"]);

    let response = get_auth(app, "/api/patterns", &bob_token).await;
    assert_eq!(body_json(response).await["patterns"], json!([]));
}

/// Update replaces fields but keeps id, owner, and creation time.
#[tokio::test]
async fn test_update_pattern() {
    let app = common::build_test_app(Database::in_memory());
    let (alice_id, token) = common::signup(app.clone(), "alice").await;

    let response = post_json_auth(app.clone(), "/api/patterns", morning(), &token).await;

    let created = body_json(response).await;
    let uri = format!("/api/patterns/{}", created["id"].as_str().unwrap());

    let body = json!({
        "name": "Early",
        "description": "Gym days",
        "color": "#f00",
        "times": [
            {
                "time": "05:30",
                "sound": "chimes",
                "volume": 60,
                "gradual_increase": true,
                "snooze_duration": 10
            },
            { "time": "05:45" }
        ]
    });
    let response = put_json_auth(app.clone(), &uri, body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;

    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["user_id"], alice_id);
    assert_eq!(updated["created_at"], created["created_at"]);
    assert_eq!(updated["name"], "Early");
    assert_eq!(updated["description"], "Gym days");
    assert_eq!(updated["times"][0]["sound"], "chimes");
    assert_eq!(updated["times"][0]["volume"], 60);
    assert_eq!(updated["times"][1]["sound"], "default");

    let created_at = created["updated_at"].as_str().unwrap();
    let updated_at = updated["updated_at"].as_str().unwrap();
    let before: chrono::DateTime<chrono::Utc> = created_at.parse().unwrap();
    let after: chrono::DateTime<chrono::Utc> = updated_at.parse().unwrap();
    assert!(after >= before);

    // The stored copy matches the response.
    let stored = body_json(get_auth(app, &uri, &token).await).await;
    assert_eq!(stored, updated);
}

/// Updating a missing pattern returns 404.
#[tokio::test]
async fn test_update_missing_pattern() {
    let app = common::build_test_app(Database::in_memory());
    let (_id, token) = common::signup(app.clone(), "alice").await;

    let response = put_json_auth(app, "/api/patterns/does-not-exist", morning(), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Delete removes the pattern; a repeat delete is 404, not a silent success.
#[tokio::test]
async fn test_delete_pattern() {
    let app = common::build_test_app(Database::in_memory());
    let (_id, token) = common::signup(app.clone(), "alice").await;

    let response = post_json_auth(app.clone(), "/api/patterns", morning(), &token).await;

    let created = body_json(response).await;
    let uri = format!("/api/patterns/{}", created["id"].as_str().unwrap());

    let response = delete_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Pattern deleted successfully");

    let response = get_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Another user cannot delete someone else's pattern.
#[tokio::test]
async fn test_delete_other_users_pattern() {
    let app = common::build_test_app(Database::in_memory());
    let (_a, alice_token) = common::signup(app.clone(), "alice").await;
    let (_b, bob_token) = common::signup(app.clone(), "bob").await;

    let response = post_json_auth(app.clone(), "/api/patterns", morning(), &alice_token).await;

    let created = body_json(response).await;
    let uri = format!("/api/patterns/{}", created["id"].as_str().unwrap());

    let response = delete_auth(app.clone(), &uri, &bob_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(app, &uri, &alice_token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Out-of-range volume is rejected.
#[tokio::test]
async fn test_create_pattern_invalid_volume() {
    let app = common::build_test_app(Database::in_memory());
    let (_id, token) = common::signup(app.clone(), "alice").await;

    let body = json!({
        "name": "Loud",
        "color": "#fff",
        "times": [{ "time": "07:00", "volume": 150 }]
    });
    let response = post_json_auth(app, "/api/patterns", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("volume"));
}

//! HTTP-level integration tests for the `/api/alarms` resource.

mod common;

use alarmist_db::Database;
use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth};
use serde_json::json;

/// Omitted settings take defaults; server-assigned fields override the
/// client's.
#[tokio::test]
async fn test_create_alarm_defaults() {
    let app = common::build_test_app(Database::in_memory());
    let (alice_id, token) = common::signup(app.clone(), "alice").await;

    let body = json!({
        "id": "client-id",
        "user_id": "client-owner",
        "created_at": "2000-01-01T00:00:00Z",
        "date": "2025-08-01",
        "time": "06:00"
    });
    let response = post_json_auth(app, "/api/alarms", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let alarm = body_json(response).await;

    assert_ne!(alarm["id"], "client-id");
    assert_eq!(alarm["user_id"], alice_id);
    assert_ne!(alarm["created_at"], "2000-01-01T00:00:00Z");
    assert_eq!(alarm["is_active"], true);
    assert_eq!(alarm["sound"], "default");
    assert_eq!(alarm["volume"], 1.0);
    assert_eq!(alarm["snooze_duration"], 5);
}

/// Full CRUD cycle including the update invariants.
#[tokio::test]
async fn test_alarm_lifecycle() {
    let app = common::build_test_app(Database::in_memory());
    let (alice_id, token) = common::signup(app.clone(), "alice").await;

    let body = json!({ "date": "2025-08-02", "time": "07:00" });
    let alarm = body_json(post_json_auth(app.clone(), "/api/alarms", body, &token).await).await;
    let uri = format!("/api/alarms/{}", alarm["id"].as_str().unwrap());

    let list = body_json(get_auth(app.clone(), "/api/alarms", &token).await).await;
    assert_eq!(list, json!([alarm.clone()]));

    let body = json!({
        "date": "2025-08-03",
        "time": "07:30",
        "is_active": false,
        "sound": "radio",
        "volume": 0.5,
        "snooze_duration": 9
    });
    let response = put_json_auth(app.clone(), &uri, body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["id"], alarm["id"]);
    assert_eq!(updated["user_id"], alice_id);
    assert_eq!(updated["created_at"], alarm["created_at"]);
    assert_eq!(updated["is_active"], false);
    assert_eq!(updated["sound"], "radio");
    assert_eq!(updated["volume"], 0.5);
    assert_eq!(updated["snooze_duration"], 9);

    let response = delete_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Alarm deleted successfully");

    let response = get_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Alarm not found");
}

/// Alarms of one user are invisible to another.
#[tokio::test]
async fn test_alarm_isolation() {
    let app = common::build_test_app(Database::in_memory());
    let (_a, alice_token) = common::signup(app.clone(), "alice").await;
    let (_b, bob_token) = common::signup(app.clone(), "bob").await;

    let body = json!({ "date": "2025-08-04", "time": "08:00" });
    let response = post_json_auth(app.clone(), "/api/alarms", body.clone(), &alice_token).await;
    let alarm = body_json(response).await;
    let uri = format!("/api/alarms/{}", alarm["id"].as_str().unwrap());

    assert_eq!(
        get_auth(app.clone(), &uri, &bob_token).await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        put_json_auth(app.clone(), &uri, body, &bob_token).await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        delete_auth(app.clone(), &uri, &bob_token).await.status(),
        StatusCode::NOT_FOUND
    );

    let list = body_json(get_auth(app, "/api/alarms", &bob_token).await).await;
    assert_eq!(list, json!([]));
}

/// Volume is a fraction; values above 1.0 are rejected.
#[tokio::test]
async fn test_alarm_invalid_volume() {
    let app = common::build_test_app(Database::in_memory());
    let (_id, token) = common::signup(app.clone(), "alice").await;

    let body = json!({ "date": "2025-08-05", "time": "09:00", "volume": 2.0 });
    let response = post_json_auth(app, "/api/alarms", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

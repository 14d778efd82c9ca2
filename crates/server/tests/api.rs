use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use chrono::Duration;
use database::db::{create_connection, init_schema};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use server::{app, auth::token::TokenService, state::AppState};
use tower::ServiceExt;

async fn setup() -> Router {
    let db = create_connection("sqlite::memory:").await.unwrap();
    init_schema(&db).await.unwrap();

    let tokens = TokenService::new("integration-test-secret", Duration::minutes(30));
    app(AppState::new(db, tokens))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

async fn login(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/login",
        None,
        Some(json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login as {username} failed: {body}");

    body["token"].as_str().unwrap().to_owned()
}

async fn user_id(app: &Router, token: &str) -> i64 {
    let (_, me) = send(app, Method::GET, "/me", Some(token), None).await;
    me["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_seed_accounts_log_in() {
    let app = setup().await;

    for (username, password, role) in [
        ("admin", "admin123", "manager"),
        ("lead", "lead123", "shift_lead"),
        ("waiter", "waiter123", "waiter"),
    ] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/login",
            None,
            Some(json!({ "username": username, "password": password })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["token_type"], "Bearer");
        assert_eq!(body["user"]["role"], role);
        assert!(body["user"].get("password_hash").is_none());
    }

    let (status, body) = send(
        &app,
        Method::POST,
        "/login",
        None,
        Some(json!({ "username": "admin", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "unauthorized");
}

#[tokio::test]
async fn test_requests_without_valid_token_are_rejected() {
    let app = setup().await;

    let (status, _) = send(&app, Method::GET, "/shifts", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::GET, "/shifts", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_waiter_access() {
    let app = setup().await;
    let token = login(&app, "waiter", "waiter123").await;
    let waiter = Some(token.as_str());

    for uri in ["/", "/shifts", "/team", "/hours", "/me"] {
        let (status, _) = send(&app, Method::GET, uri, waiter, None).await;
        assert_eq!(status, StatusCode::OK, "GET {uri}");
    }

    for uri in ["/reservations", "/reports", "/deposit", "/users"] {
        let (status, body) = send(&app, Method::GET, uri, waiter, None).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "GET {uri}");
        assert_eq!(body["error"], "forbidden");
    }

    let (status, _) = send(
        &app,
        Method::POST,
        "/reservations",
        waiter,
        Some(json!({ "customer": "Huber", "at": "2025-06-01T19:00:00" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        Method::POST,
        "/shifts",
        waiter,
        Some(json!({
            "employee": "Kellner",
            "start": "2025-06-01T16:00:00",
            "end": "2025-06-01T23:00:00"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, Method::DELETE, "/users/1", waiter, None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_waiter_time_entries_are_limited_to_own() {
    let app = setup().await;
    let waiter_token = login(&app, "waiter", "waiter123").await;
    let lead_token = login(&app, "lead", "lead123").await;
    let waiter = Some(waiter_token.as_str());
    let lead = Some(lead_token.as_str());
    let lead_id = user_id(&app, &lead_token).await;

    let (status, own) = send(
        &app,
        Method::POST,
        "/hours",
        waiter,
        Some(json!({ "start": "2025-06-01T10:00:00", "end": "2025-06-01T18:30:00" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(own["username"], "waiter");
    assert_eq!(own["minutes"], 510);

    let (status, _) = send(
        &app,
        Method::POST,
        "/hours",
        waiter,
        Some(json!({
            "user_id": lead_id,
            "start": "2025-06-01T10:00:00",
            "end": "2025-06-01T18:00:00"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, leads_entry) = send(
        &app,
        Method::POST,
        "/hours",
        lead,
        Some(json!({ "start": "2025-06-02T10:00:00", "end": "2025-06-02T18:00:00" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, visible) = send(&app, Method::GET, "/hours", waiter, None).await;
    assert_eq!(visible.as_array().unwrap().len(), 1);

    let (_, visible) = send(&app, Method::GET, "/hours", lead, None).await;
    assert_eq!(visible.as_array().unwrap().len(), 2);

    let uri = format!("/hours/{}", leads_entry["id"]);
    let (status, _) = send(&app, Method::GET, &uri, waiter, None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, Method::DELETE, &uri, waiter, None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let uri = format!("/hours/{}", own["id"]);
    let (status, fetched) = send(&app, Method::GET, &uri, waiter, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["minutes"], 510);

    let uri = format!("/hours/{}", own["id"]);
    let (status, _) = send(
        &app,
        Method::PUT,
        &uri,
        waiter,
        Some(json!({ "note": "edited" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, updated) = send(
        &app,
        Method::PUT,
        &uri,
        lead,
        Some(json!({ "note": "checked" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["note"], "checked");

    let (status, _) = send(&app, Method::DELETE, &uri, waiter, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(
        &app,
        Method::POST,
        "/hours",
        waiter,
        Some(json!({ "start": "2025-06-03T18:00:00", "end": "2025-06-03T10:00:00" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation");
}

#[tokio::test]
async fn test_shift_lead_access() {
    let app = setup().await;
    let token = login(&app, "lead", "lead123").await;
    let lead = Some(token.as_str());

    let (status, created) = send(
        &app,
        Method::POST,
        "/reservations",
        lead,
        Some(json!({ "customer": "Familie Huber", "at": "2025-06-01T19:00:00" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["size"], 2);

    let uri = format!("/reservations/{}", created["id"]);
    let (status, updated) = send(&app, Method::PUT, &uri, lead, Some(json!({ "size": 5 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["size"], 5);

    let (status, fetched) = send(&app, Method::GET, &uri, lead, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["customer"], "Familie Huber");

    let (status, _) = send(&app, Method::DELETE, &uri, lead, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, &uri, lead, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, report) = send(
        &app,
        Method::POST,
        "/reports",
        lead,
        Some(json!({ "date": "2025-06-01", "revenue": 1830.4, "issues": "Kühlhaus laut" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(report["lead"], "lead");

    let (status, reports) = send(&app, Method::GET, "/reports", lead, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reports.as_array().unwrap().len(), 1);

    let uri = format!("/reports/{}", report["id"]);
    let (status, fetched) = send(&app, Method::GET, &uri, lead, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["issues"], "Kühlhaus laut");

    let (status, shift) = send(
        &app,
        Method::POST,
        "/shifts",
        lead,
        Some(json!({
            "employee": "Kellner",
            "role": "Service",
            "start": "2025-06-01T16:00:00",
            "end": "2025-06-01T23:00:00"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/shifts/{}", shift["id"]);
    let (status, fetched) = send(&app, Method::GET, &uri, lead, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["employee"], "Kellner");

    let (status, _) = send(&app, Method::GET, "/shifts/9999", lead, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    for uri in ["/deposit", "/users"] {
        let (status, _) = send(&app, Method::GET, uri, lead, None).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "GET {uri}");
    }
}

#[tokio::test]
async fn test_manager_access() {
    let app = setup().await;
    let token = login(&app, "admin", "admin123").await;
    let admin = Some(token.as_str());
    let admin_id = user_id(&app, &token).await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/users",
        admin,
        Some(json!({ "username": "mia", "full_name": "Mia Lang", "password": "mia123" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["role"], "waiter");

    let (status, _) = send(
        &app,
        Method::POST,
        "/users",
        admin,
        Some(json!({ "username": "mia", "password": "other" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, deposit) = send(
        &app,
        Method::POST,
        "/deposit",
        admin,
        Some(json!({
            "user_id": created["id"],
            "item": "Schürze",
            "size": "M",
            "amount": 15.0,
            "date": "2025-06-01"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(deposit["returned"], false);
    assert_eq!(deposit["username"], "mia");

    let uri = format!("/deposit/{}", deposit["id"]);
    let (status, updated) = send(
        &app,
        Method::PUT,
        &uri,
        admin,
        Some(json!({ "size": "L" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["size"], "L");
    assert_eq!(updated["username"], "mia");

    let uri = format!("/deposit/{}/toggle", deposit["id"]);
    let (status, toggled) = send(&app, Method::POST, &uri, admin, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toggled["returned"], true);
    assert_eq!(toggled["username"], "mia");

    let (_, deposits) = send(&app, Method::GET, "/deposit", admin, None).await;
    assert_eq!(deposits[0]["username"], "mia");

    let uri = format!("/deposit/{}", deposit["id"]);
    let (status, fetched) = send(&app, Method::GET, &uri, admin, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["returned"], true);

    let uri = format!("/users/{}", created["id"]);
    let (status, fetched) = send(&app, Method::GET, &uri, admin, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["username"], "mia");
    assert!(fetched.get("password_hash").is_none());

    let uri = format!("/users/{admin_id}");
    let (status, body) = send(&app, Method::DELETE, &uri, admin, None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "conflict");

    let uri = format!("/users/{}", created["id"]);
    let (status, promoted) = send(
        &app,
        Method::PUT,
        &uri,
        admin,
        Some(json!({ "role": "shift_lead" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(promoted["role"], "shift_lead");

    let (status, _) = send(&app, Method::DELETE, &uri, admin, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, deposits) = send(&app, Method::GET, "/deposit", admin, None).await;
    assert!(deposits.as_array().unwrap().is_empty());

    let (status, stats) = send(&app, Method::GET, "/", admin, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["users"], 3);
}

#[tokio::test]
async fn test_reports_keep_listing_after_author_is_deleted() {
    let app = setup().await;
    let token = login(&app, "admin", "admin123").await;
    let admin = Some(token.as_str());

    let (status, carla) = send(
        &app,
        Method::POST,
        "/users",
        admin,
        Some(json!({ "username": "carla", "role": "shift_lead", "password": "carla123" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let carla_token = login(&app, "carla", "carla123").await;
    let (status, report) = send(
        &app,
        Method::POST,
        "/reports",
        Some(carla_token.as_str()),
        Some(json!({ "date": "2025-06-03", "revenue": 1800.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(report["lead"], "carla");

    let uri = format!("/users/{}", carla["id"]);
    let (status, _) = send(&app, Method::DELETE, &uri, admin, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, reports) = send(&app, Method::GET, "/reports", admin, None).await;
    assert_eq!(status, StatusCode::OK);
    let listed = reports
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"] == report["id"])
        .expect("report should still be listed");
    assert_eq!(listed["lead"], Value::Null);
    assert_eq!(listed["lead_id"], Value::Null);

    let uri = format!("/reports/{}", report["id"]);
    let (status, fetched) = send(&app, Method::GET, &uri, admin, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["lead"], Value::Null);
}

#[tokio::test]
async fn test_role_changes_apply_to_existing_tokens() {
    let app = setup().await;
    let admin_token = login(&app, "admin", "admin123").await;
    let waiter_token = login(&app, "waiter", "waiter123").await;
    let waiter_id = user_id(&app, &waiter_token).await;

    let (status, _) = send(&app, Method::GET, "/reservations", Some(waiter_token.as_str()), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let uri = format!("/users/{waiter_id}");
    send(
        &app,
        Method::PUT,
        &uri,
        Some(admin_token.as_str()),
        Some(json!({ "role": "shift_lead" })),
    )
    .await;

    let (status, _) = send(&app, Method::GET, "/reservations", Some(waiter_token.as_str()), None).await;
    assert_eq!(status, StatusCode::OK);

    send(&app, Method::DELETE, &uri, Some(admin_token.as_str()), None).await;
    let (status, _) = send(&app, Method::GET, "/me", Some(waiter_token.as_str()), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_default_password_can_be_changed() {
    let app = setup().await;
    let token = login(&app, "lead", "lead123").await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/me/password",
        Some(token.as_str()),
        Some(json!({ "current_password": "wrong", "new_password": "better-one" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/me/password",
        Some(token.as_str()),
        Some(json!({ "current_password": "lead123", "new_password": "better-one" })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        Method::POST,
        "/login",
        None,
        Some(json!({ "username": "lead", "password": "lead123" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    login(&app, "lead", "better-one").await;
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = setup().await;

    let (status, doc) = send(&app, Method::GET, "/api-docs/openapi.json", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["info"]["title"], "BistroOps API");
    assert!(doc["paths"].get("/hours/{id}").is_some());
}

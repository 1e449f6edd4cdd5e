mod common;

use axum::http::{header, HeaderValue, StatusCode};
use common::{api_only_settings, setup_test_server, setup_test_server_with, EchoProvider};
use receptionist::config::settings::Settings;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_create_lead_success() {
    let app = setup_test_server(Arc::new(EchoProvider::default())).await;

    let response = app
        .server
        .post("/api/leads")
        .json(&json!({
            "name": "Ann",
            "email": "a@x.com",
            "company": "Acme",
            "productInterest": "The Croupier",
            "inquiry": "Can I get a demo?"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_create_lead_without_name_fails_and_does_not_insert() {
    let app = setup_test_server(Arc::new(EchoProvider::default())).await;

    let response = app
        .server
        .post("/api/leads")
        .json(&json!({ "email": "a@x.com" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Name and email are required");

    let leads: serde_json::Value = app.server.get("/api/leads").await.json();
    assert_eq!(leads, json!([]));
}

#[tokio::test]
async fn test_create_lead_with_empty_email_fails() {
    let app = setup_test_server(Arc::new(EchoProvider::default())).await;

    let response = app
        .server
        .post("/api/leads")
        .json(&json!({ "name": "Ann", "email": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_leads_round_trip_newest_first() {
    let app = setup_test_server(Arc::new(EchoProvider::default())).await;

    app.server
        .post("/api/leads")
        .json(&json!({
            "name": "Bob",
            "email": "bob@example.com",
            "company": "Initech",
            "product_interest": "The Stack",
            "inquiry": "Is it stable?"
        }))
        .await
        .assert_status(StatusCode::CREATED);

    app.server
        .post("/api/leads")
        .json(&json!({ "name": "Ann", "email": "a@x.com" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = app.server.get("/api/leads").await;
    response.assert_status(StatusCode::OK);

    let leads: serde_json::Value = response.json();
    let leads = leads.as_array().unwrap();
    assert_eq!(leads.len(), 2);

    assert_eq!(leads[0]["name"], "Ann");
    assert_eq!(leads[0]["email"], "a@x.com");
    assert!(leads[0]["company"].is_null());
    assert!(leads[0]["productInterest"].is_null());
    assert!(leads[0]["inquiry"].is_null());
    assert!(leads[0]["id"].is_i64());
    assert!(leads[0]["createdAt"].is_string());

    assert_eq!(leads[1]["name"], "Bob");
    assert_eq!(leads[1]["company"], "Initech");
    assert_eq!(leads[1]["productInterest"], "The Stack");
    assert_eq!(leads[1]["inquiry"], "Is it stable?");
}

#[tokio::test]
async fn test_lead_fields_are_stored_verbatim() {
    let app = setup_test_server(Arc::new(EchoProvider::default())).await;

    app.server
        .post("/api/leads")
        .json(&json!({
            "name": "  Ann  ",
            "email": "not-an-email",
            "company": ""
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let leads: serde_json::Value = app.server.get("/api/leads").await.json();

    assert_eq!(leads[0]["name"], "  Ann  ");
    assert_eq!(leads[0]["email"], "not-an-email");
    assert!(leads[0]["company"].is_null());
}

#[tokio::test]
async fn test_list_leads_requires_admin_token_when_configured() {
    let settings = Settings {
        admin_token: Some("letmein".to_string()),
        ..api_only_settings()
    };
    let app = setup_test_server_with(Arc::new(EchoProvider::default()), settings).await;

    app.server
        .post("/api/leads")
        .json(&json!({ "name": "Ann", "email": "a@x.com" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = app.server.get("/api/leads").await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Unauthorized");

    let response = app
        .server
        .get("/api/leads")
        .add_header(header::AUTHORIZATION, HeaderValue::from_static("Bearer wrong"))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = app
        .server
        .get("/api/leads")
        .add_header(header::AUTHORIZATION, HeaderValue::from_static("Bearer letmein"))
        .await;
    response.assert_status(StatusCode::OK);

    let leads: serde_json::Value = response.json();
    assert_eq!(leads.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_leads_are_listed_by_insertion_order_not_clock() {
    let app = setup_test_server(Arc::new(EchoProvider::default())).await;

    // Written while the clock was running ahead.
    sqlx::query("INSERT INTO leads (name, email, created_at) VALUES (?, ?, ?)")
        .bind("Bob")
        .bind("bob@example.com")
        .bind("2099-01-01T00:00:00.000Z")
        .execute(&app.db)
        .await
        .unwrap();

    app.server
        .post("/api/leads")
        .json(&json!({ "name": "Ann", "email": "a@x.com" }))
        .await
        .assert_status(StatusCode::CREATED);

    let leads: serde_json::Value = app.server.get("/api/leads").await.json();

    assert_eq!(leads[0]["name"], "Ann");
    assert_eq!(leads[1]["name"], "Bob");
}

#[tokio::test]
async fn test_store_failure_returns_generic_error() {
    let app = setup_test_server(Arc::new(EchoProvider::default())).await;

    sqlx::query("DROP TABLE leads").execute(&app.db).await.unwrap();

    let response = app
        .server
        .post("/api/leads")
        .json(&json!({ "name": "Ann", "email": "a@x.com" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = response.json();
    assert_eq!(body, json!({ "error": "Failed to save lead" }));

    let response = app.server.get("/api/leads").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = response.json();
    assert_eq!(body, json!({ "error": "Failed to fetch leads" }));
}

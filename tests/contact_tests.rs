
use std::sync::Arc;

use actix_web::test::TestRequest;
use portfolio_site::{errors::AppError, relay::FormRelay};
use serde_json::json;
use test_utils::*;

fn valid_form() -> serde_json::Value {
    json!({
        "name": "Grace",
        "email": "grace@example.com",
        "message": "Would love to talk about a project.",
    })
}

#[actix_rt::test]
async fn relayed_submission_is_also_stored() {
    let mut relay = MockRelay::new();
    relay
        .expect_relay()
        .withf(|form| form.email == "grace@example.com" && form.name == "Grace")
        .times(1)
        .returning(|_| Ok(()));
    let relay: Arc<dyn FormRelay> = Arc::new(relay);

    let app = TestApp::with_services(Arc::new(MemoryStorage::default()), Some(relay)).await;

    let (status, body) = app
        .call_json(TestRequest::post().uri("/contact").set_json(valid_form()))
        .await;

    assert_eq!(status, 200);
    assert_eq!(body["relayed"], true);
    assert_eq!(body["stored"], true);
    assert_eq!(app.repos.messages.len(), 1);
}

#[actix_rt::test]
async fn relay_failure_is_visible_and_stores_nothing() {
    let mut relay = MockRelay::new();
    relay
        .expect_relay()
        .times(1)
        .returning(|_| Err(AppError::Upstream("relay answered 500".into())));
    let relay: Arc<dyn FormRelay> = Arc::new(relay);

    let app = TestApp::with_services(Arc::new(MemoryStorage::default()), Some(relay)).await;

    let (status, body) = app
        .call_json(TestRequest::post().uri("/contact").set_json(valid_form()))
        .await;

    assert_eq!(status, 502);
    assert!(body["error"].as_str().unwrap().contains("relay answered 500"));
    assert_eq!(app.repos.messages.len(), 0);
}

#[actix_rt::test]
async fn storage_failure_after_relay_still_reports_sent() {
    let mut relay = MockRelay::new();
    relay.expect_relay().times(1).returning(|_| Ok(()));
    let relay: Arc<dyn FormRelay> = Arc::new(relay);

    let app = TestApp::with_services(Arc::new(MemoryStorage::default()), Some(relay)).await;
    app.repos.messages.fail_inserts();

    let (status, body) = app
        .call_json(TestRequest::post().uri("/contact").set_json(valid_form()))
        .await;

    assert_eq!(status, 200);
    assert_eq!(body["relayed"], true);
    assert_eq!(body["stored"], false);
    assert_eq!(app.repos.messages.len(), 0);
}

#[actix_rt::test]
async fn storage_failure_without_relay_is_an_error() {
    let app = TestApp::spawn().await;
    app.repos.messages.fail_inserts();

    let (status, body) = app
        .call_json(TestRequest::post().uri("/contact").set_json(valid_form()))
        .await;

    assert_eq!(status, 500);
    assert!(body["error"].is_string());
}

#[actix_rt::test]
async fn invalid_form_lists_every_field_and_skips_relay() {
    let mut relay = MockRelay::new();
    relay.expect_relay().times(0);
    let relay: Arc<dyn FormRelay> = Arc::new(relay);

    let app = TestApp::with_services(Arc::new(MemoryStorage::default()), Some(relay)).await;

    let (status, body) = app
        .call_json(TestRequest::post().uri("/contact").set_json(json!({
            "name": "G",
            "email": "nope",
            "message": "short",
        })))
        .await;

    assert_eq!(status, 400);
    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["email", "message", "name"]);
    assert_eq!(app.repos.messages.len(), 0);
}

#[actix_rt::test]
async fn malformed_json_gets_json_error() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .call_json(
            TestRequest::post()
                .uri("/contact")
                .insert_header(("Content-Type", "application/json"))
                .set_payload("{not json"),
        )
        .await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "Invalid JSON body");
}


use actix_web::{cookie::Cookie, test::TestRequest};
use portfolio_site::entities::user::OwnerAccount;
use serde_json::json;
use test_utils::*;

#[actix_rt::test]
async fn login_returns_token_and_sets_session_cookie() {
    let app = TestApp::spawn().await;

    let response = app
        .call(
            TestRequest::post()
                .uri("/admin/login")
                .set_json(json!({"email": OWNER_EMAIL, "password": OWNER_PASSWORD})),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let cookie = response
        .response()
        .cookies()
        .find(|c| c.name() == "session")
        .expect("session cookie");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/admin"));
    assert!(!cookie.value().is_empty());
}

#[actix_rt::test]
async fn login_email_is_case_insensitive() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .call_json(
            TestRequest::post()
                .uri("/admin/login")
                .set_json(json!({"email": "Owner@Example.com", "password": OWNER_PASSWORD})),
        )
        .await;

    assert_eq!(status, 200);
    assert_eq!(body["token_type"], "Bearer");
}

#[actix_rt::test]
async fn wrong_password_is_unauthorized() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .call_json(
            TestRequest::post()
                .uri("/admin/login")
                .set_json(json!({"email": OWNER_EMAIL, "password": "nope-nope-nope"})),
        )
        .await;

    assert_eq!(status, 401);
    assert_eq!(body["error"], "Wrong credentials");
}

#[actix_rt::test]
async fn unknown_email_looks_like_wrong_password() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .call_json(
            TestRequest::post()
                .uri("/admin/login")
                .set_json(json!({"email": "someone@example.com", "password": OWNER_PASSWORD})),
        )
        .await;

    assert_eq!(status, 401);
    assert_eq!(body["error"], "Wrong credentials");
}

#[actix_rt::test]
async fn malformed_login_is_rejected_before_lookup() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .call_json(
            TestRequest::post()
                .uri("/admin/login")
                .set_json(json!({"email": "not-an-email", "password": ""})),
        )
        .await;

    assert_eq!(status, 400);
    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["email", "password"]);
}

#[actix_rt::test]
async fn session_endpoint_reports_owner() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    let (status, body) = app.admin(&token, TestRequest::get().uri("/admin/session")).await;

    assert_eq!(status, 200);
    assert_eq!(body["email"], OWNER_EMAIL);
}

#[actix_rt::test]
async fn session_cookie_is_accepted() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    let (status, _) = app
        .call_json(
            TestRequest::get()
                .uri("/admin/session")
                .cookie(Cookie::new("session", token)),
        )
        .await;

    assert_eq!(status, 200);
}

#[actix_rt::test]
async fn logout_revokes_the_session() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    let response = app
        .call(
            TestRequest::post()
                .uri("/admin/logout")
                .insert_header(("Authorization", format!("Bearer {token}"))),
        )
        .await;
    assert_redirects_to_login(&response);
    assert_eq!(app.revocations.len(), 1);

    let response = app
        .call(
            TestRequest::get()
                .uri("/admin/session")
                .insert_header(("Authorization", format!("Bearer {token}"))),
        )
        .await;
    assert_redirects_to_login(&response);
}

#[actix_rt::test]
async fn other_sessions_survive_a_logout() {
    let app = TestApp::spawn().await;
    let first = app.login().await;
    let second = app.login().await;

    app.admin(&first, TestRequest::post().uri("/admin/logout")).await;

    let (status, _) = app.admin(&second, TestRequest::get().uri("/admin/session")).await;
    assert_eq!(status, 200);
}

#[actix_rt::test]
async fn seeding_the_owner_twice_keeps_the_first_account() {
    let app = TestApp::spawn().await;

    let created = app
        .state
        .auth_handler
        .ensure_owner(OwnerAccount {
            email: OWNER_EMAIL.into(),
            password: "A-Different-Password-42".into(),
        })
        .await
        .unwrap();

    assert!(!created);
    app.login().await;
}

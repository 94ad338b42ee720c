
use actix_web::test::TestRequest;
use serde_json::json;
use test_utils::*;

#[actix_rt::test]
async fn dashboard_counts_every_table() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    app.admin(
        &token,
        TestRequest::post()
            .uri("/admin/blog/new")
            .set_json(json!({"title": "Post", "content": "Body"})),
    )
    .await;
    for title in ["A", "B"] {
        app.admin(
            &token,
            TestRequest::post()
                .uri("/admin/projects/new")
                .set_json(json!({"title": title, "description": "desc"})),
        )
        .await;
    }
    app.call_json(TestRequest::post().uri("/contact").set_json(json!({
        "name": "Lin",
        "email": "lin@example.com",
        "message": "Hello from the contact page",
    })))
    .await;

    let (status, body) = app.admin(&token, TestRequest::get().uri("/admin/dashboard")).await;

    assert_eq!(status, 200);
    assert_eq!(body["owner"], OWNER_EMAIL);
    assert_eq!(
        body["stats"],
        json!({
            "blog_posts": 1,
            "projects": 2,
            "experience": 0,
            "certificates": 0,
            "cv_files": 0,
            "messages": 1,
        })
    );
}

#[actix_rt::test]
async fn home_shows_counts_without_about() {
    let app = TestApp::spawn().await;
    let token = app.login().await;
    app.admin(
        &token,
        TestRequest::post().uri("/admin/certificates/new").set_json(json!({
            "title": "Cert",
            "file_url": "https://cdn.test/cert.pdf",
        })),
    )
    .await;

    let (status, body) = app.call_json(TestRequest::get().uri("/")).await;

    assert_eq!(status, 200);
    assert!(body["about"].is_null());
    assert_eq!(body["certificates"], 1);
    assert_eq!(body["blog_posts"], 0);
}

#[actix_rt::test]
async fn health_reports_memory_session_store() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    let (status, body) = app.admin(&token, TestRequest::get().uri("/admin/health")).await;

    assert_eq!(status, 200);
    assert_eq!(body["database"], "OK");
    assert_eq!(body["session_backend"], "memory");
}


use actix_web::test::TestRequest;
use serde_json::json;
use test_utils::*;

fn words(count: usize) -> String {
    vec!["word"; count].join(" ")
}

#[actix_rt::test]
async fn created_post_gets_slug_from_title() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    let (status, body) = app
        .admin(
            &token,
            TestRequest::post().uri("/admin/blog/new").set_json(json!({
                "title": "Hello, Rust World!",
                "content": "<p>First post</p>",
            })),
        )
        .await;

    assert_eq!(status, 201);
    assert_eq!(body["slug"], "hello-rust-world");
    assert_eq!(body["public_url"], "/blog/hello-rust-world");
    assert_eq!(app.repos.blog.rows()[0].slug, "hello-rust-world");
}

#[actix_rt::test]
async fn public_list_is_newest_first_with_derived_fields() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    for (title, content, excerpt) in [
        ("Older", words(450), Some("Hand written")),
        ("Newer", format!("<p>{}</p>", words(10)), None),
    ] {
        let (status, _) = app
            .admin(
                &token,
                TestRequest::post().uri("/admin/blog/new").set_json(json!({
                    "title": title,
                    "content": content,
                    "excerpt": excerpt,
                })),
            )
            .await;
        assert_eq!(status, 201);
    }

    let (status, body) = app.call_json(TestRequest::get().uri("/blog")).await;
    assert_eq!(status, 200);

    let posts = body.as_array().unwrap();
    assert_eq!(posts[0]["title"], "Newer");
    assert_eq!(posts[0]["excerpt"], format!("{}...", words(10)));
    assert_eq!(posts[0]["reading_time_minutes"], 1);
    assert_eq!(posts[1]["excerpt"], "Hand written");
    assert_eq!(posts[1]["reading_time_minutes"], 3);
}

#[actix_rt::test]
async fn post_page_serves_sanitized_content() {
    let app = TestApp::spawn().await;
    let token = app.login().await;
    app.admin(
        &token,
        TestRequest::post().uri("/admin/blog/new").set_json(json!({
            "title": "Safe Markup",
            "content": "<p>Visible</p><script>alert('x')</script>",
        })),
    )
    .await;

    let (status, body) = app.call_json(TestRequest::get().uri("/blog/safe-markup")).await;

    assert_eq!(status, 200);
    assert_eq!(body["content_html"], "<p>Visible</p>");
    assert_eq!(body["reading_time_minutes"], 1);
}

#[actix_rt::test]
async fn unknown_slug_is_not_found() {
    let app = TestApp::spawn().await;

    let (status, body) = app.call_json(TestRequest::get().uri("/blog/missing-post")).await;

    assert_eq!(status, 404);
    assert!(body["error"].as_str().unwrap().contains("Blog post not found"));
}

#[actix_rt::test]
async fn colliding_slugs_resolve_to_newest_post() {
    let app = TestApp::spawn().await;
    let token = app.login().await;
    for content in ["first version", "second version"] {
        app.admin(
            &token,
            TestRequest::post().uri("/admin/blog/new").set_json(json!({
                "title": "Same Title",
                "content": content,
            })),
        )
        .await;
    }

    let (_, body) = app.call_json(TestRequest::get().uri("/blog/same-title")).await;

    assert_eq!(body["content_html"], "second version");
    assert_eq!(app.repos.blog.len(), 2);
}

#[actix_rt::test]
async fn editing_title_keeps_slug() {
    let app = TestApp::spawn().await;
    let token = app.login().await;
    let (_, created) = app
        .admin(
            &token,
            TestRequest::post().uri("/admin/blog/new").set_json(json!({
                "title": "Original Title",
                "content": "Body",
                "excerpt": "Intro",
            })),
        )
        .await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = app
        .admin(
            &token,
            TestRequest::put()
                .uri(&format!("/admin/blog/{id}/edit"))
                .set_json(json!({"title": "Renamed Title", "excerpt": ""})),
        )
        .await;

    assert_eq!(status, 200);
    assert_eq!(body["title"], "Renamed Title");
    assert_eq!(body["slug"], "original-title");
    assert!(body["excerpt"].is_null());
    assert_eq!(body["content"], "Body");
}

#[actix_rt::test]
async fn blank_title_is_rejected_without_writing() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    let (status, body) = app
        .admin(
            &token,
            TestRequest::post()
                .uri("/admin/blog/new")
                .set_json(json!({"title": "   ", "content": "Body"})),
        )
        .await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"][0]["field"], "title");
    assert_eq!(app.repos.blog.len(), 0);
}

#[actix_rt::test]
async fn edit_form_loads_raw_post() {
    let app = TestApp::spawn().await;
    let token = app.login().await;
    let (_, created) = app
        .admin(
            &token,
            TestRequest::post().uri("/admin/blog/new").set_json(json!({
                "title": "Draft",
                "content": "<em>raw</em>",
            })),
        )
        .await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = app
        .admin(&token, TestRequest::get().uri(&format!("/admin/blog/{id}/edit")))
        .await;

    assert_eq!(status, 200);
    assert_eq!(body["content"], "<em>raw</em>");
}

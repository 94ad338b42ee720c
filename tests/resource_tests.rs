
use actix_web::test::TestRequest;
use serde_json::json;
use test_utils::*;
use uuid::Uuid;

#[actix_rt::test]
async fn project_tags_are_parsed_from_comma_input() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    let (status, body) = app
        .admin(
            &token,
            TestRequest::post().uri("/admin/projects/new").set_json(json!({
                "title": "Site",
                "description": "This site",
                "github_link": "https://github.com/owner/site",
                "live_demo": "",
                "tags": " rust, actix ,, postgres ",
            })),
        )
        .await;

    assert_eq!(status, 201);
    assert_eq!(body["tags"], json!(["rust", "actix", "postgres"]));
    assert!(body["live_demo"].is_null());
}

#[actix_rt::test]
async fn invalid_project_link_is_a_field_error() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    let (status, body) = app
        .admin(
            &token,
            TestRequest::post().uri("/admin/projects/new").set_json(json!({
                "title": "Site",
                "description": "This site",
                "github_link": "not a url",
            })),
        )
        .await;

    assert_eq!(status, 400);
    assert_eq!(body["details"][0]["field"], "github_link");
    assert_eq!(app.repos.projects.len(), 0);
}

#[actix_rt::test]
async fn projects_list_newest_first_and_update_replaces_tags() {
    let app = TestApp::spawn().await;
    let token = app.login().await;
    let mut ids = Vec::new();
    for title in ["One", "Two"] {
        let (_, body) = app
            .admin(
                &token,
                TestRequest::post().uri("/admin/projects/new").set_json(json!({
                    "title": title,
                    "description": "desc",
                    "tags": "a,b",
                })),
            )
            .await;
        ids.push(body["id"].as_str().unwrap().to_string());
    }

    let (_, list) = app.call_json(TestRequest::get().uri("/projects")).await;
    assert_eq!(list[0]["title"], "Two");
    assert_eq!(list[1]["title"], "One");

    let (status, updated) = app
        .admin(
            &token,
            TestRequest::put()
                .uri(&format!("/admin/projects/{}/edit", ids[0]))
                .set_json(json!({"tags": "c"})),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(updated["tags"], json!(["c"]));
    assert_eq!(updated["title"], "One");
}

#[actix_rt::test]
async fn experience_is_ordered_by_year_descending() {
    let app = TestApp::spawn().await;
    let token = app.login().await;
    for year in ["2019 - 2021", "2023 - Present", "2021 - 2023"] {
        let (status, _) = app
            .admin(
                &token,
                TestRequest::post().uri("/admin/experience/new").set_json(json!({
                    "title": "Engineer",
                    "organization": "Acme",
                    "year": year,
                    "description": "Built things",
                })),
            )
            .await;
        assert_eq!(status, 201);
    }

    let (_, list) = app.call_json(TestRequest::get().uri("/experience")).await;
    let years: Vec<&str> = list.as_array().unwrap().iter().map(|e| e["year"].as_str().unwrap()).collect();

    assert_eq!(years, vec!["2023 - Present", "2021 - 2023", "2019 - 2021"]);
}

#[actix_rt::test]
async fn certificates_are_tagged_by_file_kind() {
    let app = TestApp::spawn().await;
    let token = app.login().await;
    for (title, url, date) in [
        ("Undated", "https://cdn.test/cert.pdf", None),
        ("Badge", "https://cdn.test/badge.PNG?v=2", Some("2024-05-01")),
    ] {
        let (status, _) = app
            .admin(
                &token,
                TestRequest::post().uri("/admin/certificates/new").set_json(json!({
                    "title": title,
                    "file_url": url,
                    "issued_date": date,
                })),
            )
            .await;
        assert_eq!(status, 201);
    }

    let (_, list) = app.call_json(TestRequest::get().uri("/certificates")).await;

    assert_eq!(list[0]["title"], "Badge");
    assert_eq!(list[0]["file_kind"], "image");
    assert_eq!(list[1]["title"], "Undated");
    assert_eq!(list[1]["file_kind"], "document");
}

#[actix_rt::test]
async fn certificate_needs_a_file_or_url() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    let (status, body) = app
        .admin(
            &token,
            TestRequest::post()
                .uri("/admin/certificates/new")
                .set_json(json!({"title": "No file"})),
        )
        .await;

    assert_eq!(status, 400);
    assert_eq!(body["details"][0]["field"], "file_url");
}

#[actix_rt::test]
async fn delete_requires_confirmation() {
    let app = TestApp::spawn().await;
    let token = app.login().await;
    let (_, created) = app
        .admin(
            &token,
            TestRequest::post().uri("/admin/experience/new").set_json(json!({
                "title": "Engineer",
                "organization": "Acme",
                "year": "2020",
                "description": "Built things",
            })),
        )
        .await;
    let id = created["id"].as_str().unwrap();

    let (status, _) = app
        .admin(&token, TestRequest::delete().uri(&format!("/admin/experience/{id}")))
        .await;
    assert_eq!(status, 400);
    assert_eq!(app.repos.experience.len(), 1);

    let (status, _) = app
        .admin(&token, TestRequest::delete().uri(&format!("/admin/experience/{id}?confirm=true")))
        .await;
    assert_eq!(status, 204);
    assert_eq!(app.repos.experience.len(), 0);
}

#[actix_rt::test]
async fn deleting_missing_record_is_not_found() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    for resource in ["blog", "projects", "experience", "certificates", "cv", "messages"] {
        let (status, _) = app
            .admin(
                &token,
                TestRequest::delete().uri(&format!("/admin/{resource}/{}?confirm=true", Uuid::new_v4())),
            )
            .await;
        assert_eq!(status, 404, "{resource}");
    }
}

#[actix_rt::test]
async fn malformed_id_is_bad_request() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    let (status, _) = app
        .admin(&token, TestRequest::get().uri("/admin/projects/not-a-uuid/edit"))
        .await;

    assert_eq!(status, 400);
}

#[actix_rt::test]
async fn about_save_creates_then_updates_current_row() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    let (_, before) = app.admin(&token, TestRequest::get().uri("/admin/about")).await;
    assert!(before.is_null());

    let (status, first) = app
        .admin(
            &token,
            TestRequest::put().uri("/admin/about").set_json(json!({"content": "<p>Hi</p>"})),
        )
        .await;
    assert_eq!(status, 201);
    assert_eq!(first["created"], true);

    let (status, second) = app
        .admin(
            &token,
            TestRequest::put()
                .uri("/admin/about")
                .set_json(json!({"content": "<p>Hello again</p><script>x()</script>"})),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(second["created"], false);
    assert_eq!(second["id"], first["id"]);
    assert_eq!(app.repos.about.len(), 1);

    let (_, home) = app.call_json(TestRequest::get().uri("/")).await;
    assert_eq!(home["about"]["content_html"], "<p>Hello again</p>");
}

#[actix_rt::test]
async fn messages_can_be_listed_and_deleted() {
    let app = TestApp::spawn().await;
    let token = app.login().await;
    let (status, _) = app
        .call_json(TestRequest::post().uri("/contact").set_json(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "I would like to hire you.",
        })))
        .await;
    assert_eq!(status, 200);

    let (_, list) = app.admin(&token, TestRequest::get().uri("/admin/messages")).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    let id = list[0]["id"].as_str().unwrap();

    let (status, _) = app
        .admin(&token, TestRequest::delete().uri(&format!("/admin/messages/{id}?confirm=true")))
        .await;
    assert_eq!(status, 204);
    assert_eq!(app.repos.messages.len(), 0);
}

#[actix_rt::test]
async fn create_answers_with_written_row_without_reading_back() {
    let app = TestApp::spawn().await;
    let token = app.login().await;
    app.repos.projects.fail_reads();
    app.repos.experience.fail_reads();

    let (status, body) = app
        .admin(
            &token,
            TestRequest::post().uri("/admin/projects/new").set_json(json!({
                "title": "Once",
                "description": "Created exactly one time",
            })),
        )
        .await;
    assert_eq!(status, 201);
    assert_eq!(body["id"], app.repos.projects.rows()[0].id.to_string());

    let (status, body) = app
        .admin(
            &token,
            TestRequest::post().uri("/admin/experience/new").set_json(json!({
                "title": "Engineer",
                "organization": "Acme",
                "year": "2021",
                "description": "Built things",
            })),
        )
        .await;
    assert_eq!(status, 201);
    assert_eq!(body["year"], "2021");
    assert_eq!(app.repos.projects.len(), 1);
    assert_eq!(app.repos.experience.len(), 1);
}

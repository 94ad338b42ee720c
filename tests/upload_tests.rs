
use std::sync::Arc;

use actix_web::{http::header, test::TestRequest};
use portfolio_site::errors::AppError;
use serde_json::json;
use test_utils::*;

fn bearer(request: TestRequest, token: &str) -> TestRequest {
    request.insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
}

#[actix_rt::test]
async fn image_upload_returns_public_url() {
    let storage = Arc::new(MemoryStorage::default());
    let app = TestApp::with_services(storage.clone(), None).await;
    let token = app.login().await;

    let request = multipart_request(
        "/admin/uploads/images",
        &[Part::file("file", "Screenshot.PNG", "image/png", &PNG_BYTES)],
    );
    let (status, body) = app.call_json(bearer(request, &token)).await;

    assert_eq!(status, 201);
    let url = body["public_url"].as_str().unwrap();
    assert!(url.starts_with(&format!("{PUBLIC_BASE}/images/projects/")), "{url}");
    assert!(url.ends_with(".png"));
    assert_eq!(body["content_type"], "image/png");
    assert_eq!(storage.paths().len(), 1);
}

#[actix_rt::test]
async fn non_image_is_refused_by_image_endpoint() {
    let storage = Arc::new(MemoryStorage::default());
    let app = TestApp::with_services(storage.clone(), None).await;
    let token = app.login().await;

    let request = multipart_request(
        "/admin/uploads/images",
        &[Part::file("file", "notes.txt", "text/plain", b"just some notes")],
    );
    let (status, _) = app.call_json(bearer(request, &token)).await;

    assert_eq!(status, 400);
    assert!(storage.paths().is_empty());
}

#[actix_rt::test]
async fn unknown_image_folder_is_refused() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    let request = multipart_request(
        "/admin/uploads/images",
        &[
            Part::file("file", "a.png", "image/png", &PNG_BYTES),
            Part::text("folder", "../etc"),
        ],
    );
    let (status, _) = app.call_json(bearer(request, &token)).await;

    assert_eq!(status, 400);
}

#[actix_rt::test]
async fn blog_post_with_cover_stores_upload_url() {
    let storage = Arc::new(MemoryStorage::default());
    let app = TestApp::with_services(storage.clone(), None).await;
    let token = app.login().await;
    let post = json!({"title": "With Cover", "content": "Body"}).to_string();

    let request = multipart_request(
        "/admin/blog/new",
        &[
            Part::json("post", post.as_bytes()),
            Part::file("cover_image", "cover.png", "image/png", &PNG_BYTES),
        ],
    );
    let (status, body) = app.call_json(bearer(request, &token)).await;

    assert_eq!(status, 201);
    let cover = body["cover_image"].as_str().unwrap();
    assert!(cover.starts_with(&format!("{PUBLIC_BASE}/images/blog-covers/")), "{cover}");
    assert_eq!(app.repos.blog.rows()[0].cover_image.as_deref(), Some(cover));
}

#[actix_rt::test]
async fn failed_insert_removes_uploaded_cover() {
    let mut storage = MockStorage::new();
    storage
        .expect_upload()
        .withf(|bucket, path, _, content_type| {
            bucket == "images" && path.starts_with("blog-covers/") && content_type == "image/png"
        })
        .times(1)
        .returning(|_, _, _, _| Ok(()));
    storage
        .expect_public_url()
        .returning(|bucket, path| format!("{PUBLIC_BASE}/{bucket}/{path}"));
    storage
        .expect_remove()
        .withf(|bucket, path| bucket == "images" && path.starts_with("blog-covers/"))
        .times(1)
        .returning(|_, _| Ok(()));

    let repos = MemoryRepos::new();
    repos.blog.fail_inserts();
    let app = TestApp::build(repos, test_config(), Arc::new(storage), None).await;
    let token = app.login().await;
    let post = json!({"title": "Doomed", "content": "Body"}).to_string();

    let request = multipart_request(
        "/admin/blog/new",
        &[
            Part::json("post", post.as_bytes()),
            Part::file("cover_image", "cover.png", "image/png", &PNG_BYTES),
        ],
    );
    let (status, body) = app.call_json(bearer(request, &token)).await;

    assert_eq!(status, 500);
    assert_eq!(body["error"], "Internal server error");
    assert_eq!(app.repos.blog.len(), 0);
}

#[actix_rt::test]
async fn storage_failure_writes_no_row() {
    let mut storage = MockStorage::new();
    storage
        .expect_upload()
        .times(1)
        .returning(|_, _, _, _| Err(AppError::Storage("bucket unavailable".into())));
    storage.expect_remove().times(0);

    let app = TestApp::build(MemoryRepos::new(), test_config(), Arc::new(storage), None).await;
    let token = app.login().await;

    let request = multipart_request(
        "/admin/cv",
        &[
            Part::text("title", "Resume"),
            Part::file("file", "resume.pdf", "application/pdf", PDF_BYTES),
        ],
    );
    let (status, _) = app.call_json(bearer(request, &token)).await;

    assert_eq!(status, 502);
    assert_eq!(app.repos.cv_files.len(), 0);
}

#[actix_rt::test]
async fn cv_upload_lists_on_public_page_and_delete_keeps_blob() {
    let storage = Arc::new(MemoryStorage::default());
    let app = TestApp::with_services(storage.clone(), None).await;
    let token = app.login().await;

    let request = multipart_request(
        "/admin/cv",
        &[
            Part::text("title", "Resume 2025"),
            Part::file("file", "resume.pdf", "application/pdf", PDF_BYTES),
        ],
    );
    let (status, created) = app.call_json(bearer(request, &token)).await;
    assert_eq!(status, 201);
    assert!(created["file_url"].as_str().unwrap().starts_with(&format!("{PUBLIC_BASE}/files/cv/")));

    let (_, page) = app.call_json(TestRequest::get().uri("/cv")).await;
    assert_eq!(page["files"][0]["title"], "Resume 2025");
    assert!(page["about"].is_null());

    let id = created["id"].as_str().unwrap();
    let (status, _) = app
        .admin(&token, TestRequest::delete().uri(&format!("/admin/cv/{id}?confirm=true")))
        .await;
    assert_eq!(status, 204);
    assert_eq!(app.repos.cv_files.len(), 0);
    assert_eq!(storage.paths().len(), 1);
}

#[actix_rt::test]
async fn certificate_file_upload_is_classified_as_document() {
    let app = TestApp::spawn().await;
    let token = app.login().await;
    let certificate = json!({"title": "Cloud Practitioner", "issued_date": "2023-03-14"}).to_string();

    let request = multipart_request(
        "/admin/certificates/new",
        &[
            Part::json("certificate", certificate.as_bytes()),
            Part::file("file", "cert.pdf", "application/pdf", PDF_BYTES),
        ],
    );
    let (status, created) = app.call_json(bearer(request, &token)).await;
    assert_eq!(status, 201);
    assert!(created["file_url"].as_str().unwrap().contains("/files/certificates/"));

    let (_, list) = app.call_json(TestRequest::get().uri("/certificates")).await;
    assert_eq!(list[0]["file_kind"], "document");
}

#[actix_rt::test]
async fn empty_cv_file_is_rejected() {
    let storage = Arc::new(MemoryStorage::default());
    let app = TestApp::with_services(storage.clone(), None).await;
    let token = app.login().await;

    let request = multipart_request(
        "/admin/cv",
        &[
            Part::text("title", "Empty"),
            Part::file("file", "empty.pdf", "application/pdf", b""),
        ],
    );
    let (status, _) = app.call_json(bearer(request, &token)).await;

    assert_eq!(status, 400);
    assert!(storage.paths().is_empty());
    assert_eq!(app.repos.cv_files.len(), 0);
}

#[actix_rt::test]
async fn committed_cv_keeps_its_blob_when_reads_fail() {
    let storage = Arc::new(MemoryStorage::default());
    let app = TestApp::with_services(storage.clone(), None).await;
    app.repos.cv_files.fail_reads();
    let token = app.login().await;

    let request = multipart_request(
        "/admin/cv",
        &[
            Part::text("title", "Resume"),
            Part::file("file", "resume.pdf", "application/pdf", PDF_BYTES),
        ],
    );
    let (status, body) = app.call_json(bearer(request, &token)).await;

    assert_eq!(status, 201);
    let rows = app.repos.cv_files.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(body["file_url"], rows[0].file_url);

    let paths = storage.paths();
    assert_eq!(paths.len(), 1);
    assert!(rows[0].file_url.ends_with(&paths[0]));
}

#[actix_rt::test]
async fn committed_certificate_keeps_its_blob_when_reads_fail() {
    let storage = Arc::new(MemoryStorage::default());
    let app = TestApp::with_services(storage.clone(), None).await;
    app.repos.certificates.fail_reads();
    let token = app.login().await;
    let certificate = json!({"title": "Cloud Practitioner"}).to_string();

    let request = multipart_request(
        "/admin/certificates/new",
        &[
            Part::json("certificate", certificate.as_bytes()),
            Part::file("file", "cert.pdf", "application/pdf", PDF_BYTES),
        ],
    );
    let (status, body) = app.call_json(bearer(request, &token)).await;

    assert_eq!(status, 201);
    assert_eq!(app.repos.certificates.len(), 1);
    assert_eq!(storage.paths().len(), 1);
    assert_eq!(body["title"], "Cloud Practitioner");
}

use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use tracing::instrument;

use crate::{
    entities::{about::AboutView, cv_file::{CvFile, NewCvFileRequest}},
    errors::AppError,
    handlers::forms::{read_temp_file, DeleteConfirmation},
    use_cases::extractors::AdminSession,
    AppState,
};

#[derive(MultipartForm)]
pub struct CvUpload {
    pub title: Text<String>,
    pub file: TempFile,
}

#[derive(Serialize)]
struct CvPageView {
    about: Option<AboutView>,
    files: Vec<CvFile>,
}

/// Public CV page: downloadable files next to the About text.
#[instrument(skip(state))]
pub async fn cv_page(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let about = state.about_handler.get_view().await?;
    let files = state.cv_handler.list().await?;

    Ok(HttpResponse::Ok().json(CvPageView { about, files }))
}

#[instrument(skip(_session, state))]
pub async fn admin_list_cv_files(
    _session: AdminSession,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let files = state.cv_handler.list().await?;
    Ok(HttpResponse::Ok().json(files))
}

#[instrument(skip(_session, state, form))]
pub async fn upload_cv_file(
    _session: AdminSession,
    state: web::Data<AppState>,
    form: MultipartForm<CvUpload>,
) -> Result<impl Responder, AppError> {
    let form = form.into_inner();
    let request = NewCvFileRequest { title: form.title.into_inner() };
    let upload = read_temp_file(form.file).await?;

    let cv_file = state.cv_handler.upload(request, upload, &state.uploader).await?;
    Ok(HttpResponse::Created().json(cv_file))
}

#[instrument(skip(_session, state))]
pub async fn delete_cv_file(
    _session: AdminSession,
    cv_id: web::Path<String>,
    confirmation: web::Query<DeleteConfirmation>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    confirmation.require()?;
    state.cv_handler.delete(&cv_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

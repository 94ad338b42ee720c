use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    constants::{BLOG_COVERS_FOLDER, PROJECT_IMAGES_FOLDER},
    errors::AppError,
    handlers::forms::read_temp_file,
    use_cases::{extractors::AdminSession, uploads::detect_content_type},
    AppState,
};

#[derive(MultipartForm)]
pub struct ImageUpload {
    pub file: TempFile,
    pub folder: Option<Text<String>>,
}

/// Stores an image for use in posts and projects and returns its public URL.
#[instrument(skip(_session, state, form))]
pub async fn upload_image(
    _session: AdminSession,
    state: web::Data<AppState>,
    form: MultipartForm<ImageUpload>,
) -> Result<impl Responder, AppError> {
    let form = form.into_inner();

    let folder = match form.folder.as_ref().map(|f| f.as_str()) {
        None | Some("") => PROJECT_IMAGES_FOLDER,
        Some(f) if f == PROJECT_IMAGES_FOLDER => PROJECT_IMAGES_FOLDER,
        Some(f) if f == BLOG_COVERS_FOLDER => BLOG_COVERS_FOLDER,
        Some(other) => {
            return Err(AppError::InvalidInput(format!("Unknown image folder: {other}")));
        }
    };

    let upload = read_temp_file(form.file).await?;
    let content_type = detect_content_type(&upload.bytes, upload.content_type.as_deref());
    if !content_type.starts_with("image/") {
        return Err(AppError::InvalidInput("Only image files can be uploaded here".into()));
    }

    let stored = state
        .uploader
        .upload(state.uploader.images_bucket(), folder, upload)
        .await?;

    Ok(HttpResponse::Created().json(stored))
}

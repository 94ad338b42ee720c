use actix_multipart::form::{json::Json as MpJson, tempfile::TempFile, MultipartForm};
use actix_web::{web, Either, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::certificate::{NewCertificateRequest, UpdateCertificateRequest},
    errors::AppError,
    handlers::forms::{read_temp_file, DeleteConfirmation},
    use_cases::extractors::AdminSession,
    AppState,
};

#[derive(MultipartForm)]
pub struct CertificateUpload {
    pub certificate: MpJson<NewCertificateRequest>,
    pub file: Option<TempFile>,
}

#[instrument(skip(state))]
pub async fn list_certificates(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let certificates = state.certificate_handler.list_public().await?;
    Ok(HttpResponse::Ok().json(certificates))
}

#[instrument(skip(_session, state))]
pub async fn admin_list_certificates(
    _session: AdminSession,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let certificates = state.certificate_handler.list_admin().await?;
    Ok(HttpResponse::Ok().json(certificates))
}

/// JSON with a `file_url`, or multipart with a `certificate` JSON part and a `file`.
#[instrument(skip(_session, state, input))]
pub async fn create_certificate(
    _session: AdminSession,
    state: web::Data<AppState>,
    input: Either<MultipartForm<CertificateUpload>, web::Json<NewCertificateRequest>>,
) -> Result<impl Responder, AppError> {
    let handler = &state.certificate_handler;

    let certificate = match input {
        Either::Left(form) => {
            let form = form.into_inner();
            match form.file {
                Some(file) => {
                    let upload = read_temp_file(file).await?;
                    handler.create_with_file(form.certificate.into_inner(), upload, &state.uploader).await?
                }
                None => handler.create(form.certificate.into_inner()).await?,
            }
        }
        Either::Right(json) => handler.create(json.into_inner()).await?,
    };

    Ok(HttpResponse::Created().json(certificate))
}

#[instrument(skip(_session, state))]
pub async fn get_certificate_for_edit(
    _session: AdminSession,
    certificate_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let certificate = state.certificate_handler.get(&certificate_id).await?;
    Ok(HttpResponse::Ok().json(certificate))
}

#[instrument(skip(_session, state, data))]
pub async fn update_certificate(
    _session: AdminSession,
    certificate_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateCertificateRequest>,
) -> Result<impl Responder, AppError> {
    let certificate = state.certificate_handler.update(&certificate_id, data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(certificate))
}

#[instrument(skip(_session, state))]
pub async fn delete_certificate(
    _session: AdminSession,
    certificate_id: web::Path<String>,
    confirmation: web::Query<DeleteConfirmation>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    confirmation.require()?;
    state.certificate_handler.delete(&certificate_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

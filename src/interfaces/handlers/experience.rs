use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::experience::{NewExperienceRequest, UpdateExperienceRequest},
    errors::AppError,
    handlers::forms::DeleteConfirmation,
    use_cases::extractors::AdminSession,
    AppState,
};

#[instrument(skip(state))]
pub async fn list_experience(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let entries = state.experience_handler.list().await?;
    Ok(HttpResponse::Ok().json(entries))
}

#[instrument(skip(_session, state))]
pub async fn admin_list_experience(
    _session: AdminSession,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let entries = state.experience_handler.list().await?;
    Ok(HttpResponse::Ok().json(entries))
}

#[instrument(skip(_session, state, data))]
pub async fn create_experience(
    _session: AdminSession,
    state: web::Data<AppState>,
    data: web::Json<NewExperienceRequest>,
) -> Result<impl Responder, AppError> {
    let entry = state.experience_handler.create(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(entry))
}

#[instrument(skip(_session, state))]
pub async fn get_experience_for_edit(
    _session: AdminSession,
    entry_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let entry = state.experience_handler.get(&entry_id).await?;
    Ok(HttpResponse::Ok().json(entry))
}

#[instrument(skip(_session, state, data))]
pub async fn update_experience(
    _session: AdminSession,
    entry_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateExperienceRequest>,
) -> Result<impl Responder, AppError> {
    let entry = state.experience_handler.update(&entry_id, data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(entry))
}

#[instrument(skip(_session, state))]
pub async fn delete_experience(
    _session: AdminSession,
    entry_id: web::Path<String>,
    confirmation: web::Query<DeleteConfirmation>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    confirmation.require()?;
    state.experience_handler.delete(&entry_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

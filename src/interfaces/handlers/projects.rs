use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::project::{NewProjectRequest, UpdateProjectRequest},
    errors::AppError,
    handlers::forms::DeleteConfirmation,
    use_cases::extractors::AdminSession,
    AppState,
};

#[instrument(skip(state))]
pub async fn list_projects(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let projects = state.project_handler.list().await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(_session, state))]
pub async fn admin_list_projects(
    _session: AdminSession,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let projects = state.project_handler.list().await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(_session, state, data))]
pub async fn create_project(
    _session: AdminSession,
    state: web::Data<AppState>,
    data: web::Json<NewProjectRequest>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.create(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(project))
}

#[instrument(skip(_session, state))]
pub async fn get_project_for_edit(
    _session: AdminSession,
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.get(&project_id).await?;
    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(_session, state, data))]
pub async fn update_project(
    _session: AdminSession,
    project_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateProjectRequest>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.update(&project_id, data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(_session, state))]
pub async fn delete_project(
    _session: AdminSession,
    project_id: web::Path<String>,
    confirmation: web::Query<DeleteConfirmation>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    confirmation.require()?;
    state.project_handler.delete(&project_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

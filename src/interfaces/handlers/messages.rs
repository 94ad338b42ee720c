use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    errors::AppError,
    handlers::forms::DeleteConfirmation,
    use_cases::extractors::AdminSession,
    AppState,
};

#[instrument(skip(_session, state))]
pub async fn list_messages(
    _session: AdminSession,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let messages = state.message_handler.list().await?;
    Ok(HttpResponse::Ok().json(messages))
}

#[instrument(skip(_session, state))]
pub async fn delete_message(
    _session: AdminSession,
    message_id: web::Path<String>,
    confirmation: web::Query<DeleteConfirmation>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    confirmation.require()?;
    state.message_handler.delete(&message_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

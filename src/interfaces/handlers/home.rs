use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, AppState};

/// Landing page: current About text and headline counts.
#[instrument(skip(state))]
pub async fn home(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let view = state.dashboard_handler.home().await?;
    Ok(HttpResponse::Ok().json(view))
}

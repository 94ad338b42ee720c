use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use tracing::instrument;

use crate::{errors::AppError, use_cases::extractors::AdminSession, AppState};

#[instrument(skip(session, state))]
pub async fn admin_dashboard(
    session: AdminSession,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let stats = state.dashboard_handler.stats().await?;

    Ok(HttpResponse::Ok().json(json!({
        "owner": session.email,
        "stats": stats,
    })))
}

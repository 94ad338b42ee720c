use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::about::SaveAboutRequest,
    errors::AppError,
    use_cases::extractors::AdminSession,
    AppState,
};

/// Raw stored text for the editor, `null` before the first save.
#[instrument(skip(_session, state))]
pub async fn get_about_for_edit(
    _session: AdminSession,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let about = state.about_handler.get_current().await?;
    Ok(HttpResponse::Ok().json(about))
}

#[instrument(skip(_session, state, data))]
pub async fn save_about(
    _session: AdminSession,
    state: web::Data<AppState>,
    data: web::Json<SaveAboutRequest>,
) -> Result<impl Responder, AppError> {
    let response = state.about_handler.save(data.into_inner()).await?;

    if response.created {
        Ok(HttpResponse::Created().json(response))
    } else {
        Ok(HttpResponse::Ok().json(response))
    }
}

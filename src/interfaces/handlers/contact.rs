use actix_web::{web, HttpRequest, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::message::ContactForm,
    errors::AppError,
    utils::get_client_ip::get_client_ip,
    AppState,
};

#[instrument(skip(req, state, form), fields(client_ip))]
pub async fn submit_contact_form(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Json<ContactForm>,
) -> Result<impl Responder, AppError> {
    let client_ip = get_client_ip(&req, state.behind_proxy);
    tracing::Span::current().record("client_ip", client_ip.as_str());

    let response = state.contact_handler.submit(form.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

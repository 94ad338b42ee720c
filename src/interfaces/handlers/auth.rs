use actix_web::{
    cookie::{time::Duration as CookieDuration, Cookie, SameSite},
    http::header,
    web, HttpResponse, Responder,
};
use serde_json::json;
use tracing::instrument;
use validator::Validate;

use crate::{
    constants::{LOGIN_ROUTE, SESSION_COOKIE},
    entities::{token::SessionResponse, user::LoginRequest},
    errors::AppError,
    use_cases::extractors::AdminSession,
    AppState,
};

fn session_cookie(value: String, max_age_seconds: i64, secure: bool) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, value)
        .path("/admin")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(CookieDuration::seconds(max_age_seconds))
        .finish()
}

/// Describes the login form for the admin client.
#[instrument]
pub async fn login_page() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "action": LOGIN_ROUTE,
        "method": "POST",
        "fields": ["email", "password"],
    }))
}

#[instrument(skip(state, credentials))]
pub async fn login(
    state: web::Data<AppState>,
    credentials: web::Json<LoginRequest>,
) -> Result<impl Responder, actix_web::Error> {
    credentials.validate().map_err(AppError::from)?;

    let outcome = state.auth_handler.login(&credentials).await?;
    let max_age = state.auth_handler.token_service.session_ttl().num_seconds();
    let body = SessionResponse::from(&outcome);

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(outcome.token, max_age, state.session_cookie_secure))
        .json(body))
}

/// Revokes the current session, clears the cookie and sends the browser back to the login page.
#[instrument(skip(session, state), fields(user_id = %session.user_id))]
pub async fn logout(
    session: AdminSession,
    state: web::Data<AppState>,
) -> Result<impl Responder, actix_web::Error> {
    state.auth_handler.logout(&session).await?;

    let mut removal = session_cookie(String::new(), 0, state.session_cookie_secure);
    removal.make_removal();

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, LOGIN_ROUTE))
        .cookie(removal)
        .finish())
}

#[instrument(skip(session))]
pub async fn current_session(session: AdminSession) -> impl Responder {
    HttpResponse::Ok().json(session)
}

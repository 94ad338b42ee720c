use actix_web::{FromRequest, HttpMessage, HttpRequest};
use chrono::{DateTime, Utc};
use futures_util::future::{ready, Ready};
use serde::Serialize;
use uuid::Uuid;

use crate::{entities::token::Claims, errors::AuthError};

/// The verified session of the site owner.
///
/// The session guard inserts it into request extensions after checking the
/// token; admin handlers take it as a parameter so every data access is tied
/// to an explicit session rather than ambient state.
#[derive(Debug, Clone, Serialize)]
pub struct AdminSession {
    pub user_id: Uuid,
    pub email: String,
    pub session_id: String,
    pub expires_at: DateTime<Utc>,
}

impl TryFrom<Claims> for AdminSession {
    type Error = AuthError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidToken)?;
        Ok(AdminSession {
            user_id,
            expires_at: claims.expires_at(),
            email: claims.email,
            session_id: claims.jti,
        })
    }
}

impl FromRequest for AdminSession {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AdminSession>() {
            Some(session) => ready(Ok(session.clone())),
            None => ready(Err(AuthError::MissingCredentials.into())),
        }
    }
}

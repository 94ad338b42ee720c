use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::{header, Method},
    web, Error, HttpMessage, HttpResponse,
};
use futures_util::future::{ok, LocalBoxFuture, Ready};
use std::{rc::Rc, task::{Context, Poll}};

use crate::{
    constants::{LOGIN_ROUTE, SESSION_COOKIE},
    AppState,
};

/// Gates every admin route behind a verified owner session.
///
/// Requests without a usable session get exactly one `303 See Other` to the
/// login page and the wrapped service is never invoked. On success the
/// `AdminSession` is placed in request extensions.
pub struct SessionGuard;

impl<S> Transform<S, ServiceRequest> for SessionGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionGuardService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(SessionGuardService {
            service: Rc::new(service),
        })
    }
}

pub struct SessionGuardService<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for SessionGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if is_public_route(req.path(), req.method()) {
                return service.call(req).await;
            }

            let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
                tracing::error!("AppState missing in session guard");
                return Ok(redirect_to_login(req));
            };

            let Some(token) = extract_token(&req) else {
                tracing::debug!(path = %req.path(), "No session token presented");
                return Ok(redirect_to_login(req));
            };

            match state.auth_handler.authenticate(&token).await {
                Ok(session) => {
                    req.extensions_mut().insert(session);
                    service.call(req).await
                }
                Err(e) => {
                    tracing::warn!(path = %req.path(), "Session rejected: {}", e);
                    Ok(redirect_to_login(req))
                }
            }
        })
    }
}

/// The login page itself stays reachable; CORS preflights carry no credentials.
fn is_public_route(path: &str, method: &Method) -> bool {
    if method == Method::OPTIONS {
        return true;
    }

    path == LOGIN_ROUTE && (method == Method::GET || method == Method::POST)
}

/// Bearer header first, then the session cookie.
fn extract_token(req: &ServiceRequest) -> Option<String> {
    let bearer = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| {
            let parts: Vec<&str> = value.split_whitespace().collect();
            if parts.len() == 2 && parts[0].eq_ignore_ascii_case("bearer") {
                Some(parts[1].to_string())
            } else {
                None
            }
        });

    bearer.or_else(|| {
        req.cookie(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
    })
}

fn redirect_to_login(req: ServiceRequest) -> ServiceResponse<BoxBody> {
    let response = HttpResponse::SeeOther()
        .insert_header((header::LOCATION, LOGIN_ROUTE))
        .finish();
    req.into_response(response)
}

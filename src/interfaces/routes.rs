use actix_web::web;

use crate::middlewares::session_guard::SessionGuard;

mod admin;
mod json_error;
mod public;

/// Public pages at the root; everything under `/admin` sits behind the session guard.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(json_error::config_routes);
    cfg.configure(public::config_routes);

    cfg.service(
        web::scope("/admin")
            .wrap(SessionGuard)
            .configure(admin::config_routes),
    );
}

use actix_web::web;

use crate::handlers::json_error::{json_payload_error, query_payload_error};

/// Body and query extraction failures answer with the JSON error shape.
/// Multipart limits and errors are configured on the app, see `main`.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_payload_error));
    cfg.app_data(web::QueryConfig::default().error_handler(query_payload_error));
}

use actix_web::{
    error::{InternalError, JsonPayloadError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};
use actix_multipart::MultipartError;

pub fn json_error(status: StatusCode, error: &str, details: &str) -> HttpResponse {
    HttpResponse::build(status).json(serde_json::json!({
        "error": error,
        "details": details
    }))
}

pub fn json_payload_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let details = err.to_string();
    let response = match &err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            json_error(StatusCode::PAYLOAD_TOO_LARGE, "Payload too large", &details)
        }
        JsonPayloadError::ContentType => {
            json_error(StatusCode::UNSUPPORTED_MEDIA_TYPE, "Unsupported content type", &details)
        }
        _ => json_error(StatusCode::BAD_REQUEST, "Invalid JSON body", &details),
    };
    InternalError::from_response(err, response).into()
}

pub fn query_payload_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = json_error(StatusCode::BAD_REQUEST, "Invalid query string", &err.to_string());
    InternalError::from_response(err, response).into()
}

pub fn multipart_error(err: MultipartError, _req: &HttpRequest) -> actix_web::Error {
    let response = json_error(StatusCode::BAD_REQUEST, "Invalid multipart form", &err.to_string());
    InternalError::from_response(err, response).into()
}

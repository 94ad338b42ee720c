use actix_web::HttpRequest;

/// Client address for log lines. `X-Forwarded-For` is honoured only when the
/// service sits behind a proxy the operator trusts (production deployments).
pub fn get_client_ip(req: &HttpRequest, behind_proxy: bool) -> String {
    if behind_proxy {
        let forwarded = req
            .headers()
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(str::trim)
            .filter(|ip| !ip.is_empty());

        if let Some(ip) = forwarded {
            return ip.to_string();
        }
    }

    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

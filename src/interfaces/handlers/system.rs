use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use humantime::format_duration;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::{
    sync::{
        atomic::{AtomicI64, Ordering},
        RwLock,
    },
    time::Duration,
};
use sysinfo::System;

use crate::{constants::START_TIME, AppState};

const CACHE_SECONDS: i64 = 5;

#[derive(Serialize, Clone, Default)]
struct SystemInfo {
    os: String,
    kernel: String,
    hostname: String,
    cpu_count: usize,
    memory_total: String,
}

#[derive(Serialize, Clone, Default)]
struct HealthCheckResponse {
    status: String,
    uptime: String,
    timestamp: String,
    start_at: String,
    database: String,
    session_store: String,
    session_backend: String,
    version: String,
    memory_usage: String,
    system: SystemInfo,
}

static LAST_CHECK: AtomicI64 = AtomicI64::new(0);
static CACHED_STATUS: Lazy<RwLock<HealthCheckResponse>> =
    Lazy::new(|| RwLock::new(HealthCheckResponse::default()));

async fn build_health_response(state: &AppState) -> HealthCheckResponse {
    let now_utc = Utc::now();
    let uptime_seconds = now_utc.signed_duration_since(*START_TIME).num_seconds().max(0) as u64;
    let human_uptime = format_duration(Duration::from_secs(uptime_seconds));

    let mut sys = System::new_all();
    sys.refresh_all();

    let system_info = SystemInfo {
        os: System::name().unwrap_or_else(|| "Unknown".to_string()),
        kernel: System::kernel_version().unwrap_or_else(|| "Unknown".to_string()),
        hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        cpu_count: sys.cpus().len(),
        memory_total: format!("{:.2} GB", sys.total_memory() as f64 / 1024.0 / 1024.0 / 1024.0),
    };

    let database_ok = state.auth_handler.user_repo.check_connection().await.is_ok();
    let revocations = &state.auth_handler.revocations;
    let session_store_ok = match revocations.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Session store ping failed: {}", e);
            false
        }
    };

    let memory_usage = sysinfo::get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map_or("Unknown".to_string(), |p| {
            format!("{:.2} MB", p.memory() as f64 / 1024.0 / 1024.0)
        });

    let status = if database_ok && session_store_ok { "healthy" } else { "degraded" };

    HealthCheckResponse {
        status: status.to_string(),
        uptime: human_uptime.to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        database: if database_ok { "OK" } else { "Unavailable" }.to_string(),
        session_store: if session_store_ok { "OK" } else { "Unavailable" }.to_string(),
        session_backend: revocations.backend().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        memory_usage,
        system: system_info,
    }
}

fn respond(response: HealthCheckResponse) -> HttpResponse {
    if response.status == "healthy" {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Liveness plus dependency status, recomputed at most every few seconds.
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now = Utc::now().timestamp();
    let last = LAST_CHECK.load(Ordering::Relaxed);

    if now - last > CACHE_SECONDS {
        let response = build_health_response(&state).await;

        if let Ok(mut cache) = CACHED_STATUS.write() {
            *cache = response.clone();
            LAST_CHECK.store(now, Ordering::Relaxed);
        }

        return respond(response);
    }

    let cached = CACHED_STATUS.read().map(|cache| cache.clone());
    match cached {
        Ok(response) => respond(response),
        Err(e) => {
            tracing::warn!("HealthCheck cache lock poisoned: {}", e);
            respond(build_health_response(&state).await)
        }
    }
}

use std::sync::Arc;

use anyhow::Context;

use actix_cors::Cors;
use actix_multipart::form::MultipartFormConfig;
use actix_web::{http::header, middleware::NormalizePath, web, App, HttpServer};
use portfolio_site::{
    auth::revocation::{MemoryRevocations, RedisRevocations, SessionRevocations},
    background_task::start_revocation_sweep,
    db::postgres::{create_pool, run_migrations},
    entities::user::OwnerAccount,
    graceful_shutdown::shutdown_signal,
    handlers::json_error::multipart_error,
    relay::{FormRelay, HttpFormRelay},
    routes::configure_routes,
    settings::{AppConfig, LogFormat},
    shared_repos::SharedRepositories,
    storage::{s3::S3Storage, ObjectStorage},
    AppState, Services,
};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

fn build_cors(config: &AppConfig) -> Cors {
    let origins = config.cors_origins();
    let cors = if origins.iter().any(|o| o == "*") {
        Cors::default().allow_any_origin()
    } else {
        origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .supports_credentials()
    };

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600)
}

fn select_revocations(config: &AppConfig) -> Arc<dyn SessionRevocations> {
    if let Some(url) = config.redis_url.as_deref() {
        match redis::Client::open(url) {
            Ok(client) => return Arc::new(RedisRevocations::new(client)),
            Err(e) => tracing::warn!("Invalid REDIS_URL, using in-memory revocations: {}", e),
        }
    }
    Arc::new(MemoryRevocations::new())
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::new().context("Failed to load configuration")?;

    init_tracing(&config);
    tracing::info!("Loaded configuration: {:?}", config);

    let pool = create_pool(&config.database_url, config.worker_count.max(2) as u32 * 2)
        .await
        .context("Failed to create database connection pool")?;

    if config.run_migrations {
        run_migrations(&pool).await.context("Failed to apply migrations")?;
    }

    let revocations = select_revocations(&config);
    let storage: Arc<dyn ObjectStorage> = Arc::new(S3Storage::from_config(&config).await);
    let relay = config
        .form_relay_url
        .clone()
        .map(|url| Arc::new(HttpFormRelay::new(url)) as Arc<dyn FormRelay>);

    let app_state = web::Data::new(AppState::new(
        &config,
        SharedRepositories::postgres(pool),
        Services {
            revocations: revocations.clone(),
            storage,
            relay,
        },
    ));

    if let (Some(email), Some(password)) = (config.owner_email.clone(), config.owner_password.clone()) {
        app_state
            .auth_handler
            .ensure_owner(OwnerAccount { email, password })
            .await
            .map_err(|e| anyhow::anyhow!("Failed to seed owner account: {e}"))?;
    }

    let server_addr = format!("{}:{}", config.host, config.port);
    tracing::info!(
        "🚀 Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let max_upload_bytes = config.max_upload_bytes;
    let server_config = config.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            // Create endpoints that take JSON or multipart buffer the whole body first.
            .app_data(web::PayloadConfig::new(max_upload_bytes))
            .app_data(
                MultipartFormConfig::default()
                    .total_limit(max_upload_bytes)
                    .memory_limit(max_upload_bytes)
                    .error_handler(multipart_error),
            )
            .wrap(build_cors(&server_config))
            .wrap(TracingLogger::default())
            .wrap(NormalizePath::trim())
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {server_addr}"))?
    .run();

    tokio::spawn(start_revocation_sweep(revocations));

    tokio::select! {
        res = server => res.context("HTTP server failed"),
        _ = shutdown_signal() => Ok(()),
    }
}

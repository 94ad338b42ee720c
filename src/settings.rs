use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use jsonwebtoken::{DecodingKey, EncodingKey};
use std::{env, fmt, str::FromStr};
use zeroize::Zeroizing;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    #[serde(default)]
    pub database_url: String,

    #[serde(default = "default_true")]
    pub run_migrations: bool,

    #[serde(default)]
    pub redis_url: Option<String>,

    /// Comma separated list of allowed origins.
    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: String,

    #[serde(default)]
    pub jwt_secret: String,

    #[serde(default = "default_session_ttl")]
    pub session_ttl_minutes: i64,

    #[serde(default)]
    pub session_cookie_secure: bool,

    /// Site owner seeded at start-up when no account with this email exists.
    #[serde(default)]
    pub owner_email: Option<String>,

    #[serde(default)]
    pub owner_password: Option<String>,

    /// Custom S3 endpoint (MinIO, LocalStack, Supabase storage S3 gateway).
    #[serde(default)]
    pub storage_endpoint: Option<String>,

    #[serde(default = "default_storage_region")]
    pub storage_region: String,

    /// Base URL objects are publicly reachable under, `{base}/{bucket}/{path}`.
    #[serde(default)]
    pub storage_public_url: String,

    #[serde(default = "default_images_bucket")]
    pub images_bucket: String,

    #[serde(default = "default_files_bucket")]
    pub files_bucket: String,

    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    #[serde(default)]
    pub form_relay_url: Option<String>,

    #[serde(default = "default_true")]
    pub store_contact_messages: bool,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Portfolio-Site".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_true() -> bool {
    true
}
fn default_cors_origins() -> String {
    "*".to_string()
}
fn default_session_ttl() -> i64 {
    60 * 12
}
fn default_storage_region() -> String {
    "us-east-1".to_string()
}
fn default_images_bucket() -> String {
    "images".to_string()
}
fn default_files_bucket() -> String {
    "files".to_string()
}
fn default_max_upload_bytes() -> usize {
    20 * 1024 * 1024
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            env: default_env(),
            name: default_name(),
            port: default_port(),
            host: default_host(),
            worker_count: default_worker_count(),
            database_url: String::new(),
            run_migrations: true,
            redis_url: None,
            cors_allowed_origins: default_cors_origins(),
            jwt_secret: String::new(),
            session_ttl_minutes: default_session_ttl(),
            session_cookie_secure: false,
            owner_email: None,
            owner_password: None,
            storage_endpoint: None,
            storage_region: default_storage_region(),
            storage_public_url: String::new(),
            images_bucket: default_images_bucket(),
            files_bucket: default_files_bucket(),
            max_upload_bytes: default_max_upload_bytes(),
            form_relay_url: None,
            store_contact_messages: true,
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .ignore_empty(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.database_url.trim().is_empty() {
            errors.push("DATABASE_URL cannot be empty");
        }
        if self.jwt_secret.len() < 32 {
            errors.push("JWT_SECRET must be at least 32 characters");
        }
        if self.session_ttl_minutes <= 0 {
            errors.push("SESSION_TTL_MINUTES must be positive");
        }
        if self.storage_public_url.trim().is_empty() {
            errors.push("STORAGE_PUBLIC_URL cannot be empty");
        }
        if self.owner_email.is_some() != self.owner_password.is_some() {
            errors.push("OWNER_EMAIL and OWNER_PASSWORD must be set together");
        }
        if self.is_production() && self.cors_origins().iter().any(|o| o == "*") {
            errors.push("Wildcard CORS (*) is not allowed in production");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

trait Redact {
    fn redact(&self) -> &str;
}

impl Redact for str {
    fn redact(&self) -> &str {
        if self.is_empty() {
            "[MISSING]"
        } else if self.len() < 32 {
            "[TOO_SHORT]"
        } else {
            "[REDACTED]"
        }
    }
}

impl Redact for String {
    fn redact(&self) -> &str {
        self.as_str().redact()
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("worker_count", &self.worker_count)
            .field("database_url", &self.database_url.redact())
            .field("run_migrations", &self.run_migrations)
            .field("redis_url", &self.redis_url.as_ref().map(|_| "[REDACTED]"))
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("jwt_secret", &self.jwt_secret.redact())
            .field("session_ttl_minutes", &self.session_ttl_minutes)
            .field("owner_email", &self.owner_email)
            .field("owner_password", &self.owner_password.as_ref().map(|_| "[REDACTED]"))
            .field("storage_endpoint", &self.storage_endpoint)
            .field("storage_public_url", &self.storage_public_url)
            .field("images_bucket", &self.images_bucket)
            .field("files_bucket", &self.files_bucket)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .field("form_relay_url", &self.form_relay_url)
            .field("store_contact_messages", &self.store_contact_messages)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .finish()
    }
}

#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
}

impl From<&AppConfig> for JwtKeys {
    fn from(config: &AppConfig) -> Self {
        let jwt_secret = Zeroizing::new(config.jwt_secret.clone());

        JwtKeys {
            encoding: EncodingKey::from_secret(jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(jwt_secret.as_bytes()),
        }
    }
}

impl fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtKeys")
            .field("encoding", &"[REDACTED]")
            .field("decoding", &"[REDACTED]")
            .finish()
    }
}

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const LOGIN_ROUTE: &str = "/admin/login";
pub const SESSION_COOKIE: &str = "session";

// Object storage folders, one prefix per owning entity.
pub const BLOG_COVERS_FOLDER: &str = "blog-covers";
pub const PROJECT_IMAGES_FOLDER: &str = "projects";
pub const CV_FOLDER: &str = "cv";
pub const CERTIFICATES_FOLDER: &str = "certificates";

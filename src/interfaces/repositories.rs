pub mod about;
pub mod blog_post;
pub mod certificate;
pub mod cv_file;
pub mod experience;
pub mod message;
pub mod project;
pub mod resource;
pub mod sqlx_repo;
pub mod user;

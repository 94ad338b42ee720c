pub mod about;
pub mod blog_post;
pub mod certificate;
pub mod cv_file;
pub mod dashboard;
pub mod experience;
pub mod message;
pub mod option_fields;
pub mod project;
pub mod token;
pub mod user;
pub mod validation;

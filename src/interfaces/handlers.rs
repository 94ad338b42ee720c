pub mod about;
pub mod auth;
pub mod blog_posts;
pub mod certificates;
pub mod contact;
pub mod cv_files;
pub mod dashboard;
pub mod experience;
pub mod forms;
pub mod home;
pub mod json_error;
pub mod messages;
pub mod projects;
pub mod system;
pub mod uploads;

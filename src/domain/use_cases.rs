pub mod about;
pub mod auth;
pub mod blog;
pub mod certificates;
pub mod contact;
pub mod cv;
pub mod dashboard;
pub mod experience;
pub mod extractors;
pub mod messages;
pub mod projects;
pub mod uploads;

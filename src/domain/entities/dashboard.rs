use serde::Serialize;

use crate::entities::about::AboutView;

/// Row counts shown on the admin dashboard.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub blog_posts: i64,
    pub projects: i64,
    pub experience: i64,
    pub certificates: i64,
    pub cv_files: i64,
    pub messages: i64,
}

#[derive(Debug, Serialize)]
pub struct HomeView {
    pub about: Option<AboutView>,
    pub blog_posts: i64,
    pub projects: i64,
    pub certificates: i64,
}

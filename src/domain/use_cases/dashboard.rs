use std::sync::Arc;

use crate::{
    entities::{about::AboutView, dashboard::{DashboardStats, HomeView}},
    errors::AppError,
    repositories::{
        about::AboutRepository, blog_post::BlogPostRepository, certificate::CertificateRepository,
        cv_file::CvFileRepository, experience::ExperienceRepository, message::MessageRepository,
        project::ProjectRepository, resource::ResourceRepository,
    },
};

/// Read-only aggregate over every content table.
pub struct DashboardHandler {
    pub about_repo: Arc<dyn AboutRepository>,
    pub blog_repo: Arc<dyn BlogPostRepository>,
    pub project_repo: Arc<dyn ProjectRepository>,
    pub experience_repo: Arc<dyn ExperienceRepository>,
    pub certificate_repo: Arc<dyn CertificateRepository>,
    pub cv_repo: Arc<dyn CvFileRepository>,
    pub message_repo: Arc<dyn MessageRepository>,
}

impl DashboardHandler {
    pub async fn stats(&self) -> Result<DashboardStats, AppError> {
        let (blog_posts, projects, experience, certificates, cv_files, messages) = tokio::try_join!(
            self.blog_repo.count(),
            self.project_repo.count(),
            self.experience_repo.count(),
            self.certificate_repo.count(),
            self.cv_repo.count(),
            self.message_repo.count(),
        )?;

        Ok(DashboardStats {
            blog_posts,
            projects,
            experience,
            certificates,
            cv_files,
            messages,
        })
    }

    /// Public landing page: the About text plus headline counts.
    pub async fn home(&self) -> Result<HomeView, AppError> {
        let about = self.about_repo.get_current().await.into_optional()?;
        let (blog_posts, projects, certificates) = tokio::try_join!(
            self.blog_repo.count(),
            self.project_repo.count(),
            self.certificate_repo.count(),
        )?;

        Ok(HomeView {
            about: about.as_ref().map(AboutView::from),
            blog_posts,
            projects,
            certificates,
        })
    }
}

use std::sync::Arc;

use crate::repositories::{
    about::AboutRepository,
    blog_post::BlogPostRepository,
    certificate::CertificateRepository,
    cv_file::CvFileRepository,
    experience::ExperienceRepository,
    message::MessageRepository,
    project::ProjectRepository,
    sqlx_repo::{
        SqlxAboutRepo, SqlxBlogPostRepo, SqlxCertificateRepo, SqlxCvFileRepo, SqlxExperienceRepo,
        SqlxMessageRepo, SqlxProjectRepo, SqlxUserRepo,
    },
    user::UserRepository,
};

/// One handle per table, shared by every worker.
#[derive(Clone)]
pub struct SharedRepositories {
    pub user_repo: Arc<dyn UserRepository>,
    pub about_repo: Arc<dyn AboutRepository>,
    pub blog_post_repo: Arc<dyn BlogPostRepository>,
    pub project_repo: Arc<dyn ProjectRepository>,
    pub experience_repo: Arc<dyn ExperienceRepository>,
    pub certificate_repo: Arc<dyn CertificateRepository>,
    pub cv_repo: Arc<dyn CvFileRepository>,
    pub message_repo: Arc<dyn MessageRepository>,
}

impl SharedRepositories {
    pub fn postgres(pool: sqlx::PgPool) -> Self {
        SharedRepositories {
            user_repo: Arc::new(SqlxUserRepo::new(pool.clone())),
            about_repo: Arc::new(SqlxAboutRepo::new(pool.clone())),
            blog_post_repo: Arc::new(SqlxBlogPostRepo::new(pool.clone())),
            project_repo: Arc::new(SqlxProjectRepo::new(pool.clone())),
            experience_repo: Arc::new(SqlxExperienceRepo::new(pool.clone())),
            certificate_repo: Arc::new(SqlxCertificateRepo::new(pool.clone())),
            cv_repo: Arc::new(SqlxCvFileRepo::new(pool.clone())),
            message_repo: Arc::new(SqlxMessageRepo::new(pool)),
        }
    }
}

use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod background_task;
pub mod shared_repos;

pub use domain::{entities, lookup, password, use_cases};
pub use interfaces::{handlers, repositories, middlewares, routes};
pub use infrastructure::{auth, db, relay, storage, utils};

use auth::{jwt::JwtService, revocation::SessionRevocations};
use relay::FormRelay;
use repositories::{
    about::AboutRepository, blog_post::BlogPostRepository, certificate::CertificateRepository,
    cv_file::CvFileRepository, experience::ExperienceRepository, message::MessageRepository,
    project::ProjectRepository, user::UserRepository,
};
use shared_repos::SharedRepositories;
use storage::ObjectStorage;
use use_cases::{
    about::AboutHandler, auth::AuthHandler, blog::BlogPostHandler, certificates::CertificateHandler,
    contact::ContactHandler, cv::CvHandler, dashboard::DashboardHandler, experience::ExperienceHandler,
    messages::MessageHandler, projects::ProjectHandler, uploads::FileUploader,
};

pub struct AppState {
    pub auth_handler: AuthHandler<dyn UserRepository>,
    pub about_handler: AboutHandler<dyn AboutRepository>,
    pub blog_handler: BlogPostHandler<dyn BlogPostRepository>,
    pub project_handler: ProjectHandler<dyn ProjectRepository>,
    pub experience_handler: ExperienceHandler<dyn ExperienceRepository>,
    pub certificate_handler: CertificateHandler<dyn CertificateRepository>,
    pub cv_handler: CvHandler<dyn CvFileRepository>,
    pub message_handler: MessageHandler<dyn MessageRepository>,
    pub contact_handler: ContactHandler<dyn MessageRepository>,
    pub dashboard_handler: DashboardHandler,
    pub uploader: FileUploader,
    pub session_cookie_secure: bool,
    pub behind_proxy: bool,
}

/// Outside collaborators, chosen at start-up (or by tests).
pub struct Services {
    pub revocations: Arc<dyn SessionRevocations>,
    pub storage: Arc<dyn ObjectStorage>,
    pub relay: Option<Arc<dyn FormRelay>>,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, repos: SharedRepositories, services: Services) -> Self {
        let jwt_service = JwtService::new(config);

        AppState {
            auth_handler: AuthHandler::new(repos.user_repo.clone(), jwt_service, services.revocations),
            about_handler: AboutHandler::new(repos.about_repo.clone()),
            blog_handler: BlogPostHandler::new(repos.blog_post_repo.clone()),
            project_handler: ProjectHandler::new(repos.project_repo.clone()),
            experience_handler: ExperienceHandler::new(repos.experience_repo.clone()),
            certificate_handler: CertificateHandler::new(repos.certificate_repo.clone()),
            cv_handler: CvHandler::new(repos.cv_repo.clone()),
            message_handler: MessageHandler::new(repos.message_repo.clone()),
            contact_handler: ContactHandler::new(
                repos.message_repo.clone(),
                services.relay,
                config.store_contact_messages,
            ),
            dashboard_handler: DashboardHandler {
                about_repo: repos.about_repo,
                blog_repo: repos.blog_post_repo,
                project_repo: repos.project_repo,
                experience_repo: repos.experience_repo,
                certificate_repo: repos.certificate_repo,
                cv_repo: repos.cv_repo,
                message_repo: repos.message_repo,
            },
            uploader: FileUploader::new(
                services.storage,
                config.images_bucket.clone(),
                config.files_bucket.clone(),
            ),
            session_cookie_secure: config.session_cookie_secure,
            behind_proxy: config.is_production(),
        }
    }
}

use std::sync::Arc;

use validator::Validate;

use crate::{
    domain::lookup::Lookup,
    entities::about::{AboutContent, AboutInsert, AboutPatch, AboutSavedResponse, AboutView, SaveAboutRequest},
    errors::AppError,
    repositories::{about::AboutRepository, resource::{ResourceRepository, UpdatableRepository}},
};

pub struct AboutHandler<R>
where
    R: AboutRepository + ?Sized,
{
    pub about_repo: Arc<R>,
}

impl<R> AboutHandler<R>
where
    R: AboutRepository + ?Sized,
{
    pub fn new(about_repo: Arc<R>) -> Self {
        AboutHandler { about_repo }
    }

    /// Current About text rendered for display, `None` when nothing was saved yet.
    pub async fn get_view(&self) -> Result<Option<AboutView>, AppError> {
        let current = self.about_repo.get_current().await.into_optional()?;
        Ok(current.as_ref().map(AboutView::from))
    }

    pub async fn get_current(&self) -> Result<Option<AboutContent>, AppError> {
        self.about_repo.get_current().await.into_optional()
    }

    /// Overwrites the current row, or creates the first one.
    pub async fn save(&self, request: SaveAboutRequest) -> Result<AboutSavedResponse, AppError> {
        request.validate()?;

        match self.about_repo.get_current().await {
            Lookup::Found(current) => {
                let updated = self
                    .about_repo
                    .update(current.id, &AboutPatch { content: request.content })
                    .await?;
                Ok(AboutSavedResponse {
                    id: updated.id,
                    created: false,
                    message: "About content updated".to_string(),
                })
            }
            Lookup::NotFound => {
                let created = self
                    .about_repo
                    .insert(&AboutInsert { content: request.content })
                    .await?;
                Ok(AboutSavedResponse {
                    id: created.id,
                    created: true,
                    message: "About content created".to_string(),
                })
            }
            Lookup::Error(reason) => {
                tracing::error!(%reason, "Failed to load current About content");
                Err(AppError::InternalError(reason))
            }
        }
    }
}

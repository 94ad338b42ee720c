use std::sync::Arc;

use validator::Validate;

use crate::{
    entities::experience::{ExperienceEntry, ExperienceInsert, ExperiencePatch, NewExperienceRequest, UpdateExperienceRequest},
    errors::AppError,
    repositories::{experience::ExperienceRepository, resource::{ResourceRepository, UpdatableRepository}},
    utils::valid_uuid::valid_uuid,
};

pub struct ExperienceHandler<R>
where
    R: ExperienceRepository + ?Sized,
{
    pub experience_repo: Arc<R>,
}

impl<R> ExperienceHandler<R>
where
    R: ExperienceRepository + ?Sized,
{
    pub fn new(experience_repo: Arc<R>) -> Self {
        ExperienceHandler { experience_repo }
    }

    pub async fn list(&self) -> Result<Vec<ExperienceEntry>, AppError> {
        self.experience_repo.list().await
    }

    pub async fn get(&self, id: &str) -> Result<ExperienceEntry, AppError> {
        let valid_id = valid_uuid(id)?;
        self.experience_repo.get(valid_id).await.into_result("Experience entry")
    }

    pub async fn create(&self, request: NewExperienceRequest) -> Result<ExperienceEntry, AppError> {
        request.validate()?;

        self.experience_repo.insert(&ExperienceInsert::from(request)).await
    }

    pub async fn update(&self, id: &str, request: UpdateExperienceRequest) -> Result<ExperienceEntry, AppError> {
        request.validate()?;
        let valid_id = valid_uuid(id)?;
        self.experience_repo.update(valid_id, &ExperiencePatch::from(request)).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.experience_repo.delete(valid_id).await
    }
}

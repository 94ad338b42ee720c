use std::sync::Arc;

use validator::Validate;

use crate::{
    entities::project::{NewProjectRequest, Project, ProjectInsert, ProjectPatch, UpdateProjectRequest},
    errors::AppError,
    repositories::{project::ProjectRepository, resource::{ResourceRepository, UpdatableRepository}},
    utils::valid_uuid::valid_uuid,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository + ?Sized,
{
    pub project_repo: Arc<R>,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository + ?Sized,
{
    pub fn new(project_repo: Arc<R>) -> Self {
        ProjectHandler { project_repo }
    }

    pub async fn list(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list().await
    }

    pub async fn get(&self, id: &str) -> Result<Project, AppError> {
        let valid_id = valid_uuid(id)?;
        self.project_repo.get(valid_id).await.into_result("Project")
    }

    pub async fn create(&self, request: NewProjectRequest) -> Result<Project, AppError> {
        let request = request.normalized();
        request.validate()?;

        self.project_repo.insert(&ProjectInsert::from(request)).await
    }

    pub async fn update(&self, id: &str, request: UpdateProjectRequest) -> Result<Project, AppError> {
        request.validate()?;
        let valid_id = valid_uuid(id)?;
        self.project_repo.update(valid_id, &ProjectPatch::from(request)).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.project_repo.delete(valid_id).await
    }
}

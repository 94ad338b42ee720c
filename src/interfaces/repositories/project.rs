use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    domain::lookup::Lookup,
    entities::project::{Project, ProjectInsert, ProjectPatch},
    errors::AppError,
    repositories::{
        resource::{ensure_deleted, ResourceRepository, UpdatableRepository},
        sqlx_repo::{db_now, SqlxProjectRepo},
    },
};

const PROJECT_COLUMNS: &str = "id, title, description, github_link, live_demo, image_url, tags, created_at";

pub trait ProjectRepository:
    UpdatableRepository<Record = Project, Insert = ProjectInsert, Patch = ProjectPatch>
{
}

impl<T> ProjectRepository for T where
    T: UpdatableRepository<Record = Project, Insert = ProjectInsert, Patch = ProjectPatch>
{
}

impl SqlxProjectRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ResourceRepository for SqlxProjectRepo {
    type Record = Project;
    type Insert = ProjectInsert;

    async fn list(&self) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn get(&self, id: Uuid) -> Lookup<Project> {
        sqlx::query_as::<_, Project>(&format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .into()
    }

    async fn insert(&self, project: &ProjectInsert) -> Result<Self::Record, AppError> {
        let record = Project::from_insert(Uuid::new_v4(), project, db_now());

        sqlx::query(
            r#"
            INSERT INTO projects (id, title, description, github_link, live_demo, image_url, tags, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(record.id)
        .bind(&record.title)
        .bind(&record.description)
        .bind(&record.github_link)
        .bind(&record.live_demo)
        .bind(&record.image_url)
        .bind(&record.tags)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        Ok(record)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        ensure_deleted(result.rows_affected(), "Project")
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl UpdatableRepository for SqlxProjectRepo {
    type Patch = ProjectPatch;

    async fn update(&self, id: Uuid, patch: &ProjectPatch) -> Result<Project, AppError> {
        let mut project = self.get(id).await.into_result("Project")?;
        project.apply(patch);

        let updated = sqlx::query_as::<_, Project>(&format!(
            r#"
            UPDATE projects SET
                title = $2,
                description = $3,
                github_link = $4,
                live_demo = $5,
                image_url = $6,
                tags = $7
            WHERE id = $1
            RETURNING {PROJECT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.github_link)
        .bind(&project.live_demo)
        .bind(&project.image_url)
        .bind(&project.tags)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

        Ok(updated)
    }
}

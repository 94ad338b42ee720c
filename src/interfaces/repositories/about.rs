use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    domain::lookup::Lookup,
    entities::about::{AboutContent, AboutInsert, AboutPatch},
    errors::AppError,
    repositories::{
        resource::{ensure_deleted, ResourceRepository, UpdatableRepository},
        sqlx_repo::{db_now, SqlxAboutRepo},
    },
};

const SELECT_ABOUT: &str = "SELECT id, content, updated_at FROM about";

/// The table may hold several rows; the most recently updated one is current.
#[async_trait]
pub trait AboutRepository:
    UpdatableRepository<Record = AboutContent, Insert = AboutInsert, Patch = AboutPatch>
{
    async fn get_current(&self) -> Lookup<AboutContent>;
}

impl SqlxAboutRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxAboutRepo { pool }
    }
}

#[async_trait]
impl ResourceRepository for SqlxAboutRepo {
    type Record = AboutContent;
    type Insert = AboutInsert;

    async fn list(&self) -> Result<Vec<AboutContent>, AppError> {
        let rows = sqlx::query_as::<_, AboutContent>(&format!("{SELECT_ABOUT} ORDER BY updated_at DESC"))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: Uuid) -> Lookup<AboutContent> {
        sqlx::query_as::<_, AboutContent>(&format!("{SELECT_ABOUT} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .into()
    }

    async fn insert(&self, about: &AboutInsert) -> Result<Self::Record, AppError> {
        let record = AboutContent::from_insert(Uuid::new_v4(), about, db_now());

        sqlx::query("INSERT INTO about (id, content, updated_at) VALUES ($1, $2, $3)")
            .bind(record.id)
            .bind(&record.content)
            .bind(record.updated_at)
            .execute(&self.pool)
            .await?;

        Ok(record)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM about WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        ensure_deleted(result.rows_affected(), "About content")
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM about")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl UpdatableRepository for SqlxAboutRepo {
    type Patch = AboutPatch;

    async fn update(&self, id: Uuid, patch: &AboutPatch) -> Result<AboutContent, AppError> {
        let mut current = self.get(id).await.into_result("About content")?;
        current.apply(patch, db_now());

        let updated = sqlx::query_as::<_, AboutContent>(
            "UPDATE about SET content = $2, updated_at = $3 WHERE id = $1 RETURNING id, content, updated_at",
        )
        .bind(id)
        .bind(&current.content)
        .bind(current.updated_at)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("About content not found".into()))?;

        Ok(updated)
    }
}

#[async_trait]
impl AboutRepository for SqlxAboutRepo {
    async fn get_current(&self) -> Lookup<AboutContent> {
        sqlx::query_as::<_, AboutContent>(&format!("{SELECT_ABOUT} ORDER BY updated_at DESC LIMIT 1"))
            .fetch_optional(&self.pool)
            .await
            .into()
    }
}

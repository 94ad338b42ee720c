use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    domain::lookup::Lookup,
    entities::experience::{ExperienceEntry, ExperienceInsert, ExperiencePatch},
    errors::AppError,
    repositories::{
        resource::{ensure_deleted, ResourceRepository, UpdatableRepository},
        sqlx_repo::{db_now, SqlxExperienceRepo},
    },
};

const EXPERIENCE_COLUMNS: &str = "id, title, organization, year, description, created_at";

pub trait ExperienceRepository:
    UpdatableRepository<Record = ExperienceEntry, Insert = ExperienceInsert, Patch = ExperiencePatch>
{
}

impl<T> ExperienceRepository for T where
    T: UpdatableRepository<Record = ExperienceEntry, Insert = ExperienceInsert, Patch = ExperiencePatch>
{
}

impl SqlxExperienceRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxExperienceRepo { pool }
    }
}

#[async_trait]
impl ResourceRepository for SqlxExperienceRepo {
    type Record = ExperienceEntry;
    type Insert = ExperienceInsert;

    async fn list(&self) -> Result<Vec<ExperienceEntry>, AppError> {
        let entries = sqlx::query_as::<_, ExperienceEntry>(&format!(
            "SELECT {EXPERIENCE_COLUMNS} FROM experience ORDER BY year DESC, created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn get(&self, id: Uuid) -> Lookup<ExperienceEntry> {
        sqlx::query_as::<_, ExperienceEntry>(&format!(
            "SELECT {EXPERIENCE_COLUMNS} FROM experience WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .into()
    }

    async fn insert(&self, entry: &ExperienceInsert) -> Result<Self::Record, AppError> {
        let record = ExperienceEntry::from_insert(Uuid::new_v4(), entry, db_now());

        sqlx::query(
            r#"
            INSERT INTO experience (id, title, organization, year, description, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(record.id)
        .bind(&record.title)
        .bind(&record.organization)
        .bind(&record.year)
        .bind(&record.description)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        Ok(record)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM experience WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        ensure_deleted(result.rows_affected(), "Experience entry")
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM experience")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl UpdatableRepository for SqlxExperienceRepo {
    type Patch = ExperiencePatch;

    async fn update(&self, id: Uuid, patch: &ExperiencePatch) -> Result<ExperienceEntry, AppError> {
        let mut entry = self.get(id).await.into_result("Experience entry")?;
        entry.apply(patch);

        let updated = sqlx::query_as::<_, ExperienceEntry>(&format!(
            r#"
            UPDATE experience SET
                title = $2,
                organization = $3,
                year = $4,
                description = $5
            WHERE id = $1
            RETURNING {EXPERIENCE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&entry.title)
        .bind(&entry.organization)
        .bind(&entry.year)
        .bind(&entry.description)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Experience entry not found".into()))?;

        Ok(updated)
    }
}

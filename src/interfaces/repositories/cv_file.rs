use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    domain::lookup::Lookup,
    entities::cv_file::{CvFile, CvFileInsert},
    errors::AppError,
    repositories::{
        resource::{ensure_deleted, ResourceRepository},
        sqlx_repo::{db_now, SqlxCvFileRepo},
    },
};

pub trait CvFileRepository: ResourceRepository<Record = CvFile, Insert = CvFileInsert> {}

impl<T> CvFileRepository for T where T: ResourceRepository<Record = CvFile, Insert = CvFileInsert> {}

impl SqlxCvFileRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxCvFileRepo { pool }
    }
}

#[async_trait]
impl ResourceRepository for SqlxCvFileRepo {
    type Record = CvFile;
    type Insert = CvFileInsert;

    async fn list(&self) -> Result<Vec<CvFile>, AppError> {
        let files = sqlx::query_as::<_, CvFile>(
            "SELECT id, title, file_url, uploaded_at FROM cv_files ORDER BY uploaded_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(files)
    }

    async fn get(&self, id: Uuid) -> Lookup<CvFile> {
        sqlx::query_as::<_, CvFile>("SELECT id, title, file_url, uploaded_at FROM cv_files WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .into()
    }

    async fn insert(&self, file: &CvFileInsert) -> Result<Self::Record, AppError> {
        let record = CvFile::from_insert(Uuid::new_v4(), file, db_now());

        sqlx::query("INSERT INTO cv_files (id, title, file_url, uploaded_at) VALUES ($1, $2, $3, $4)")
            .bind(record.id)
            .bind(&record.title)
            .bind(&record.file_url)
            .bind(record.uploaded_at)
            .execute(&self.pool)
            .await?;

        Ok(record)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM cv_files WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        ensure_deleted(result.rows_affected(), "CV file")
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cv_files")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

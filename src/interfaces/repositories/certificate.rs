use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    domain::lookup::Lookup,
    entities::certificate::{Certificate, CertificateInsert, CertificatePatch},
    errors::AppError,
    repositories::{
        resource::{ensure_deleted, ResourceRepository, UpdatableRepository},
        sqlx_repo::{db_now, SqlxCertificateRepo},
    },
};

const CERTIFICATE_COLUMNS: &str = "id, title, description, file_url, issued_date, created_at";

pub trait CertificateRepository:
    UpdatableRepository<Record = Certificate, Insert = CertificateInsert, Patch = CertificatePatch>
{
}

impl<T> CertificateRepository for T where
    T: UpdatableRepository<Record = Certificate, Insert = CertificateInsert, Patch = CertificatePatch>
{
}

impl SqlxCertificateRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxCertificateRepo { pool }
    }
}

#[async_trait]
impl ResourceRepository for SqlxCertificateRepo {
    type Record = Certificate;
    type Insert = CertificateInsert;

    async fn list(&self) -> Result<Vec<Certificate>, AppError> {
        let certificates = sqlx::query_as::<_, Certificate>(&format!(
            "SELECT {CERTIFICATE_COLUMNS} FROM certificates ORDER BY issued_date DESC NULLS LAST, created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(certificates)
    }

    async fn get(&self, id: Uuid) -> Lookup<Certificate> {
        sqlx::query_as::<_, Certificate>(&format!(
            "SELECT {CERTIFICATE_COLUMNS} FROM certificates WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .into()
    }

    async fn insert(&self, certificate: &CertificateInsert) -> Result<Self::Record, AppError> {
        let record = Certificate::from_insert(Uuid::new_v4(), certificate, db_now());

        sqlx::query(
            r#"
            INSERT INTO certificates (id, title, description, file_url, issued_date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(record.id)
        .bind(&record.title)
        .bind(&record.description)
        .bind(&record.file_url)
        .bind(record.issued_date)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        Ok(record)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM certificates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        ensure_deleted(result.rows_affected(), "Certificate")
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM certificates")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl UpdatableRepository for SqlxCertificateRepo {
    type Patch = CertificatePatch;

    async fn update(&self, id: Uuid, patch: &CertificatePatch) -> Result<Certificate, AppError> {
        let mut certificate = self.get(id).await.into_result("Certificate")?;
        certificate.apply(patch);

        let updated = sqlx::query_as::<_, Certificate>(&format!(
            r#"
            UPDATE certificates SET
                title = $2,
                description = $3,
                file_url = $4,
                issued_date = $5
            WHERE id = $1
            RETURNING {CERTIFICATE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&certificate.title)
        .bind(&certificate.description)
        .bind(&certificate.file_url)
        .bind(certificate.issued_date)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Certificate not found".into()))?;

        Ok(updated)
    }
}

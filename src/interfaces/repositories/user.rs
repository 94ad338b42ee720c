use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    domain::lookup::Lookup,
    entities::user::{User, UserInsert},
    errors::AppError,
    repositories::sqlx_repo::{db_now, SqlxUserRepo},
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;
    async fn get_user_by_email(&self, email: &str) -> Lookup<User>;
    async fn get_user_by_id(&self, id: Uuid) -> Lookup<User>;
    async fn create_user(&self, user: &UserInsert) -> Result<Uuid, AppError>;
}

impl SqlxUserRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxUserRepo { pool }
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn get_user_by_email(&self, email: &str) -> Lookup<User> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, created_at, updated_at FROM users WHERE lower(email) = lower($1)",
        )
        .bind(email.trim())
        .fetch_optional(&self.pool)
        .await
        .into()
    }

    async fn get_user_by_id(&self, id: Uuid) -> Lookup<User> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .into()
    }

    async fn create_user(&self, user: &UserInsert) -> Result<Uuid, AppError> {
        let record = User::from_insert(Uuid::new_v4(), user, db_now());

        sqlx::query(
            r#"
            INSERT INTO users (id, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(record.id)
        .bind(&record.email)
        .bind(&record.password_hash)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("users_email_lower_key") {
                    return AppError::Conflict("Email already registered".into());
                }
            }
            AppError::from(e)
        })?;

        Ok(record.id)
    }
}

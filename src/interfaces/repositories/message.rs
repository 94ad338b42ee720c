use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    domain::lookup::Lookup,
    entities::message::{Message, MessageInsert},
    errors::AppError,
    repositories::{
        resource::{ensure_deleted, ResourceRepository},
        sqlx_repo::{db_now, SqlxMessageRepo},
    },
};

/// Insert, read and delete only. Messages have no update path.
pub trait MessageRepository: ResourceRepository<Record = Message, Insert = MessageInsert> {}

impl<T> MessageRepository for T where T: ResourceRepository<Record = Message, Insert = MessageInsert> {}

impl SqlxMessageRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxMessageRepo { pool }
    }
}

#[async_trait]
impl ResourceRepository for SqlxMessageRepo {
    type Record = Message;
    type Insert = MessageInsert;

    async fn list(&self) -> Result<Vec<Message>, AppError> {
        let messages = sqlx::query_as::<_, Message>(
            "SELECT id, name, email, message, created_at FROM messages ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    async fn get(&self, id: Uuid) -> Lookup<Message> {
        sqlx::query_as::<_, Message>("SELECT id, name, email, message, created_at FROM messages WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .into()
    }

    async fn insert(&self, message: &MessageInsert) -> Result<Self::Record, AppError> {
        let record = Message::from_insert(Uuid::new_v4(), message, db_now());

        sqlx::query(
            "INSERT INTO messages (id, name, email, message, created_at) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(record.id)
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.message)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        Ok(record)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        ensure_deleted(result.rows_affected(), "Message")
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

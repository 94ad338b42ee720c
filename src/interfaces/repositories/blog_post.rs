use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    domain::lookup::Lookup,
    entities::blog_post::{BlogPost, BlogPostInsert, BlogPostPatch},
    errors::AppError,
    repositories::{
        resource::{ensure_deleted, ResourceRepository, UpdatableRepository},
        sqlx_repo::{db_now, SqlxBlogPostRepo},
    },
};

const BLOG_COLUMNS: &str = "id, title, slug, excerpt, content, cover_image, created_at";

#[async_trait]
pub trait BlogPostRepository:
    UpdatableRepository<Record = BlogPost, Insert = BlogPostInsert, Patch = BlogPostPatch>
{
    /// Slugs are not unique; when several posts share one the newest wins.
    async fn get_by_slug(&self, slug: &str) -> Lookup<BlogPost>;
}

impl SqlxBlogPostRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxBlogPostRepo { pool }
    }
}

#[async_trait]
impl ResourceRepository for SqlxBlogPostRepo {
    type Record = BlogPost;
    type Insert = BlogPostInsert;

    async fn list(&self) -> Result<Vec<BlogPost>, AppError> {
        let posts = sqlx::query_as::<_, BlogPost>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blog ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn get(&self, id: Uuid) -> Lookup<BlogPost> {
        sqlx::query_as::<_, BlogPost>(&format!("SELECT {BLOG_COLUMNS} FROM blog WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .into()
    }

    async fn insert(&self, post: &BlogPostInsert) -> Result<Self::Record, AppError> {
        let record = BlogPost::from_insert(Uuid::new_v4(), post, db_now());

        sqlx::query(
            r#"
            INSERT INTO blog (id, title, slug, excerpt, content, cover_image, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(record.id)
        .bind(&record.title)
        .bind(&record.slug)
        .bind(&record.excerpt)
        .bind(&record.content)
        .bind(&record.cover_image)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        Ok(record)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM blog WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        ensure_deleted(result.rows_affected(), "Blog post")
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blog")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl UpdatableRepository for SqlxBlogPostRepo {
    type Patch = BlogPostPatch;

    async fn update(&self, id: Uuid, patch: &BlogPostPatch) -> Result<BlogPost, AppError> {
        let mut post = self.get(id).await.into_result("Blog post")?;
        post.apply(patch);

        let updated = sqlx::query_as::<_, BlogPost>(&format!(
            r#"
            UPDATE blog SET
                title = $2,
                excerpt = $3,
                content = $4,
                cover_image = $5
            WHERE id = $1
            RETURNING {BLOG_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&post.title)
        .bind(&post.excerpt)
        .bind(&post.content)
        .bind(&post.cover_image)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog post not found".into()))?;

        Ok(updated)
    }
}

#[async_trait]
impl BlogPostRepository for SqlxBlogPostRepo {
    async fn get_by_slug(&self, slug: &str) -> Lookup<BlogPost> {
        sqlx::query_as::<_, BlogPost>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blog WHERE slug = $1 ORDER BY created_at DESC LIMIT 1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .into()
    }
}

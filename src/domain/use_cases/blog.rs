use std::sync::Arc;

use validator::Validate;

use crate::{
    constants::BLOG_COVERS_FOLDER,
    entities::blog_post::{
        BlogPost, BlogPostCreatedResponse, BlogPostDetail, BlogPostInsert, BlogPostListItem,
        BlogPostPatch, NewBlogPostRequest, UpdateBlogPostRequest,
    },
    errors::AppError,
    repositories::{blog_post::BlogPostRepository, resource::{ResourceRepository, UpdatableRepository}},
    use_cases::uploads::{FileUploader, UploadFile},
    utils::valid_uuid::valid_uuid,
};

pub struct BlogPostHandler<R>
where
    R: BlogPostRepository + ?Sized,
{
    pub blog_post_repo: Arc<R>,
}

impl<R> BlogPostHandler<R>
where
    R: BlogPostRepository + ?Sized,
{
    pub fn new(blog_post_repo: Arc<R>) -> Self {
        BlogPostHandler { blog_post_repo }
    }

    /// Newest first, with excerpt fallback and reading time.
    pub async fn list_public(&self) -> Result<Vec<BlogPostListItem>, AppError> {
        let posts = self.blog_post_repo.list().await?;
        Ok(posts.iter().map(BlogPostListItem::from).collect())
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<BlogPostDetail, AppError> {
        let post = self.blog_post_repo.get_by_slug(slug).await.into_result("Blog post")?;
        Ok(BlogPostDetail::from(&post))
    }

    pub async fn list_admin(&self) -> Result<Vec<BlogPost>, AppError> {
        self.blog_post_repo.list().await
    }

    pub async fn get_for_edit(&self, id: &str) -> Result<BlogPost, AppError> {
        let valid_id = valid_uuid(id)?;
        self.blog_post_repo.get(valid_id).await.into_result("Blog post")
    }

    /// Creates a post, computing the slug from the title.
    pub async fn create_blog_post(&self, request: NewBlogPostRequest) -> Result<BlogPostCreatedResponse, AppError> {
        let request = request.normalized();
        request.validate()?;

        let insert = BlogPostInsert::from(request);
        let post = self.blog_post_repo.insert(&insert).await?;

        Ok(created_response(post))
    }

    /// Creates a post whose cover image arrives with the request. The upload
    /// is undone when the row cannot be written.
    pub async fn create_with_cover(
        &self,
        request: NewBlogPostRequest,
        cover: UploadFile,
        uploader: &FileUploader,
    ) -> Result<BlogPostCreatedResponse, AppError> {
        let request = request.normalized();
        request.validate()?;

        let repo = Arc::clone(&self.blog_post_repo);
        uploader
            .upload_then_insert(uploader.images_bucket(), BLOG_COVERS_FOLDER, cover, |url| async move {
                let mut insert = BlogPostInsert::from(request);
                insert.cover_image = Some(url);
                let post = repo.insert(&insert).await?;
                Ok(created_response(post))
            })
            .await
    }

    pub async fn update_blog_post(&self, id: &str, request: UpdateBlogPostRequest) -> Result<BlogPost, AppError> {
        request.validate()?;
        let valid_id = valid_uuid(id)?;

        let patch = BlogPostPatch::from(request);
        self.blog_post_repo.update(valid_id, &patch).await
    }

    pub async fn delete_blog_post(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.blog_post_repo.delete(valid_id).await
    }
}

fn created_response(post: BlogPost) -> BlogPostCreatedResponse {
    BlogPostCreatedResponse {
        id: post.id,
        public_url: format!("/blog/{}", post.slug),
        slug: post.slug,
        cover_image: post.cover_image,
    }
}

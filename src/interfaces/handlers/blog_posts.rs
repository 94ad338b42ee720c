use actix_multipart::form::{json::Json as MpJson, tempfile::TempFile, MultipartForm};
use actix_web::{web, Either, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::blog_post::{NewBlogPostRequest, UpdateBlogPostRequest},
    errors::AppError,
    handlers::forms::{read_temp_file, DeleteConfirmation},
    use_cases::extractors::AdminSession,
    AppState,
};

#[derive(MultipartForm)]
pub struct BlogPostUpload {
    pub post: MpJson<NewBlogPostRequest>,
    pub cover_image: Option<TempFile>,
}

// ───── Public ───────────────────────────────────────────────────────

#[instrument(skip(state))]
pub async fn list_blog_posts(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let posts = state.blog_handler.list_public().await?;
    Ok(HttpResponse::Ok().json(posts))
}

#[instrument(skip(state))]
pub async fn get_blog_post_by_slug(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let post = state.blog_handler.get_by_slug(&slug).await?;
    Ok(HttpResponse::Ok().json(post))
}

// ───── Admin ────────────────────────────────────────────────────────

#[instrument(skip(_session, state))]
pub async fn admin_list_blog_posts(
    _session: AdminSession,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let posts = state.blog_handler.list_admin().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// Accepts plain JSON, or multipart with a `post` JSON part and an optional
/// `cover_image` file.
#[instrument(skip(_session, state, input))]
pub async fn create_blog_post(
    _session: AdminSession,
    state: web::Data<AppState>,
    input: Either<MultipartForm<BlogPostUpload>, web::Json<NewBlogPostRequest>>,
) -> Result<impl Responder, AppError> {
    let handler = &state.blog_handler;

    let response = match input {
        Either::Left(form) => {
            let form = form.into_inner();
            match form.cover_image {
                Some(file) => {
                    let cover = read_temp_file(file).await?;
                    handler.create_with_cover(form.post.into_inner(), cover, &state.uploader).await?
                }
                None => handler.create_blog_post(form.post.into_inner()).await?,
            }
        }
        Either::Right(json) => handler.create_blog_post(json.into_inner()).await?,
    };

    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(_session, state))]
pub async fn get_blog_post_for_edit(
    _session: AdminSession,
    post_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let post = state.blog_handler.get_for_edit(&post_id).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[instrument(skip(_session, state, data))]
pub async fn update_blog_post(
    _session: AdminSession,
    post_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateBlogPostRequest>,
) -> Result<impl Responder, AppError> {
    let updated = state.blog_handler.update_blog_post(&post_id, data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[instrument(skip(_session, state))]
pub async fn delete_blog_post(
    _session: AdminSession,
    post_id: web::Path<String>,
    confirmation: web::Query<DeleteConfirmation>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    confirmation.require()?;
    state.blog_handler.delete_blog_post(&post_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    entities::{option_fields::OptionField, validation::{blank_to_none, validate_not_blank, validate_optional_url_field}},
    utils::{
        html::{excerpt_or_fallback, sanitize_html},
        reading_time::reading_time_minutes,
        slug::generate_slug,
    },
};

// ───── Constants ──────────────────────────────────────────────────────
const MAX_TITLE_LENGTH: u64 = 200;
const MAX_EXCERPT_LENGTH: u64 = 500;

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct BlogPostInsert {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image: Option<String>,
}

/// `None` leaves a column untouched. The slug is fixed at creation.
#[derive(Debug, Clone, Default)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub excerpt: OptionField<String>,
    pub content: Option<String>,
    pub cover_image: OptionField<String>,
}

impl BlogPost {
    pub fn from_insert(id: Uuid, insert: &BlogPostInsert, created_at: DateTime<Utc>) -> Self {
        BlogPost {
            id,
            title: insert.title.clone(),
            slug: insert.slug.clone(),
            excerpt: insert.excerpt.clone(),
            content: insert.content.clone(),
            cover_image: insert.cover_image.clone(),
            created_at,
        }
    }

    pub fn apply(&mut self, patch: &BlogPostPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(content) = &patch.content {
            self.content = content.clone();
        }
        patch.excerpt.apply_to(&mut self.excerpt);
        patch.cover_image.apply_to(&mut self.cover_image);
    }
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct BlogPostListItem {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub cover_image: Option<String>,
    pub reading_time_minutes: u32,
    pub created_at: DateTime<Utc>,
}

impl From<&BlogPost> for BlogPostListItem {
    fn from(post: &BlogPost) -> Self {
        BlogPostListItem {
            id: post.id,
            title: post.title.clone(),
            slug: post.slug.clone(),
            excerpt: excerpt_or_fallback(post.excerpt.as_deref(), &post.content),
            cover_image: post.cover_image.clone(),
            reading_time_minutes: reading_time_minutes(&post.content),
            created_at: post.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BlogPostDetail {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content_html: String,
    pub cover_image: Option<String>,
    pub reading_time_minutes: u32,
    pub created_at: DateTime<Utc>,
}

impl From<&BlogPost> for BlogPostDetail {
    fn from(post: &BlogPost) -> Self {
        BlogPostDetail {
            id: post.id,
            title: post.title.clone(),
            slug: post.slug.clone(),
            excerpt: post.excerpt.clone(),
            content_html: sanitize_html(&post.content),
            cover_image: post.cover_image.clone(),
            reading_time_minutes: reading_time_minutes(&post.content),
            created_at: post.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BlogPostCreatedResponse {
    pub id: Uuid,
    pub slug: String,
    pub cover_image: Option<String>,
    pub public_url: String,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewBlogPostRequest {
    #[validate(
        length(min = 1, max = MAX_TITLE_LENGTH, message = "Title must be between 1 and 200 characters"),
        custom(function = "validate_not_blank")
    )]
    pub title: String,

    #[validate(length(max = MAX_EXCERPT_LENGTH, message = "Excerpt is too long"))]
    pub excerpt: Option<String>,

    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: String,

    #[validate(url(message = "Cover image must be a valid URL"))]
    pub cover_image: Option<String>,
}

impl NewBlogPostRequest {
    /// Empty optional inputs are stored as NULL.
    pub fn normalized(self) -> Self {
        NewBlogPostRequest {
            title: self.title.trim().to_string(),
            excerpt: blank_to_none(self.excerpt),
            content: self.content,
            cover_image: blank_to_none(self.cover_image),
        }
    }
}

impl From<NewBlogPostRequest> for BlogPostInsert {
    fn from(req: NewBlogPostRequest) -> Self {
        BlogPostInsert {
            slug: generate_slug(&req.title),
            title: req.title,
            excerpt: req.excerpt,
            content: req.content,
            cover_image: req.cover_image,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_update_title"))]
pub struct UpdateBlogPostRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH, message = "Title must be between 1 and 200 characters"))]
    pub title: Option<String>,

    #[serde(default)]
    #[validate(length(max = MAX_EXCERPT_LENGTH, message = "Excerpt is too long"))]
    pub excerpt: OptionField<String>,

    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_optional_url_field"))]
    pub cover_image: OptionField<String>,
}

fn validate_update_title(req: &UpdateBlogPostRequest) -> Result<(), ValidationError> {
    match req.title.as_deref() {
        Some(title) => validate_not_blank(title),
        None => Ok(()),
    }
}

impl From<UpdateBlogPostRequest> for BlogPostPatch {
    fn from(req: UpdateBlogPostRequest) -> Self {
        BlogPostPatch {
            title: req.title.map(|t| t.trim().to_string()),
            excerpt: req.excerpt.blank_as_null(),
            content: req.content,
            cover_image: req.cover_image.blank_as_null(),
        }
    }
}

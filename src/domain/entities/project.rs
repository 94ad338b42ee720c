use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    entities::{option_fields::OptionField, validation::{blank_to_none, validate_not_blank, validate_optional_url_field}},
    utils::tags::parse_tags,
};

const MAX_TITLE_LENGTH: u64 = 200;

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub github_link: Option<String>,
    pub live_demo: Option<String>,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ProjectInsert {
    pub title: String,
    pub description: String,
    pub github_link: Option<String>,
    pub live_demo: Option<String>,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub github_link: OptionField<String>,
    pub live_demo: OptionField<String>,
    pub image_url: OptionField<String>,
    pub tags: Option<Vec<String>>,
}

impl Project {
    pub fn from_insert(id: Uuid, insert: &ProjectInsert, created_at: DateTime<Utc>) -> Self {
        Project {
            id,
            title: insert.title.clone(),
            description: insert.description.clone(),
            github_link: insert.github_link.clone(),
            live_demo: insert.live_demo.clone(),
            image_url: insert.image_url.clone(),
            tags: insert.tags.clone(),
            created_at,
        }
    }

    pub fn apply(&mut self, patch: &ProjectPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(tags) = &patch.tags {
            self.tags = tags.clone();
        }
        patch.github_link.apply_to(&mut self.github_link);
        patch.live_demo.apply_to(&mut self.live_demo);
        patch.image_url.apply_to(&mut self.image_url);
    }
}

// ───── Input & Validation Requests ──────────────────────────────────

/// `tags` arrives as the raw comma separated form input.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewProjectRequest {
    #[validate(
        length(min = 1, max = MAX_TITLE_LENGTH, message = "Title must be between 1 and 200 characters"),
        custom(function = "validate_not_blank")
    )]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(url(message = "GitHub link must be a valid URL"))]
    pub github_link: Option<String>,

    #[validate(url(message = "Live demo must be a valid URL"))]
    pub live_demo: Option<String>,

    #[validate(url(message = "Image must be a valid URL"))]
    pub image_url: Option<String>,

    #[serde(default)]
    pub tags: String,
}

impl NewProjectRequest {
    pub fn normalized(self) -> Self {
        NewProjectRequest {
            title: self.title.trim().to_string(),
            description: self.description,
            github_link: blank_to_none(self.github_link),
            live_demo: blank_to_none(self.live_demo),
            image_url: blank_to_none(self.image_url),
            tags: self.tags,
        }
    }
}

impl From<NewProjectRequest> for ProjectInsert {
    fn from(req: NewProjectRequest) -> Self {
        ProjectInsert {
            tags: parse_tags(&req.tags),
            title: req.title,
            description: req.description,
            github_link: req.github_link,
            live_demo: req.live_demo,
            image_url: req.image_url,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_update_title"))]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH, message = "Title must be between 1 and 200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_optional_url_field"))]
    pub github_link: OptionField<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_optional_url_field"))]
    pub live_demo: OptionField<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_optional_url_field"))]
    pub image_url: OptionField<String>,

    pub tags: Option<String>,
}

fn validate_update_title(req: &UpdateProjectRequest) -> Result<(), ValidationError> {
    match req.title.as_deref() {
        Some(title) => validate_not_blank(title),
        None => Ok(()),
    }
}

impl From<UpdateProjectRequest> for ProjectPatch {
    fn from(req: UpdateProjectRequest) -> Self {
        ProjectPatch {
            title: req.title.map(|t| t.trim().to_string()),
            description: req.description,
            github_link: req.github_link.blank_as_null(),
            live_demo: req.live_demo.blank_as_null(),
            image_url: req.image_url.blank_as_null(),
            tags: req.tags.as_deref().map(parse_tags),
        }
    }
}

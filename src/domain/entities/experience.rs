use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::validation::validate_not_blank;

// ───── Database Models ───────────────────────────────────────────────

/// `year` is free text ("2021 - 2023", "Present") and sorts lexically.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ExperienceEntry {
    pub id: Uuid,
    pub title: String,
    pub organization: String,
    pub year: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ExperienceInsert {
    pub title: String,
    pub organization: String,
    pub year: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct ExperiencePatch {
    pub title: Option<String>,
    pub organization: Option<String>,
    pub year: Option<String>,
    pub description: Option<String>,
}

impl ExperienceEntry {
    pub fn from_insert(id: Uuid, insert: &ExperienceInsert, created_at: DateTime<Utc>) -> Self {
        ExperienceEntry {
            id,
            title: insert.title.clone(),
            organization: insert.organization.clone(),
            year: insert.year.clone(),
            description: insert.description.clone(),
            created_at,
        }
    }

    pub fn apply(&mut self, patch: &ExperiencePatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(organization) = &patch.organization {
            self.organization = organization.clone();
        }
        if let Some(year) = &patch.year {
            self.year = year.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
    }
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewExperienceRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub organization: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub year: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
}

impl From<NewExperienceRequest> for ExperienceInsert {
    fn from(req: NewExperienceRequest) -> Self {
        ExperienceInsert {
            title: req.title.trim().to_string(),
            organization: req.organization.trim().to_string(),
            year: req.year.trim().to_string(),
            description: req.description,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateExperienceRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Organization is required"))]
    pub organization: Option<String>,

    #[validate(length(min = 1, message = "Year is required"))]
    pub year: Option<String>,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,
}

impl From<UpdateExperienceRequest> for ExperiencePatch {
    fn from(req: UpdateExperienceRequest) -> Self {
        ExperiencePatch {
            title: req.title.map(|v| v.trim().to_string()),
            organization: req.organization.map(|v| v.trim().to_string()),
            year: req.year.map(|v| v.trim().to_string()),
            description: req.description,
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::utils::html::sanitize_html;

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AboutContent {
    pub id: Uuid,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AboutInsert {
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct AboutPatch {
    pub content: String,
}

impl AboutContent {
    pub fn from_insert(id: Uuid, insert: &AboutInsert, now: DateTime<Utc>) -> Self {
        AboutContent {
            id,
            content: insert.content.clone(),
            updated_at: now,
        }
    }

    /// Every save refreshes `updated_at`, which is what makes a row current.
    pub fn apply(&mut self, patch: &AboutPatch, now: DateTime<Utc>) {
        self.content = patch.content.clone();
        self.updated_at = now;
    }
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AboutView {
    pub id: Uuid,
    pub content_html: String,
    pub updated_at: DateTime<Utc>,
}

impl From<&AboutContent> for AboutView {
    fn from(about: &AboutContent) -> Self {
        AboutView {
            id: about.id,
            content_html: sanitize_html(&about.content),
            updated_at: about.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AboutSavedResponse {
    pub id: Uuid,
    pub created: bool,
    pub message: String,
}

// ───── Input & Validation ───────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct SaveAboutRequest {
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::validation::validate_not_blank;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CvFile {
    pub id: Uuid,
    pub title: String,
    pub file_url: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CvFileInsert {
    pub title: String,
    pub file_url: String,
}

impl CvFile {
    pub fn from_insert(id: Uuid, insert: &CvFileInsert, uploaded_at: DateTime<Utc>) -> Self {
        CvFile {
            id,
            title: insert.title.clone(),
            file_url: insert.file_url.clone(),
            uploaded_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewCvFileRequest {
    #[validate(
        length(max = 200, message = "Title is too long"),
        custom(function = "validate_not_blank")
    )]
    pub title: String,
}

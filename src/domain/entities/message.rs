use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// ───── Database Models ───────────────────────────────────────────────

/// Messages are written once and never edited.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Message {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageInsert {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Message {
    pub fn from_insert(id: Uuid, insert: &MessageInsert, created_at: DateTime<Utc>) -> Self {
        Message {
            id,
            name: insert.name.clone(),
            email: insert.email.clone(),
            message: insert.message.clone(),
            created_at,
        }
    }
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 2, max = 100, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 10, max = 5000, message = "Message must be at least 10 characters"))]
    pub message: String,
}

impl ContactForm {
    pub fn normalized(self) -> Self {
        ContactForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

impl From<ContactForm> for MessageInsert {
    fn from(form: ContactForm) -> Self {
        MessageInsert {
            name: form.name,
            email: form.email,
            message: form.message,
        }
    }
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub message: String,
    pub relayed: bool,
    pub stored: bool,
}

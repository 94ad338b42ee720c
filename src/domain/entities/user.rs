use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::password::validate_password_strength;

/// The site owner. A single row is seeded at start-up; there is no signup.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct UserInsert {
    pub email: String,
    pub password_hash: String,
}

impl User {
    pub fn from_insert(id: Uuid, insert: &UserInsert, now: DateTime<Utc>) -> Self {
        User {
            id,
            email: insert.email.clone(),
            password_hash: insert.password_hash.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct OwnerAccount {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,
}

impl OwnerAccount {
    pub fn prepare_for_insert(&self, password_hash: String) -> UserInsert {
        UserInsert {
            email: self.email.trim().to_lowercase(),
            password_hash,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        PublicUser {
            id: user.id,
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// `jti` identifies the session; logout records it as revoked until `exp`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub jti: String,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp as i64, 0)
            .single()
            .unwrap_or_else(Utc::now)
    }

    /// Seconds left before expiry, zero once expired.
    pub fn remaining_seconds(&self) -> u64 {
        let now = Utc::now().timestamp();
        (self.exp as i64 - now).max(0) as u64
    }
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

impl SessionResponse {
    pub fn new(access_token: String, expires_at: DateTime<Utc>) -> Self {
        SessionResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_at,
        }
    }
}

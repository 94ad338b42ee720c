use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};
use uuid::Uuid;

use crate::entities::{token::Claims, user::User};
use crate::errors::AuthError;
use crate::settings::{AppConfig, JwtKeys};

const JWT_ALGORITHM: Algorithm = Algorithm::HS512;

#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    session_ttl: Duration,
}

impl JwtService {
    pub fn new(config: &AppConfig) -> Self {
        JwtService {
            keys: JwtKeys::from(config),
            session_ttl: Duration::minutes(config.session_ttl_minutes),
        }
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    /// Issues a session token with a fresh session id (`jti`).
    pub fn create_session(&self, user: &User) -> Result<(String, Claims), AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp() as usize,
            exp: (now + self.session_ttl).timestamp() as usize,
        };

        let token = encode(&Header::new(JWT_ALGORITHM), &claims, &self.keys.encoding)
            .map_err(|e| {
                tracing::error!("Failed to sign session token: {}", e);
                AuthError::TokenCreation
            })?;

        Ok((token, claims))
    }

    pub fn decode_session(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.validate_exp = true;
        validation.leeway = 0;

        decode::<Claims>(token, &self.keys.decoding, &validation)
            .map(|data| data.claims)
            .map_err(AuthError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(ttl_minutes: i64) -> JwtService {
        JwtService::new(&AppConfig {
            jwt_secret: "an-unguessable-secret-of-at-least-32-chars".into(),
            session_ttl_minutes: ttl_minutes,
            ..AppConfig::default()
        })
    }

    fn owner() -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            email: "owner@example.com".into(),
            password_hash: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn issued_token_decodes_to_same_session() {
        let jwt = service(30);
        let (token, claims) = jwt.create_session(&owner()).unwrap();
        let decoded = jwt.decode_session(&token).unwrap();
        assert_eq!(decoded.jti, claims.jti);
        assert_eq!(decoded.email, "owner@example.com");
    }

    #[test]
    fn expired_token_is_rejected() {
        let jwt = service(-5);
        let (token, _) = jwt.create_session(&owner()).unwrap();
        assert!(matches!(jwt.decode_session(&token), Err(AuthError::TokenExpired)));
    }

    #[test]
    fn tampered_token_is_rejected() {
        let jwt = service(30);
        let (token, _) = jwt.create_session(&owner()).unwrap();
        let tampered = format!("{}x", token);
        assert!(jwt.decode_session(&tampered).is_err());
    }
}

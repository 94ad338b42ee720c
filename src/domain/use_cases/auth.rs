use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::{
        jwt::JwtService,
        password::{hash_password, verify_password},
        revocation::SessionRevocations,
    },
    domain::lookup::Lookup,
    entities::{
        token::SessionResponse,
        user::{LoginRequest, OwnerAccount},
    },
    errors::{AppError, AuthError},
    repositories::user::UserRepository,
    use_cases::extractors::AdminSession,
};

/// Owner login, logout and per-request session verification.
pub struct AuthHandler<R>
where
    R: UserRepository + ?Sized,
{
    pub user_repo: Arc<R>,
    pub token_service: JwtService,
    pub revocations: Arc<dyn SessionRevocations>,
}

pub struct LoginOutcome {
    pub token: String,
    pub session: AdminSession,
}

impl From<&LoginOutcome> for SessionResponse {
    fn from(outcome: &LoginOutcome) -> Self {
        SessionResponse::new(outcome.token.clone(), outcome.session.expires_at)
    }
}

impl<R> AuthHandler<R>
where
    R: UserRepository + ?Sized,
{
    pub fn new(
        user_repo: Arc<R>,
        token_service: JwtService,
        revocations: Arc<dyn SessionRevocations>,
    ) -> Self {
        AuthHandler {
            user_repo,
            token_service,
            revocations,
        }
    }

    /// Checks credentials and opens a new session.
    ///
    /// The request must already be validated. Unknown email and wrong password
    /// produce the same error.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginOutcome, AuthError> {
        let user = match self.user_repo.get_user_by_email(&request.email).await {
            Lookup::Found(user) => user,
            Lookup::NotFound => return Err(AuthError::WrongCredentials),
            Lookup::Error(reason) => {
                tracing::error!(%reason, "Failed to load user during login");
                return Err(AuthError::Internal(reason));
            }
        };

        let is_password_valid = verify_password(&request.password, &user.password_hash)
            .map_err(|e| {
                tracing::error!("Stored password hash is unusable: {}", e);
                AuthError::WrongCredentials
            })?;
        if !is_password_valid {
            return Err(AuthError::WrongCredentials);
        }

        let (token, claims) = self.token_service.create_session(&user)?;
        let session = AdminSession::try_from(claims)?;

        tracing::info!(user_id = %session.user_id, "Owner logged in");
        Ok(LoginOutcome { token, session })
    }

    /// Verifies a raw session token. Every failure mode maps to an error;
    /// nothing is cached between calls.
    pub async fn authenticate(&self, token: &str) -> Result<AdminSession, AuthError> {
        let claims = self.token_service.decode_session(token)?;

        if self.revocations.is_revoked(&claims.jti).await? {
            return Err(AuthError::SessionRevoked);
        }

        AdminSession::try_from(claims)
    }

    /// Revokes the session until its token would have expired.
    pub async fn logout(&self, session: &AdminSession) -> Result<(), AuthError> {
        let remaining = (session.expires_at - chrono::Utc::now()).num_seconds().max(0) as u64;
        if remaining == 0 {
            return Ok(());
        }

        self.revocations.revoke(&session.session_id, remaining).await?;
        tracing::info!(user_id = %session.user_id, "Owner logged out");
        Ok(())
    }

    /// Creates the owner account when it does not exist yet. An existing
    /// account is left untouched, including its password.
    pub async fn ensure_owner(&self, account: OwnerAccount) -> Result<bool, AppError> {
        match self.user_repo.get_user_by_email(&account.email).await {
            Lookup::Found(_) => {
                tracing::info!("Owner account already present");
                Ok(false)
            }
            Lookup::NotFound => {
                account.validate()?;

                let password_hash = hash_password(&account.password)?;
                let insert = account.prepare_for_insert(password_hash);
                let id = self.user_repo.create_user(&insert).await?;

                tracing::info!(user_id = %id, "Owner account created");
                Ok(true)
            }
            Lookup::Error(reason) => Err(AppError::InternalError(reason)),
        }
    }
}

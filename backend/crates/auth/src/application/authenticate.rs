//! Authenticate Use Case
//!
//! The core of the Auth Gate: bearer token string in, resolved identity
//! out. The middleware is a thin wrapper around this so the logic is
//! testable without HTTP machinery.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::AuthConfig;
use crate::application::token::{TokenError, TokenService};
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Authenticate use case
pub struct AuthenticateUseCase<U>
where
    U: UserRepository,
{
    repo: Arc<U>,
    tokens: TokenService,
}

impl<U> AuthenticateUseCase<U>
where
    U: UserRepository,
{
    pub fn new(repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        let tokens = TokenService::new(config);
        Self { repo, tokens }
    }

    /// Resolve a bearer token to a stored identity
    ///
    /// `None` means no credential was presented at all. Every failure
    /// maps to a 401; expired and invalid tokens are indistinguishable
    /// to the caller.
    pub async fn execute(&self, token: Option<&str>) -> AuthResult<User> {
        let token = token.ok_or(AuthError::TokenMissing)?;

        let claims = self.tokens.verify(token).map_err(|e| match e {
            TokenError::Expired => AuthError::TokenExpired,
            TokenError::Invalid => AuthError::TokenInvalid,
        })?;

        let subject = UserId::from_uuid(claims.sub);

        self.repo
            .find_by_id(&subject)
            .await?
            .ok_or(AuthError::UnknownSubject)
    }
}

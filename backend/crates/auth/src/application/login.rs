//! Login Use Case
//!
//! Verifies credentials and issues a token. All failure paths surface
//! as `InvalidCredentials` so a caller cannot probe which identifiers
//! exist.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::User;
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    /// Username or email
    pub identifier: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    pub user: User,
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository + CredentialRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository + CredentialRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let user = self
            .repo
            .find_by_identifier(input.identifier.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password_hash = self
            .repo
            .find_password_hash(&user.user_id)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Length limits still apply here so an attacker cannot feed the
        // hasher unbounded input; any policy failure means the stored
        // password cannot match anyway.
        let candidate = ClearTextPassword::new(input.password)
            .map_err(|_| AuthError::InvalidCredentials)?;

        if !password_hash.verify(&candidate) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = TokenService::new(self.config.clone()).issue(&user.user_id)?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput { user, token })
    }
}

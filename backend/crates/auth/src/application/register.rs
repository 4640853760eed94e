//! Register Use Case
//!
//! Creates a new identity and issues its first token.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, Username};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Register output
pub struct RegisterOutput {
    pub user: User,
    pub token: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Collect every field violation before failing, so the caller
        // sees the full list in one response.
        let mut violations = Vec::new();

        let username = match Username::new(input.username) {
            Ok(u) => Some(u),
            Err(e) => {
                violations.push(e.to_string());
                None
            }
        };

        let email = match Email::new(input.email) {
            Ok(e) => Some(e),
            Err(e) => {
                violations.push(e.to_string());
                None
            }
        };

        let password = match ClearTextPassword::new(input.password) {
            Ok(p) => Some(p),
            Err(e) => {
                violations.push(e.to_string());
                None
            }
        };

        if !violations.is_empty() {
            return Err(AuthError::Validation(violations));
        }

        // Checked above
        let (username, email, password) = match (username, email, password) {
            (Some(u), Some(e), Some(p)) => (u, e, p),
            _ => return Err(AuthError::Internal("Validation state lost".to_string())),
        };

        if self.repo.exists_by_username(&username).await? {
            return Err(AuthError::UsernameTaken);
        }
        if self.repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        // Hashing is unconditional on create; plaintext never reaches
        // the repository.
        let password_hash = password
            .hash()
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(username, email);
        self.repo.create(&user, &password_hash).await?;

        let token = TokenService::new(self.config.clone()).issue(&user.user_id)?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User registered"
        );

        Ok(RegisterOutput { user, token })
    }
}

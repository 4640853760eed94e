//! Auth Gate Middleware
//!
//! Intercepts protected routes: extracts the bearer token, verifies it,
//! resolves the subject against the credential store, and attaches the
//! authenticated identity to the request. Rejected requests never reach
//! the handler, so no store mutation can happen without a valid token.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::id::UserId;
use std::sync::Arc;

use crate::application::AuthenticateUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;

/// Identity attached to authenticated requests
///
/// Deliberately does not carry the password hash or any credential
/// material; downstream layers only need who the caller is.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub username: String,
}

/// Middleware state
#[derive(Clone)]
pub struct AuthGateState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Middleware that requires a valid bearer token
///
/// On success inserts [`CurrentUser`] into the request extensions and
/// proceeds. On failure responds 401 with one of the gate messages
/// ("No authentication token provided", "Invalid authentication token",
/// "User not found").
pub async fn require_auth<R>(
    State(state): State<AuthGateState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = platform::bearer::extract_bearer_token(req.headers());

    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.config.clone());

    let user = match use_case.execute(token.as_deref()).await {
        Ok(user) => user,
        Err(e) => return Err(e.into_response()),
    };

    req.extensions_mut().insert(CurrentUser {
        user_id: user.user_id,
        username: user.username.as_str().to_string(),
    });

    Ok(next.run(req).await)
}

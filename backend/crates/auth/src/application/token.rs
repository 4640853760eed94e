//! Token Service
//!
//! Issues and verifies signed, time-bound identity tokens (JWT, HS256).
//! Tokens are opaque to holders and never stored; validity is computed
//! from the signature and expiry at verification time.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use kernel::id::UserId;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Token verification failures
///
/// The distinction is internal only; the Auth Gate collapses both into
/// one externally visible 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,

    #[error("token invalid")]
    Invalid,
}

/// Claims carried by every issued token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the identity's UUID
    pub sub: Uuid,
    /// Issued-at (Unix timestamp, seconds)
    pub iat: i64,
    /// Expiry (Unix timestamp, seconds)
    pub exp: i64,
}

/// Token issuance and verification
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(&config.token_secret),
            decoding_key: DecodingKey::from_secret(&config.token_secret),
            ttl: Duration::from_std(config.token_ttl)
                .unwrap_or_else(|_| Duration::hours(24)),
        }
    }

    /// Issue a signed token for an identity
    pub fn issue(&self, user_id: &UserId) -> AuthResult<String> {
        self.issue_at(user_id, Utc::now())
    }

    fn issue_at(&self, user_id: &UserId, issued_at: DateTime<Utc>) -> AuthResult<String> {
        let claims = Claims {
            sub: *user_id.as_uuid(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Token signing failed: {e}")))
    }

    /// Verify a token string and return its claims
    ///
    /// Malformed structure or signature mismatch => `Invalid`;
    /// current time past `exp` => `Expired`.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}

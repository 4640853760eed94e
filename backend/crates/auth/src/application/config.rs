//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup
//! and passed into constructors; there is no ambient global state.

use std::time::Duration;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Symmetric secret for token signing (32 bytes). Loaded once at
    /// startup, never logged.
    pub token_secret: [u8; 32],
    /// Token lifetime. Fixed at 24 hours; expiry is the only
    /// invalidation mechanism (no revocation list).
    pub token_ttl: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(24 * 3600),
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Create config with an explicit secret (production path)
    pub fn with_secret(secret: [u8; 32]) -> Self {
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The secret must never end up in logs
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

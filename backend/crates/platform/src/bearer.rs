//! Bearer Credential Extraction
//!
//! Pulls the bearer token out of the `Authorization` header. Verification
//! is the caller's job; this only deals with the header shape.

use http::HeaderMap;
use http::header::AUTHORIZATION;

/// Extract a bearer token from the `Authorization` header
///
/// Returns `None` when the header is absent, not valid UTF-8, does not
/// use the `Bearer` scheme, or carries an empty token. The scheme match
/// is case-insensitive per RFC 6750.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;

    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    Some(token.to_string())
}

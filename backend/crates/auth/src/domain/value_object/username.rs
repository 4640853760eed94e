//! Username Value Object

use std::fmt;
use thiserror::Error;

/// Minimum username length
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Maximum username length
pub const MAX_USERNAME_LENGTH: usize = 32;

/// Username validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsernameError {
    #[error("Username must be at least {MIN_USERNAME_LENGTH} characters")]
    TooShort,

    #[error("Username must be at most {MAX_USERNAME_LENGTH} characters")]
    TooLong,

    #[error("Username may only contain letters, digits, '_' and '-'")]
    InvalidCharacter,
}

/// Validated username
///
/// Uniqueness is enforced by the store; this type only guards shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Create a new username with validation
    pub fn new(raw: impl Into<String>) -> Result<Self, UsernameError> {
        let trimmed = raw.into().trim().to_string();

        let char_count = trimmed.chars().count();
        if char_count < MIN_USERNAME_LENGTH {
            return Err(UsernameError::TooShort);
        }
        if char_count > MAX_USERNAME_LENGTH {
            return Err(UsernameError::TooLong);
        }

        if !trimmed
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        {
            return Err(UsernameError::InvalidCharacter);
        }

        Ok(Self(trimmed))
    }

    /// Reconstruct from a trusted source (database row)
    pub fn from_db(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_username() {
        assert!(Username::new("alice").is_ok());
        assert!(Username::new("card_slinger-99").is_ok());
    }

    #[test]
    fn test_too_short() {
        assert_eq!(Username::new("ab"), Err(UsernameError::TooShort));
    }

    #[test]
    fn test_too_long() {
        let long = "a".repeat(MAX_USERNAME_LENGTH + 1);
        assert_eq!(Username::new(long), Err(UsernameError::TooLong));
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(
            Username::new("alice smith"),
            Err(UsernameError::InvalidCharacter)
        );
        assert_eq!(Username::new("a@b.c"), Err(UsernameError::InvalidCharacter));
    }

    #[test]
    fn test_trims_whitespace() {
        let name = Username::new("  alice  ").unwrap();
        assert_eq!(name.as_str(), "alice");
    }
}

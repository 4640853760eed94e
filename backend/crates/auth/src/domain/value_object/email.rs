//! Email Value Object

use std::fmt;
use thiserror::Error;

/// Email validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Email address is required")]
    Empty,

    #[error("Email address is not valid")]
    InvalidFormat,
}

/// Validated email address, stored lowercase
///
/// Case-insensitive uniqueness falls out of the lowercase canonical form;
/// the store only ever sees the canonical string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation and lowercase canonicalization
    pub fn new(raw: impl Into<String>) -> Result<Self, EmailError> {
        let canonical = raw.into().trim().to_lowercase();

        if canonical.is_empty() {
            return Err(EmailError::Empty);
        }

        // Shape check only: local@domain with a dot in the domain.
        // Deliverability is not this type's problem.
        let Some((local, domain)) = canonical.split_once('@') else {
            return Err(EmailError::InvalidFormat);
        };

        if local.is_empty()
            || domain.is_empty()
            || !domain.contains('.')
            || domain.starts_with('.')
            || domain.ends_with('.')
            || canonical.contains(char::is_whitespace)
            || canonical.matches('@').count() != 1
        {
            return Err(EmailError::InvalidFormat);
        }

        Ok(Self(canonical))
    }

    /// Reconstruct from a trusted source (database row)
    pub fn from_db(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        let email = Email::new("alice@example.com").unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
    }

    #[test]
    fn test_lowercased() {
        let email = Email::new("Alice@Example.COM").unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
    }

    #[test]
    fn test_empty() {
        assert_eq!(Email::new("  "), Err(EmailError::Empty));
    }

    #[test]
    fn test_invalid_formats() {
        assert_eq!(Email::new("no-at-sign"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("@example.com"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("alice@"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("alice@nodot"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("a@b@c.com"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("alice@.com"), Err(EmailError::InvalidFormat));
    }
}

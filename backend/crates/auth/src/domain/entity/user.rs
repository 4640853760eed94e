//! User Entity
//!
//! Core identity entity. The password hash never lives here; it stays
//! behind the credential repository so that request contexts and DTOs
//! cannot leak it by accident.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{Email, Username};

/// Registered identity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Unique username (login and display)
    pub username: Username,
    /// Unique email, canonical lowercase
    pub email: Email,
    /// Accumulated experience points, never negative
    pub experience: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with zero experience
    pub fn new(username: Username, email: Email) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            username,
            email,
            experience: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_starts_at_zero_experience() {
        let user = User::new(
            Username::new("alice").unwrap(),
            Email::new("alice@example.com").unwrap(),
        );
        assert_eq!(user.experience, 0);
        assert_eq!(user.created_at, user.updated_at);
    }
}

//! Repository Traits
//!
//! Interfaces for the credential store. Implementation is in the
//! infrastructure layer.

use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::entity::User;
use crate::domain::value_object::{Email, Username};
use crate::error::AuthResult;

/// Identity repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new identity together with its password hash
    async fn create(&self, user: &User, password_hash: &HashedPassword) -> AuthResult<()>;

    /// Find identity by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find identity by username or email (email match is on the
    /// lowercase canonical form)
    async fn find_by_identifier(&self, identifier: &str) -> AuthResult<Option<User>>;

    /// Check if a username is taken
    async fn exists_by_username(&self, username: &Username) -> AuthResult<bool>;

    /// Check if an email is registered
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;
}

/// Credential repository trait
///
/// Kept apart from [`UserRepository`] so the hash only crosses this one
/// seam; nothing else in the system can ask for it.
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Fetch the stored password hash for an identity
    async fn find_password_hash(&self, user_id: &UserId) -> AuthResult<Option<HashedPassword>>;
}

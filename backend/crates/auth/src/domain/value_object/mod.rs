//! Value Objects

pub mod email;
pub mod username;

pub use email::{Email, EmailError};
pub use username::{Username, UsernameError};

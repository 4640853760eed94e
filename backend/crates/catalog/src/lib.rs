//! Catalog Backend Module
//!
//! Cards and decks with ownership-scoped mutations.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, deck-composition rules, repository traits
//! - `application/` - Use cases and the reference resolver
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Access Model
//! - Card and deck reads are public; direct deck fetch by id ignores
//!   the visibility flag (an unguessable id acts as a capability)
//! - Every mutation requires the auth gate and verifies the caller is
//!   the creator/owner before touching the store
//! - Deck writes are version-checked; losing a race retries from a
//!   fresh read before giving up with a conflict

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::postgres::PgCatalogRepository;
pub use presentation::router::{cards_router, decks_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgCatalogRepository as CatalogStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

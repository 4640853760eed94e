//! Repository Traits
//!
//! Interfaces for catalog persistence. Reads return raw id references;
//! expansion into owner names and full cards is the resolver's job.

use kernel::id::{CardId, DeckId, UserId};

use crate::domain::entity::{Card, Deck};
use crate::domain::value_object::{CardType, Rarity};
use crate::error::CatalogResult;

/// Filter for card listing; conditions are ANDed
#[derive(Debug, Clone, Default)]
pub struct CardFilter {
    /// Exact rarity match
    pub rarity: Option<Rarity>,
    /// Exact type match
    pub card_type: Option<CardType>,
    /// Case-insensitive substring on name or description
    pub search: Option<String>,
}

/// Minimal owner view for resolved responses
#[derive(Debug, Clone)]
pub struct OwnerSummary {
    pub user_id: UserId,
    pub username: String,
}

/// Card repository trait
#[trait_variant::make(CardRepository: Send)]
pub trait LocalCardRepository {
    async fn create(&self, card: &Card) -> CatalogResult<()>;

    async fn find_by_id(&self, card_id: &CardId) -> CatalogResult<Option<Card>>;

    /// Batch fetch; missing ids are simply absent from the result
    async fn find_by_ids(&self, card_ids: &[CardId]) -> CatalogResult<Vec<Card>>;

    async fn update(&self, card: &Card) -> CatalogResult<()>;

    async fn delete(&self, card_id: &CardId) -> CatalogResult<()>;

    /// List matching cards, newest first
    async fn search(&self, filter: &CardFilter) -> CatalogResult<Vec<Card>>;
}

/// Deck repository trait
#[trait_variant::make(DeckRepository: Send)]
pub trait LocalDeckRepository {
    async fn create(&self, deck: &Deck) -> CatalogResult<()>;

    async fn find_by_id(&self, deck_id: &DeckId) -> CatalogResult<Option<Deck>>;

    /// Persist the deck if the stored version still matches
    /// `deck.version`; bumps the version on success. Returns false when
    /// a concurrent writer got there first.
    async fn update(&self, deck: &Deck) -> CatalogResult<bool>;

    async fn delete(&self, deck_id: &DeckId) -> CatalogResult<()>;

    /// Public decks, newest first
    async fn list_public(&self) -> CatalogResult<Vec<Deck>>;

    /// Every deck of one owner regardless of visibility, newest first
    async fn list_by_owner(&self, owner: &UserId) -> CatalogResult<Vec<Deck>>;
}

/// Owner lookup trait
///
/// Lets the resolver expand owner ids without depending on the auth
/// crate's repository surface.
#[trait_variant::make(OwnerLookup: Send)]
pub trait LocalOwnerLookup {
    /// Batch fetch; dangling ids are simply absent from the result
    async fn find_owners(&self, user_ids: &[UserId]) -> CatalogResult<Vec<OwnerSummary>>;
}

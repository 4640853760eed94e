//! Deck Query Use Cases

use std::sync::Arc;

use kernel::id::{DeckId, UserId};

use crate::application::resolver::{ResolvedDeck, Resolver};
use crate::domain::repository::{CardRepository, DeckRepository, OwnerLookup};
use crate::error::{CatalogError, CatalogResult};

/// List public decks use case
pub struct ListPublicDecksUseCase<D, C, O>
where
    D: DeckRepository,
    C: CardRepository,
    O: OwnerLookup,
{
    decks: Arc<D>,
    resolver: Resolver<C, O>,
}

impl<D, C, O> ListPublicDecksUseCase<D, C, O>
where
    D: DeckRepository,
    C: CardRepository,
    O: OwnerLookup,
{
    pub fn new(decks: Arc<D>, cards: Arc<C>, owners: Arc<O>) -> Self {
        let resolver = Resolver::new(cards, owners);
        Self { decks, resolver }
    }

    pub async fn execute(&self) -> CatalogResult<Vec<ResolvedDeck>> {
        let decks = self.decks.list_public().await?;
        self.resolver.resolve_decks(decks).await
    }
}

/// List caller's decks use case
///
/// Returns every deck of the caller, private ones included.
pub struct ListMyDecksUseCase<D, C, O>
where
    D: DeckRepository,
    C: CardRepository,
    O: OwnerLookup,
{
    decks: Arc<D>,
    resolver: Resolver<C, O>,
}

impl<D, C, O> ListMyDecksUseCase<D, C, O>
where
    D: DeckRepository,
    C: CardRepository,
    O: OwnerLookup,
{
    pub fn new(decks: Arc<D>, cards: Arc<C>, owners: Arc<O>) -> Self {
        let resolver = Resolver::new(cards, owners);
        Self { decks, resolver }
    }

    pub async fn execute(&self, actor: UserId) -> CatalogResult<Vec<ResolvedDeck>> {
        let decks = self.decks.list_by_owner(&actor).await?;
        self.resolver.resolve_decks(decks).await
    }
}

/// Get deck use case
///
/// Direct fetch by id deliberately ignores visibility: knowing a deck's
/// id grants read access even when the deck is private.
pub struct GetDeckUseCase<D, C, O>
where
    D: DeckRepository,
    C: CardRepository,
    O: OwnerLookup,
{
    decks: Arc<D>,
    resolver: Resolver<C, O>,
}

impl<D, C, O> GetDeckUseCase<D, C, O>
where
    D: DeckRepository,
    C: CardRepository,
    O: OwnerLookup,
{
    pub fn new(decks: Arc<D>, cards: Arc<C>, owners: Arc<O>) -> Self {
        let resolver = Resolver::new(cards, owners);
        Self { decks, resolver }
    }

    pub async fn execute(&self, deck_id: DeckId) -> CatalogResult<ResolvedDeck> {
        let deck = self
            .decks
            .find_by_id(&deck_id)
            .await?
            .ok_or(CatalogError::DeckNotFound)?;

        self.resolver.resolve_deck(deck).await
    }
}

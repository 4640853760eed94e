//! Deck Mutation Use Cases
//!
//! Create, update, and delete. Updates go through the deck's version
//! column: a stale write is retried from a fresh read, and after
//! [`MAX_WRITE_ATTEMPTS`] losses the caller gets a 409.

use std::sync::Arc;

use kernel::id::{DeckId, UserId};

use crate::application::resolver::{ResolvedDeck, Resolver};
use crate::domain::entity::{Deck, DeckPatch, NewDeck};
use crate::domain::repository::{CardRepository, DeckRepository, OwnerLookup};
use crate::error::{CatalogError, CatalogResult};

/// Attempts before a contended deck write gives up with a conflict
pub const MAX_WRITE_ATTEMPTS: u32 = 3;

/// Create deck use case
pub struct CreateDeckUseCase<D, C, O>
where
    D: DeckRepository,
    C: CardRepository,
    O: OwnerLookup,
{
    decks: Arc<D>,
    resolver: Resolver<C, O>,
}

impl<D, C, O> CreateDeckUseCase<D, C, O>
where
    D: DeckRepository,
    C: CardRepository,
    O: OwnerLookup,
{
    pub fn new(decks: Arc<D>, cards: Arc<C>, owners: Arc<O>) -> Self {
        let resolver = Resolver::new(cards, owners);
        Self { decks, resolver }
    }

    pub async fn execute(&self, fields: NewDeck, actor: UserId) -> CatalogResult<ResolvedDeck> {
        let deck = Deck::new(fields, actor);

        let violations = deck.validate();
        if !violations.is_empty() {
            return Err(CatalogError::Validation(violations));
        }

        self.decks.create(&deck).await?;

        tracing::info!(deck_id = %deck.deck_id, owner = %actor, "Deck created");

        self.resolver.resolve_deck(deck).await
    }
}

/// Update deck use case
pub struct UpdateDeckUseCase<D, C, O>
where
    D: DeckRepository,
    C: CardRepository,
    O: OwnerLookup,
{
    decks: Arc<D>,
    resolver: Resolver<C, O>,
}

impl<D, C, O> UpdateDeckUseCase<D, C, O>
where
    D: DeckRepository,
    C: CardRepository,
    O: OwnerLookup,
{
    pub fn new(decks: Arc<D>, cards: Arc<C>, owners: Arc<O>) -> Self {
        let resolver = Resolver::new(cards, owners);
        Self { decks, resolver }
    }

    pub async fn execute(
        &self,
        deck_id: DeckId,
        patch: DeckPatch,
        actor: UserId,
    ) -> CatalogResult<ResolvedDeck> {
        for _ in 0..MAX_WRITE_ATTEMPTS {
            let mut deck = self
                .decks
                .find_by_id(&deck_id)
                .await?
                .ok_or(CatalogError::DeckNotFound)?;

            if deck.owner != actor {
                return Err(CatalogError::NotOwner {
                    action: "update",
                    resource: "deck",
                });
            }

            deck.apply(patch.clone());

            let violations = deck.validate();
            if !violations.is_empty() {
                return Err(CatalogError::Validation(violations));
            }

            if self.decks.update(&deck).await? {
                tracing::info!(deck_id = %deck.deck_id, "Deck updated");
                return self.resolver.resolve_deck(deck).await;
            }

            tracing::debug!(deck_id = %deck_id, "Deck update raced, retrying");
        }

        Err(CatalogError::VersionConflict)
    }
}

/// Delete deck use case
pub struct DeleteDeckUseCase<D>
where
    D: DeckRepository,
{
    decks: Arc<D>,
}

impl<D> DeleteDeckUseCase<D>
where
    D: DeckRepository,
{
    pub fn new(decks: Arc<D>) -> Self {
        Self { decks }
    }

    pub async fn execute(&self, deck_id: DeckId, actor: UserId) -> CatalogResult<()> {
        let deck = self
            .decks
            .find_by_id(&deck_id)
            .await?
            .ok_or(CatalogError::DeckNotFound)?;

        if deck.owner != actor {
            return Err(CatalogError::NotOwner {
                action: "delete",
                resource: "deck",
            });
        }

        self.decks.delete(&deck_id).await?;

        tracing::info!(deck_id = %deck_id, "Deck deleted");

        Ok(())
    }
}

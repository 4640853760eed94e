//! Deck Composition Use Cases
//!
//! Adding and removing cards. Both verify ownership, mutate through
//! the entity so the quantity clamp always applies, and write with the
//! same version-checked retry as the other deck mutations.

use std::sync::Arc;

use kernel::id::{CardId, DeckId, UserId};

use crate::application::mutate_deck::MAX_WRITE_ATTEMPTS;
use crate::application::resolver::{ResolvedDeck, Resolver};
use crate::domain::repository::{CardRepository, DeckRepository, OwnerLookup};
use crate::error::{CatalogError, CatalogResult};

/// Add card to deck use case
pub struct AddCardToDeckUseCase<D, C, O>
where
    D: DeckRepository,
    C: CardRepository,
    O: OwnerLookup,
{
    decks: Arc<D>,
    cards: Arc<C>,
    resolver: Resolver<C, O>,
}

impl<D, C, O> AddCardToDeckUseCase<D, C, O>
where
    D: DeckRepository,
    C: CardRepository,
    O: OwnerLookup,
{
    pub fn new(decks: Arc<D>, cards: Arc<C>, owners: Arc<O>) -> Self {
        let resolver = Resolver::new(cards.clone(), owners);
        Self {
            decks,
            cards,
            resolver,
        }
    }

    pub async fn execute(
        &self,
        deck_id: DeckId,
        card_id: CardId,
        quantity: i16,
        actor: UserId,
    ) -> CatalogResult<ResolvedDeck> {
        if quantity < 1 {
            return Err(CatalogError::Validation(vec![
                "quantity must be at least 1".to_string(),
            ]));
        }

        // The referenced card must exist in the catalog; a deck never
        // gains an entry pointing nowhere.
        if self.cards.find_by_id(&card_id).await?.is_none() {
            return Err(CatalogError::CardNotFound);
        }

        for _ in 0..MAX_WRITE_ATTEMPTS {
            let mut deck = self
                .decks
                .find_by_id(&deck_id)
                .await?
                .ok_or(CatalogError::DeckNotFound)?;

            if deck.owner != actor {
                return Err(CatalogError::NotOwner {
                    action: "modify",
                    resource: "deck",
                });
            }

            let stored = deck.add_card(card_id, quantity);

            if self.decks.update(&deck).await? {
                tracing::info!(
                    deck_id = %deck_id,
                    card_id = %card_id,
                    quantity = stored,
                    "Card added to deck"
                );
                return self.resolver.resolve_deck(deck).await;
            }

            tracing::debug!(deck_id = %deck_id, "Deck add-card raced, retrying");
        }

        Err(CatalogError::VersionConflict)
    }
}

/// Remove card from deck use case
pub struct RemoveCardFromDeckUseCase<D, C, O>
where
    D: DeckRepository,
    C: CardRepository,
    O: OwnerLookup,
{
    decks: Arc<D>,
    resolver: Resolver<C, O>,
}

impl<D, C, O> RemoveCardFromDeckUseCase<D, C, O>
where
    D: DeckRepository,
    C: CardRepository,
    O: OwnerLookup,
{
    pub fn new(decks: Arc<D>, cards: Arc<C>, owners: Arc<O>) -> Self {
        let resolver = Resolver::new(cards, owners);
        Self { decks, resolver }
    }

    /// Removes every entry for the card. Succeeds even when the deck
    /// holds no such entry.
    pub async fn execute(
        &self,
        deck_id: DeckId,
        card_id: CardId,
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
                    action: "modify",
                    resource: "deck",
                });
            }

            let removed = deck.remove_card(&card_id);

            if !removed {
                // Nothing to write; the absent entry is the requested
                // end state already.
                return self.resolver.resolve_deck(deck).await;
            }

            if self.decks.update(&deck).await? {
                tracing::info!(deck_id = %deck_id, card_id = %card_id, "Card removed from deck");
                return self.resolver.resolve_deck(deck).await;
            }

            tracing::debug!(deck_id = %deck_id, "Deck remove-card raced, retrying");
        }

        Err(CatalogError::VersionConflict)
    }
}

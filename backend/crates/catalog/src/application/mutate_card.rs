//! Card Mutation Use Cases
//!
//! All mutations are ownership-scoped: the calling identity becomes
//! `created_by` on create, and update/delete verify it before touching
//! the store.

use std::sync::Arc;

use kernel::id::{CardId, UserId};

use crate::application::resolver::{ResolvedCard, Resolver};
use crate::domain::entity::{Card, CardPatch, NewCard};
use crate::domain::repository::{CardRepository, OwnerLookup};
use crate::error::{CatalogError, CatalogResult};

/// Create card use case
pub struct CreateCardUseCase<C, O>
where
    C: CardRepository,
    O: OwnerLookup,
{
    cards: Arc<C>,
    resolver: Resolver<C, O>,
}

impl<C, O> CreateCardUseCase<C, O>
where
    C: CardRepository,
    O: OwnerLookup,
{
    pub fn new(cards: Arc<C>, owners: Arc<O>) -> Self {
        let resolver = Resolver::new(cards.clone(), owners);
        Self { cards, resolver }
    }

    pub async fn execute(&self, fields: NewCard, actor: UserId) -> CatalogResult<ResolvedCard> {
        let card = Card::new(fields, actor);

        let violations = card.validate();
        if !violations.is_empty() {
            return Err(CatalogError::Validation(violations));
        }

        self.cards.create(&card).await?;

        tracing::info!(card_id = %card.card_id, creator = %actor, "Card created");

        self.resolver.resolve_card(card).await
    }
}

/// Update card use case
pub struct UpdateCardUseCase<C, O>
where
    C: CardRepository,
    O: OwnerLookup,
{
    cards: Arc<C>,
    resolver: Resolver<C, O>,
}

impl<C, O> UpdateCardUseCase<C, O>
where
    C: CardRepository,
    O: OwnerLookup,
{
    pub fn new(cards: Arc<C>, owners: Arc<O>) -> Self {
        let resolver = Resolver::new(cards.clone(), owners);
        Self { cards, resolver }
    }

    pub async fn execute(
        &self,
        card_id: CardId,
        patch: CardPatch,
        actor: UserId,
    ) -> CatalogResult<ResolvedCard> {
        let mut card = self
            .cards
            .find_by_id(&card_id)
            .await?
            .ok_or(CatalogError::CardNotFound)?;

        if card.created_by != actor {
            return Err(CatalogError::NotOwner {
                action: "update",
                resource: "card",
            });
        }

        card.apply(patch);

        let violations = card.validate();
        if !violations.is_empty() {
            return Err(CatalogError::Validation(violations));
        }

        self.cards.update(&card).await?;

        tracing::info!(card_id = %card.card_id, "Card updated");

        self.resolver.resolve_card(card).await
    }
}

/// Delete card use case
pub struct DeleteCardUseCase<C>
where
    C: CardRepository,
{
    cards: Arc<C>,
}

impl<C> DeleteCardUseCase<C>
where
    C: CardRepository,
{
    pub fn new(cards: Arc<C>) -> Self {
        Self { cards }
    }

    pub async fn execute(&self, card_id: CardId, actor: UserId) -> CatalogResult<()> {
        let card = self
            .cards
            .find_by_id(&card_id)
            .await?
            .ok_or(CatalogError::CardNotFound)?;

        if card.created_by != actor {
            return Err(CatalogError::NotOwner {
                action: "delete",
                resource: "card",
            });
        }

        self.cards.delete(&card_id).await?;

        tracing::info!(card_id = %card_id, "Card deleted");

        Ok(())
    }
}

//! Card Query Use Cases
//!
//! Public reads; no identity required.

use std::sync::Arc;

use kernel::id::CardId;

use crate::application::resolver::{ResolvedCard, Resolver};
use crate::domain::repository::{CardFilter, CardRepository, OwnerLookup};
use crate::error::{CatalogError, CatalogResult};

/// List cards use case
pub struct ListCardsUseCase<C, O>
where
    C: CardRepository,
    O: OwnerLookup,
{
    cards: Arc<C>,
    resolver: Resolver<C, O>,
}

impl<C, O> ListCardsUseCase<C, O>
where
    C: CardRepository,
    O: OwnerLookup,
{
    pub fn new(cards: Arc<C>, owners: Arc<O>) -> Self {
        let resolver = Resolver::new(cards.clone(), owners);
        Self { cards, resolver }
    }

    pub async fn execute(&self, filter: CardFilter) -> CatalogResult<Vec<ResolvedCard>> {
        let cards = self.cards.search(&filter).await?;
        self.resolver.resolve_cards(cards).await
    }
}

/// Get card use case
pub struct GetCardUseCase<C, O>
where
    C: CardRepository,
    O: OwnerLookup,
{
    cards: Arc<C>,
    resolver: Resolver<C, O>,
}

impl<C, O> GetCardUseCase<C, O>
where
    C: CardRepository,
    O: OwnerLookup,
{
    pub fn new(cards: Arc<C>, owners: Arc<O>) -> Self {
        let resolver = Resolver::new(cards.clone(), owners);
        Self { cards, resolver }
    }

    pub async fn execute(&self, card_id: CardId) -> CatalogResult<ResolvedCard> {
        let card = self
            .cards
            .find_by_id(&card_id)
            .await?
            .ok_or(CatalogError::CardNotFound)?;

        self.resolver.resolve_card(card).await
    }
}

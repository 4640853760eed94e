//! Reference Resolver
//!
//! Repository reads return raw id references. This component expands
//! them into response-ready views: owner ids become `{id, username}`
//! summaries and deck entries become full cards. Lookups are batched,
//! one query per kind per call. Dangling references resolve to `None`,
//! never to an error.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::{CardId, UserId};

use crate::domain::entity::{Card, Deck};
use crate::domain::repository::{CardRepository, OwnerLookup, OwnerSummary};
use crate::error::CatalogResult;

/// Card with its creator expanded
#[derive(Debug, Clone)]
pub struct ResolvedCard {
    pub card: Card,
    /// None when the creator no longer resolves
    pub created_by: Option<OwnerSummary>,
}

/// Deck entry with its card expanded
#[derive(Debug, Clone)]
pub struct ResolvedEntry {
    pub card_id: CardId,
    /// None when the card was deleted from the catalog
    pub card: Option<Card>,
    pub quantity: i16,
}

/// Deck with owner and entries expanded
#[derive(Debug, Clone)]
pub struct ResolvedDeck {
    pub deck: Deck,
    /// None when the owner no longer resolves
    pub owner: Option<OwnerSummary>,
    pub entries: Vec<ResolvedEntry>,
}

/// Batching reference resolver
pub struct Resolver<C, O>
where
    C: CardRepository,
    O: OwnerLookup,
{
    cards: Arc<C>,
    owners: Arc<O>,
}

impl<C, O> Resolver<C, O>
where
    C: CardRepository,
    O: OwnerLookup,
{
    pub fn new(cards: Arc<C>, owners: Arc<O>) -> Self {
        Self { cards, owners }
    }

    pub async fn resolve_card(&self, card: Card) -> CatalogResult<ResolvedCard> {
        let mut resolved = self.resolve_cards(vec![card]).await?;
        // resolve_cards returns exactly one view per input card
        Ok(resolved.remove(0))
    }

    pub async fn resolve_cards(&self, cards: Vec<Card>) -> CatalogResult<Vec<ResolvedCard>> {
        let owner_ids = dedup(cards.iter().map(|c| c.created_by));
        let owners = self.owner_map(&owner_ids).await?;

        Ok(cards
            .into_iter()
            .map(|card| {
                let created_by = owners.get(&card.created_by).cloned();
                ResolvedCard { card, created_by }
            })
            .collect())
    }

    pub async fn resolve_deck(&self, deck: Deck) -> CatalogResult<ResolvedDeck> {
        let mut resolved = self.resolve_decks(vec![deck]).await?;
        Ok(resolved.remove(0))
    }

    pub async fn resolve_decks(&self, decks: Vec<Deck>) -> CatalogResult<Vec<ResolvedDeck>> {
        let owner_ids = dedup(decks.iter().map(|d| d.owner));
        let card_ids = dedup(decks.iter().flat_map(|d| d.cards.iter().map(|e| e.card_id)));

        let owners = self.owner_map(&owner_ids).await?;
        let cards: HashMap<CardId, Card> = self
            .cards
            .find_by_ids(&card_ids)
            .await?
            .into_iter()
            .map(|c| (c.card_id, c))
            .collect();

        Ok(decks
            .into_iter()
            .map(|deck| {
                let owner = owners.get(&deck.owner).cloned();
                let entries = deck
                    .cards
                    .iter()
                    .map(|entry| ResolvedEntry {
                        card_id: entry.card_id,
                        card: cards.get(&entry.card_id).cloned(),
                        quantity: entry.quantity,
                    })
                    .collect();
                ResolvedDeck {
                    deck,
                    owner,
                    entries,
                }
            })
            .collect())
    }

    async fn owner_map(
        &self,
        owner_ids: &[UserId],
    ) -> CatalogResult<HashMap<UserId, OwnerSummary>> {
        Ok(self
            .owners
            .find_owners(owner_ids)
            .await?
            .into_iter()
            .map(|o| (o.user_id, o))
            .collect())
    }
}

fn dedup<I, T>(ids: I) -> Vec<T>
where
    I: Iterator<Item = T>,
    T: std::hash::Hash + Eq + Copy,
{
    let mut seen = std::collections::HashSet::new();
    ids.filter(|id| seen.insert(*id)).collect()
}

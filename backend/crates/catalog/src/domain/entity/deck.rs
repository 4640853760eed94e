//! Deck Entity
//!
//! Holds the deck-composition rules: one entry per distinct card,
//! quantities clamped to [1, 4]. Adding and removing cards goes through
//! the entity so no call site can bypass the clamp.

use chrono::{DateTime, Utc};
use kernel::id::{CardId, DeckId, UserId};

/// Most copies of a single card a deck may hold
pub const MAX_COPIES: i16 = 4;

/// One card reference inside a deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckEntry {
    pub card_id: CardId,
    /// Always within [1, MAX_COPIES]
    pub quantity: i16,
}

/// Deck of cards owned by a user
#[derive(Debug, Clone)]
pub struct Deck {
    pub deck_id: DeckId,
    pub name: String,
    pub description: String,
    /// At most one entry per distinct card_id, insertion order kept
    pub cards: Vec<DeckEntry>,
    /// Owner identity, immutable after creation
    pub owner: UserId,
    pub is_public: bool,
    pub likes: i64,
    /// Optimistic concurrency counter, bumped on every persisted write
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating a deck
#[derive(Debug, Clone)]
pub struct NewDeck {
    pub name: String,
    pub description: Option<String>,
    pub is_public: Option<bool>,
}

/// Partial update; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default)]
pub struct DeckPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_public: Option<bool>,
}

impl Deck {
    pub fn new(fields: NewDeck, owner: UserId) -> Self {
        let now = Utc::now();

        Self {
            deck_id: DeckId::new(),
            name: fields.name,
            description: fields.description.unwrap_or_default(),
            cards: Vec::new(),
            owner,
            is_public: fields.is_public.unwrap_or(false),
            likes: 0,
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update. `owner` and `cards` never change here.
    pub fn apply(&mut self, patch: DeckPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(is_public) = patch.is_public {
            self.is_public = is_public;
        }
        self.updated_at = Utc::now();
    }

    /// Add copies of a card, merging with any existing entry
    ///
    /// The resulting quantity is clamped to [`MAX_COPIES`] on both the
    /// merge path and the first insertion. Returns the stored quantity.
    pub fn add_card(&mut self, card_id: CardId, quantity: i16) -> i16 {
        let stored = match self.cards.iter_mut().find(|e| e.card_id == card_id) {
            Some(entry) => {
                // Saturating: the sum of two i16 quantities may not fit
                entry.quantity = entry.quantity.saturating_add(quantity).min(MAX_COPIES);
                entry.quantity
            }
            None => {
                let clamped = quantity.min(MAX_COPIES);
                self.cards.push(DeckEntry {
                    card_id,
                    quantity: clamped,
                });
                clamped
            }
        };
        self.updated_at = Utc::now();
        stored
    }

    /// Remove every entry for a card. Idempotent.
    ///
    /// Returns true when an entry was actually removed.
    pub fn remove_card(&mut self, card_id: &CardId) -> bool {
        let before = self.cards.len();
        self.cards.retain(|e| e.card_id != *card_id);
        let removed = self.cards.len() != before;
        if removed {
            self.updated_at = Utc::now();
        }
        removed
    }

    /// Collect every constraint violation on the current state
    pub fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();

        if self.name.trim().is_empty() {
            violations.push("name is required".to_string());
        }
        if self.likes < 0 {
            violations.push("likes must not be negative".to_string());
        }

        let mut seen = std::collections::HashSet::new();
        for entry in &self.cards {
            if !seen.insert(entry.card_id) {
                violations.push(format!("card {} appears more than once", entry.card_id));
            }
            if entry.quantity < 1 || entry.quantity > MAX_COPIES {
                violations.push(format!(
                    "quantity for card {} must be between 1 and {}",
                    entry.card_id, MAX_COPIES
                ));
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_deck() -> Deck {
        Deck::new(
            NewDeck {
                name: "Burn".to_string(),
                description: None,
                is_public: None,
            },
            UserId::new(),
        )
    }

    #[test]
    fn test_new_deck_defaults() {
        let deck = new_deck();
        assert_eq!(deck.description, "");
        assert!(!deck.is_public);
        assert_eq!(deck.likes, 0);
        assert_eq!(deck.version, 0);
        assert!(deck.cards.is_empty());
    }

    #[test]
    fn test_add_card_merges_and_clamps() {
        let mut deck = new_deck();
        let card = CardId::new();

        assert_eq!(deck.add_card(card, 2), 2);
        assert_eq!(deck.add_card(card, 3), MAX_COPIES);
        assert_eq!(deck.cards.len(), 1);
    }

    #[test]
    fn test_add_card_huge_quantities_saturate_at_the_clamp() {
        let mut deck = new_deck();
        let card = CardId::new();

        deck.add_card(card, i16::MAX);
        assert_eq!(deck.add_card(card, i16::MAX), MAX_COPIES);
        assert_eq!(deck.cards[0].quantity, MAX_COPIES);
    }

    #[test]
    fn test_add_card_clamps_first_insertion() {
        let mut deck = new_deck();
        let card = CardId::new();

        assert_eq!(deck.add_card(card, 99), MAX_COPIES);
        assert_eq!(deck.cards[0].quantity, MAX_COPIES);
    }

    #[test]
    fn test_remove_card_is_idempotent() {
        let mut deck = new_deck();
        let card = CardId::new();
        deck.add_card(card, 1);

        assert!(deck.remove_card(&card));
        assert!(!deck.remove_card(&card));
        assert!(deck.cards.is_empty());
    }

    #[test]
    fn test_add_then_remove_round_trip() {
        let mut deck = new_deck();
        let keep = CardId::new();
        let drop = CardId::new();
        deck.add_card(keep, 2);
        deck.add_card(drop, 1);

        deck.remove_card(&drop);

        assert_eq!(deck.cards.len(), 1);
        assert_eq!(deck.cards[0].card_id, keep);
        assert_eq!(deck.cards[0].quantity, 2);
    }

    #[test]
    fn test_validate_flags_bad_quantity() {
        let mut deck = new_deck();
        deck.cards.push(DeckEntry {
            card_id: CardId::new(),
            quantity: 0,
        });

        let violations = deck.validate();
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("between 1 and 4"));
    }
}

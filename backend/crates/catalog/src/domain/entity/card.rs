//! Card Entity

use chrono::{DateTime, Utc};
use kernel::id::{CardId, UserId};

use crate::domain::value_object::{CardType, Rarity};

/// Placeholder shown when a card has no artwork yet
pub const DEFAULT_CARD_IMAGE: &str = "https://via.placeholder.com/300x400";

/// Collectible card
#[derive(Debug, Clone)]
pub struct Card {
    pub card_id: CardId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub rarity: Rarity,
    pub card_type: CardType,
    pub attack: i32,
    pub defense: i32,
    pub cost: i32,
    /// Ordered list of ability names
    pub abilities: Vec<String>,
    /// Creator identity, immutable after creation
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields a creator may supply when minting a card
#[derive(Debug, Clone)]
pub struct NewCard {
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub rarity: Option<Rarity>,
    pub card_type: CardType,
    pub attack: Option<i32>,
    pub defense: Option<i32>,
    pub cost: i32,
    pub abilities: Vec<String>,
}

/// Partial update; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default)]
pub struct CardPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub rarity: Option<Rarity>,
    pub card_type: Option<CardType>,
    pub attack: Option<i32>,
    pub defense: Option<i32>,
    pub cost: Option<i32>,
    pub abilities: Option<Vec<String>>,
}

impl Card {
    pub fn new(fields: NewCard, created_by: UserId) -> Self {
        let now = Utc::now();

        Self {
            card_id: CardId::new(),
            name: fields.name,
            description: fields.description,
            image: fields
                .image
                .unwrap_or_else(|| DEFAULT_CARD_IMAGE.to_string()),
            rarity: fields.rarity.unwrap_or_default(),
            card_type: fields.card_type,
            attack: fields.attack.unwrap_or(0),
            defense: fields.defense.unwrap_or(0),
            cost: fields.cost,
            abilities: fields.abilities,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update. `created_by` never changes.
    pub fn apply(&mut self, patch: CardPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(rarity) = patch.rarity {
            self.rarity = rarity;
        }
        if let Some(card_type) = patch.card_type {
            self.card_type = card_type;
        }
        if let Some(attack) = patch.attack {
            self.attack = attack;
        }
        if let Some(defense) = patch.defense {
            self.defense = defense;
        }
        if let Some(cost) = patch.cost {
            self.cost = cost;
        }
        if let Some(abilities) = patch.abilities {
            self.abilities = abilities;
        }
        self.updated_at = Utc::now();
    }

    /// Collect every constraint violation on the current state
    pub fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();

        if self.name.trim().is_empty() {
            violations.push("name is required".to_string());
        }
        if self.description.trim().is_empty() {
            violations.push("description is required".to_string());
        }
        if self.attack < 0 {
            violations.push("attack must not be negative".to_string());
        }
        if self.defense < 0 {
            violations.push("defense must not be negative".to_string());
        }
        if self.cost < 0 {
            violations.push("cost must not be negative".to_string());
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_card_fields() -> NewCard {
        NewCard {
            name: "Flame Imp".to_string(),
            description: "A small fiery creature".to_string(),
            image: None,
            rarity: None,
            card_type: CardType::Creature,
            attack: None,
            defense: None,
            cost: 1,
            abilities: vec!["haste".to_string()],
        }
    }

    #[test]
    fn test_new_card_fills_defaults() {
        let card = Card::new(new_card_fields(), UserId::new());
        assert_eq!(card.image, DEFAULT_CARD_IMAGE);
        assert_eq!(card.rarity, Rarity::Common);
        assert_eq!(card.attack, 0);
        assert_eq!(card.defense, 0);
        assert!(card.validate().is_empty());
    }

    #[test]
    fn test_apply_patch_leaves_unset_fields() {
        let creator = UserId::new();
        let mut card = Card::new(new_card_fields(), creator);

        card.apply(CardPatch {
            attack: Some(3),
            ..CardPatch::default()
        });

        assert_eq!(card.attack, 3);
        assert_eq!(card.name, "Flame Imp");
        assert_eq!(card.created_by, creator);
    }

    #[test]
    fn test_validate_collects_all_violations() {
        let mut card = Card::new(new_card_fields(), UserId::new());
        card.name = " ".to_string();
        card.attack = -1;
        card.cost = -5;

        let violations = card.validate();
        assert_eq!(violations.len(), 3);
        assert!(violations.iter().any(|v| v.contains("name")));
        assert!(violations.iter().any(|v| v.contains("attack")));
        assert!(violations.iter().any(|v| v.contains("cost")));
    }
}

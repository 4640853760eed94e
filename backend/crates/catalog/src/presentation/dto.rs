//! API DTOs (Data Transfer Objects)
//!
//! Response envelopes follow the `{success, message?, count?, <resource>}`
//! shape. Enum-valued request fields arrive as strings and are parsed
//! into violations rather than serde rejections, so a bad rarity answers
//! 422 with a message instead of a bare deserialization error.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::resolver::{ResolvedCard, ResolvedDeck, ResolvedEntry};
use crate::domain::entity::{Card, CardPatch, DeckPatch, NewCard, NewDeck};
use crate::domain::repository::OwnerSummary;
use crate::domain::value_object::{CardType, Rarity};

// ============================================================================
// Shared views
// ============================================================================

/// Resolved owner reference
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    pub id: String,
    pub username: String,
}

impl From<&OwnerSummary> for OwnerDto {
    fn from(owner: &OwnerSummary) -> Self {
        Self {
            id: owner.user_id.to_string(),
            username: owner.username.clone(),
        }
    }
}

/// Card view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub rarity: Rarity,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub attack: i32,
    pub defense: i32,
    pub cost: i32,
    pub abilities: Vec<String>,
    /// Null when the creator no longer resolves
    pub created_by: Option<OwnerDto>,
    pub created_at: String,
    pub updated_at: String,
}

impl CardDto {
    fn from_parts(card: &Card, created_by: Option<&OwnerSummary>) -> Self {
        Self {
            id: card.card_id.to_string(),
            name: card.name.clone(),
            description: card.description.clone(),
            image: card.image.clone(),
            rarity: card.rarity,
            card_type: card.card_type,
            attack: card.attack,
            defense: card.defense,
            cost: card.cost,
            abilities: card.abilities.clone(),
            created_by: created_by.map(OwnerDto::from),
            created_at: card.created_at.to_rfc3339(),
            updated_at: card.updated_at.to_rfc3339(),
        }
    }
}

impl From<&ResolvedCard> for CardDto {
    fn from(resolved: &ResolvedCard) -> Self {
        Self::from_parts(&resolved.card, resolved.created_by.as_ref())
    }
}

/// One deck entry with its card expanded
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckEntryDto {
    /// Null when the card was deleted from the catalog
    pub card: Option<CardDto>,
    pub quantity: i16,
}

impl From<&ResolvedEntry> for DeckEntryDto {
    fn from(entry: &ResolvedEntry) -> Self {
        Self {
            card: entry
                .card
                .as_ref()
                .map(|card| CardDto::from_parts(card, None)),
            quantity: entry.quantity,
        }
    }
}

/// Deck view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cards: Vec<DeckEntryDto>,
    /// Null when the owner no longer resolves
    pub owner: Option<OwnerDto>,
    pub is_public: bool,
    pub likes: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&ResolvedDeck> for DeckDto {
    fn from(resolved: &ResolvedDeck) -> Self {
        Self {
            id: resolved.deck.deck_id.to_string(),
            name: resolved.deck.name.clone(),
            description: resolved.deck.description.clone(),
            cards: resolved.entries.iter().map(DeckEntryDto::from).collect(),
            owner: resolved.owner.as_ref().map(OwnerDto::from),
            is_public: resolved.deck.is_public,
            likes: resolved.deck.likes,
            created_at: resolved.deck.created_at.to_rfc3339(),
            updated_at: resolved.deck.updated_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// Envelopes
// ============================================================================

/// Single card envelope
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub card: CardDto,
}

/// Card list envelope
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardsResponse {
    pub success: bool,
    pub count: usize,
    pub cards: Vec<CardDto>,
}

/// Single deck envelope
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub deck: DeckDto,
}

/// Deck list envelope
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecksResponse {
    pub success: bool,
    pub count: usize,
    pub decks: Vec<DeckDto>,
}

/// Envelope for responses with no resource body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

// ============================================================================
// Card requests
// ============================================================================

/// Create card request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub image: Option<String>,
    pub rarity: Option<String>,
    #[serde(rename = "type")]
    pub card_type: Option<String>,
    pub attack: Option<i32>,
    pub defense: Option<i32>,
    pub cost: Option<i32>,
    #[serde(default)]
    pub abilities: Vec<String>,
}

impl CreateCardRequest {
    /// Parse enum and required fields, collecting every violation
    pub fn into_new_card(self) -> Result<NewCard, Vec<String>> {
        let mut violations = Vec::new();

        let rarity = match self.rarity.as_deref() {
            None => None,
            Some(code) => match Rarity::parse(code) {
                Some(rarity) => Some(rarity),
                None => {
                    violations.push(format!("rarity '{code}' is not recognized"));
                    None
                }
            },
        };

        let card_type = match self.card_type.as_deref() {
            None => {
                violations.push("type is required".to_string());
                None
            }
            Some(code) => match CardType::parse(code) {
                Some(card_type) => Some(card_type),
                None => {
                    violations.push(format!("type '{code}' is not recognized"));
                    None
                }
            },
        };

        if self.cost.is_none() {
            violations.push("cost is required".to_string());
        }

        match (card_type, self.cost) {
            (Some(card_type), Some(cost)) if violations.is_empty() => Ok(NewCard {
                name: self.name,
                description: self.description,
                image: self.image,
                rarity,
                card_type,
                attack: self.attack,
                defense: self.defense,
                cost,
                abilities: self.abilities,
            }),
            _ => Err(violations),
        }
    }
}

/// Update card request; absent fields stay untouched
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCardRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub rarity: Option<String>,
    #[serde(rename = "type")]
    pub card_type: Option<String>,
    pub attack: Option<i32>,
    pub defense: Option<i32>,
    pub cost: Option<i32>,
    pub abilities: Option<Vec<String>>,
}

impl UpdateCardRequest {
    pub fn into_patch(self) -> Result<CardPatch, Vec<String>> {
        let mut violations = Vec::new();

        let rarity = match self.rarity.as_deref() {
            None => None,
            Some(code) => match Rarity::parse(code) {
                Some(rarity) => Some(rarity),
                None => {
                    violations.push(format!("rarity '{code}' is not recognized"));
                    None
                }
            },
        };

        let card_type = match self.card_type.as_deref() {
            None => None,
            Some(code) => match CardType::parse(code) {
                Some(card_type) => Some(card_type),
                None => {
                    violations.push(format!("type '{code}' is not recognized"));
                    None
                }
            },
        };

        if !violations.is_empty() {
            return Err(violations);
        }

        Ok(CardPatch {
            name: self.name,
            description: self.description,
            image: self.image,
            rarity,
            card_type,
            attack: self.attack,
            defense: self.defense,
            cost: self.cost,
            abilities: self.abilities,
        })
    }
}

/// Card listing query parameters
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CardListQuery {
    pub rarity: Option<String>,
    #[serde(rename = "type")]
    pub card_type: Option<String>,
    pub search: Option<String>,
}

// ============================================================================
// Deck requests
// ============================================================================

/// Create deck request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeckRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub is_public: Option<bool>,
}

impl From<CreateDeckRequest> for NewDeck {
    fn from(req: CreateDeckRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            is_public: req.is_public,
        }
    }
}

/// Update deck request; absent fields stay untouched
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeckRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_public: Option<bool>,
}

impl From<UpdateDeckRequest> for DeckPatch {
    fn from(req: UpdateDeckRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            is_public: req.is_public,
        }
    }
}

/// Add card to deck request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCardRequest {
    pub card_id: Uuid,
    /// Copies to add, defaults to one
    #[serde(default = "default_quantity")]
    pub quantity: i16,
}

fn default_quantity() -> i16 {
    1
}

//! Domain Entities

pub mod card;
pub mod deck;

pub use card::{Card, CardPatch, DEFAULT_CARD_IMAGE, NewCard};
pub use deck::{Deck, DeckEntry, DeckPatch, MAX_COPIES, NewDeck};

//! Application Layer
//!
//! Use cases composing domain entities with repositories.

pub mod deck_composition;
pub mod mutate_card;
pub mod mutate_deck;
pub mod query_cards;
pub mod query_decks;
pub mod resolver;

pub use deck_composition::{AddCardToDeckUseCase, RemoveCardFromDeckUseCase};
pub use mutate_card::{CreateCardUseCase, DeleteCardUseCase, UpdateCardUseCase};
pub use mutate_deck::{
    CreateDeckUseCase, DeleteDeckUseCase, MAX_WRITE_ATTEMPTS, UpdateDeckUseCase,
};
pub use query_cards::{GetCardUseCase, ListCardsUseCase};
pub use query_decks::{GetDeckUseCase, ListMyDecksUseCase, ListPublicDecksUseCase};
pub use resolver::{ResolvedCard, ResolvedDeck, ResolvedEntry, Resolver};

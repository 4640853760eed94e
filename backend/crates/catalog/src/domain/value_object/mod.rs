//! Value Objects

pub mod card_type;
pub mod rarity;

pub use card_type::CardType;
pub use rarity::Rarity;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Card rarity tier
///
/// Stored as its lowercase code; unrecognized input is a validation
/// failure, never a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    #[inline]
    pub const fn code(&self) -> &'static str {
        use Rarity::*;
        match self {
            Common => "common",
            Uncommon => "uncommon",
            Rare => "rare",
            Epic => "epic",
            Legendary => "legendary",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        use Rarity::*;
        match code {
            "common" => Some(Common),
            "uncommon" => Some(Uncommon),
            "rare" => Some(Rare),
            "epic" => Some(Epic),
            "legendary" => Some(Legendary),
            _ => None,
        }
    }

    /// Decode a stored value
    pub fn from_code(code: &str) -> Self {
        match Self::parse(code) {
            Some(rarity) => rarity,
            None => {
                tracing::error!("Invalid Rarity code: {}", code);
                unreachable!("Invalid Rarity code: {}", code)
            }
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

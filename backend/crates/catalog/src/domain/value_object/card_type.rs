use serde::{Deserialize, Serialize};
use std::fmt;

/// Card type
///
/// Required on every card; there is no default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Creature,
    Spell,
    Artifact,
    Enchantment,
}

impl CardType {
    pub const ALL: [CardType; 4] = [
        CardType::Creature,
        CardType::Spell,
        CardType::Artifact,
        CardType::Enchantment,
    ];

    #[inline]
    pub const fn code(&self) -> &'static str {
        use CardType::*;
        match self {
            Creature => "creature",
            Spell => "spell",
            Artifact => "artifact",
            Enchantment => "enchantment",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        use CardType::*;
        match code {
            "creature" => Some(Creature),
            "spell" => Some(Spell),
            "artifact" => Some(Artifact),
            "enchantment" => Some(Enchantment),
            _ => None,
        }
    }

    /// Decode a stored value
    pub fn from_code(code: &str) -> Self {
        match Self::parse(code) {
            Some(card_type) => card_type,
            None => {
                tracing::error!("Invalid CardType code: {}", code);
                unreachable!("Invalid CardType code: {}", code)
            }
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_codes() {
        for card_type in CardType::ALL {
            assert_eq!(CardType::parse(card_type.code()), Some(card_type));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(CardType::parse("land"), None);
        assert_eq!(CardType::parse("Spell"), None);
    }
}

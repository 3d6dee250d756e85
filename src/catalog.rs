//! The fixed emoji catalog every round draws from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbols available to the game, in catalog order.
pub const SYMBOLS: [&str; CATALOG_SIZE] = [
    "🍌", "🍎", "🍓", "🍉", "🍇", "🍒", "🍍", "🍑", "🍋", "🍬", "🍫", "🥝", "🫐", "🍊", "🍈", "🍏",
    "❤️", "💎",
];

pub const CATALOG_SIZE: usize = 18;

/// One catalog entry. Only identity matters; the symbol is for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Emoji(u8);

impl Emoji {
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CATALOG_SIZE).then(|| Emoji(index as u8))
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        SYMBOLS
            .iter()
            .position(|s| *s == symbol)
            .and_then(Self::from_index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn symbol(self) -> &'static str {
        SYMBOLS[self.index()]
    }
}

impl fmt::Display for Emoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl TryFrom<u8> for Emoji {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Emoji::from_index(value as usize).ok_or_else(|| format!("emoji index {} out of range", value))
    }
}

impl From<Emoji> for u8 {
    fn from(e: Emoji) -> u8 {
        e.0
    }
}

/// The whole catalog as emojis, in catalog order.
pub fn all() -> Vec<Emoji> {
    (0..CATALOG_SIZE as u8).map(Emoji).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_symbols_are_distinct() {
        let set: HashSet<&str> = SYMBOLS.iter().copied().collect();
        assert_eq!(set.len(), CATALOG_SIZE);
    }

    #[test]
    fn symbol_lookup_matches_index() {
        let diamond = Emoji::from_symbol("💎").unwrap();
        assert_eq!(diamond.index(), 17);
        assert_eq!(diamond.to_string(), "💎");
        assert!(Emoji::from_symbol("🚨").is_none());
        assert!(Emoji::from_index(CATALOG_SIZE).is_none());
    }

    #[test]
    fn deserialize_rejects_out_of_range_index() {
        assert!(serde_json::from_str::<Emoji>("18").is_err());
        assert_eq!(serde_json::from_str::<Emoji>("3").unwrap().symbol(), "🍉");
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CardError {
    #[error("invalid card type: {0}")]
    InvalidCardType(String),
}

/// The ten card kinds of the base Sushi Go deck.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Card {
    Maki1,
    Maki2,
    Maki3,
    Tempura,
    Sashimi,
    Dumpling,
    SquidNigiri,
    SalmonNigiri,
    EggNigiri,
    Wasabi,
}

impl Card {
    pub const ALL: [Card; 10] = [
        Card::Maki1,
        Card::Maki2,
        Card::Maki3,
        Card::Tempura,
        Card::Sashimi,
        Card::Dumpling,
        Card::SquidNigiri,
        Card::SalmonNigiri,
        Card::EggNigiri,
        Card::Wasabi,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Card::Maki1 => "maki_1",
            Card::Maki2 => "maki_2",
            Card::Maki3 => "maki_3",
            Card::Tempura => "tempura",
            Card::Sashimi => "sashimi",
            Card::Dumpling => "dumpling",
            Card::SquidNigiri => "squid_nigiri",
            Card::SalmonNigiri => "salmon_nigiri",
            Card::EggNigiri => "egg_nigiri",
            Card::Wasabi => "wasabi",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Card::Maki1 => "Maki 1",
            Card::Maki2 => "Maki 2",
            Card::Maki3 => "Maki 3",
            Card::Tempura => "Tempura",
            Card::Sashimi => "Sashimi",
            Card::Dumpling => "Dumpling",
            Card::SquidNigiri => "Squid Nigiri",
            Card::SalmonNigiri => "Salmon Nigiri",
            Card::EggNigiri => "Egg Nigiri",
            Card::Wasabi => "Wasabi",
        }
    }

    /// Score of the card in isolation, before any combination bonus.
    pub fn base_value(self) -> i64 {
        match self {
            Card::Maki1 => 1,
            Card::Maki2 => 2,
            Card::Maki3 => 3,
            Card::Tempura => 5,
            Card::Sashimi => 10,
            Card::Dumpling => 1,
            Card::SquidNigiri => 3,
            Card::SalmonNigiri => 2,
            Card::EggNigiri => 1,
            Card::Wasabi => 0,
        }
    }

    pub fn is_nigiri(self) -> bool {
        matches!(
            self,
            Card::SquidNigiri | Card::SalmonNigiri | Card::EggNigiri
        )
    }

    pub fn is_maki(self) -> bool {
        matches!(self, Card::Maki1 | Card::Maki2 | Card::Maki3)
    }

    /// Roll count printed on the card, if it is a maki card.
    pub fn maki_rolls(self) -> Option<i64> {
        match self {
            Card::Maki1 => Some(1),
            Card::Maki2 => Some(2),
            Card::Maki3 => Some(3),
            _ => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Card::ALL
            .iter()
            .copied()
            .find(|card| card.id() == value || card.display_name() == value)
            .ok_or_else(|| CardError::InvalidCardType(value.to_string()))
    }
}

/// Set value of `count` dumplings: 1, 3, 6, 10, then 15 for five or more.
pub fn dumpling_score(count: usize) -> i64 {
    match count {
        0 => 0,
        1 => 1,
        2 => 3,
        3 => 6,
        4 => 10,
        _ => 15,
    }
}

use crate::{Card, RngState};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("not enough cards in the deck: requested {requested}, available {available}")]
    InsufficientSupply { requested: usize, available: usize },
    #[error("cannot deal zero cards")]
    EmptyDeal,
}

#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub draw: Vec<Card>,
}

impl Deck {
    /// Full 94-card Sushi Go distribution, unshuffled.
    pub fn sushi_go() -> Self {
        let counts = [
            (Card::Maki1, 6),
            (Card::Maki2, 12),
            (Card::Maki3, 8),
            (Card::Tempura, 14),
            (Card::Sashimi, 14),
            (Card::Dumpling, 14),
            (Card::SquidNigiri, 10),
            (Card::SalmonNigiri, 5),
            (Card::EggNigiri, 5),
            (Card::Wasabi, 6),
        ];
        let mut draw = Vec::with_capacity(counts.iter().map(|(_, n)| *n).sum());
        for (card, count) in counts {
            draw.extend(std::iter::repeat(card).take(count));
        }
        Self { draw }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.draw);
    }

    pub fn remaining(&self) -> usize {
        self.draw.len()
    }

    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        if count == 0 {
            return Err(DeckError::EmptyDeal);
        }
        if count > self.draw.len() {
            return Err(DeckError::InsufficientSupply {
                requested: count,
                available: self.draw.len(),
            });
        }
        let split = self.draw.len() - count;
        Ok(self.draw.split_off(split))
    }
}

use crate::{
    score_table_breakdown, Card, Deck, DeckError, Event, EventBus, ScoreBreakdown, ScoreRules,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid player index: {0}")]
    InvalidPlayer(usize),
    #[error("card not in hand: {0}")]
    CardNotInHand(Card),
    #[error("deck error: {0}")]
    Deck(#[from] DeckError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    pub hand: Vec<Card>,
    pub table: Vec<Card>,
    pub total_score: i64,
}

impl PlayerState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            table: Vec::new(),
            total_score: 0,
        }
    }
}

/// Per-round scoring outcome, in seat order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub round: u32,
    pub breakdowns: Vec<ScoreBreakdown>,
    /// Seat of the round winner; `None` on a tie.
    pub winner: Option<usize>,
}

/// Hands, tables and cumulative scores for one game. All hand/table mutation
/// goes through here; scoring and card selection stay pure functions over
/// slices borrowed from this state.
#[derive(Debug)]
pub struct GameState {
    pub players: Vec<PlayerState>,
    pub round: u32,
    pub turn: u32,
    pub events: EventBus,
}

impl GameState {
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            players: names.into_iter().map(PlayerState::new).collect(),
            round: 0,
            turn: 0,
            events: EventBus::default(),
        }
    }

    pub fn player(&self, seat: usize) -> Result<&PlayerState, GameError> {
        self.players.get(seat).ok_or(GameError::InvalidPlayer(seat))
    }

    /// Starts the next round: fresh hands from the deck, empty tables.
    pub fn deal_round(&mut self, deck: &mut Deck, hand_size: usize) -> Result<(), GameError> {
        self.round += 1;
        self.turn = 0;
        self.events.push(Event::RoundStarted {
            round: self.round,
            hand_size,
        });
        for player in &mut self.players {
            player.hand = deck.deal(hand_size)?;
            player.table.clear();
            self.events.push(Event::CardsDealt {
                player: player.name.clone(),
                count: hand_size,
            });
        }
        Ok(())
    }

    /// Moves `card` from the player's hand to their table.
    pub fn play(&mut self, seat: usize, card: Card) -> Result<(), GameError> {
        let turn = self.turn;
        let player = self
            .players
            .get_mut(seat)
            .ok_or(GameError::InvalidPlayer(seat))?;
        let position = player
            .hand
            .iter()
            .position(|&held| held == card)
            .ok_or(GameError::CardNotInHand(card))?;
        player.hand.remove(position);
        player.table.push(card);
        self.events.push(Event::CardPlayed {
            player: player.name.clone(),
            card,
            turn,
        });
        Ok(())
    }

    /// Passes every hand one seat to the left. With two players this is the
    /// original's straight swap.
    pub fn switch_hands(&mut self) {
        if self.players.len() > 1 {
            let last = self.players.len() - 1;
            for seat in 0..last {
                let (left, right) = self.players.split_at_mut(seat + 1);
                std::mem::swap(&mut left[seat].hand, &mut right[0].hand);
            }
        }
        self.turn += 1;
        self.events.push(Event::HandsSwitched {
            round: self.round,
            turn: self.turn,
        });
    }

    pub fn hands_empty(&self) -> bool {
        self.players.iter().all(|player| player.hand.is_empty())
    }

    /// Scores every table, folds the results into the cumulative totals and
    /// resets the tables for the next round.
    pub fn score_round(&mut self, rules: &ScoreRules) -> RoundOutcome {
        let mut breakdowns = Vec::with_capacity(self.players.len());
        for player in &mut self.players {
            let breakdown = score_table_breakdown(&player.table, None, rules);
            player.total_score += breakdown.total;
            player.table.clear();
            self.events.push(Event::RoundScored {
                player: player.name.clone(),
                breakdown,
                total_score: player.total_score,
            });
            breakdowns.push(breakdown);
        }
        let winner = unique_max_index(breakdowns.iter().map(|b| b.total));
        self.events.push(Event::RoundWon {
            round: self.round,
            winner: winner.map(|seat| self.players[seat].name.clone()),
        });
        RoundOutcome {
            round: self.round,
            breakdowns,
            winner,
        }
    }

    /// Seat with the highest cumulative total; `None` on a tie.
    pub fn overall_winner(&self) -> Option<usize> {
        unique_max_index(self.players.iter().map(|player| player.total_score))
    }
}

fn unique_max_index(values: impl Iterator<Item = i64>) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    let mut tied = false;
    for (index, value) in values.enumerate() {
        match best {
            Some((_, max)) if value > max => {
                best = Some((index, value));
                tied = false;
            }
            Some((_, max)) if value == max => tied = true,
            None => best = Some((index, value)),
            _ => {}
        }
    }
    match (best, tied) {
        (Some((index, _)), false) => Some(index),
        _ => None,
    }
}

use crate::{Card, ScoreBreakdown};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    RoundStarted {
        round: u32,
        hand_size: usize,
    },
    CardsDealt {
        player: String,
        count: usize,
    },
    CardPlayed {
        player: String,
        card: Card,
        turn: u32,
    },
    HandsSwitched {
        round: u32,
        turn: u32,
    },
    RoundScored {
        player: String,
        breakdown: ScoreBreakdown,
        total_score: i64,
    },
    RoundWon {
        round: u32,
        winner: Option<String>,
    },
    GameFinished {
        winner: Option<String>,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

use crate::AutoplayError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use sushigo_core::{Card, MakiRule, ScoreBreakdown};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TurnRecord {
    pub round: u32,
    pub turn: u32,
    pub player: String,
    pub card: Card,
    pub selection_weight: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoundRecord {
    pub round: u32,
    pub breakdowns: Vec<ScoreBreakdown>,
    pub winner: Option<String>,
}

/// Replayable record of one simulated game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameRecord {
    pub seed: u64,
    pub maki_rule: MakiRule,
    pub players: Vec<String>,
    pub hand_size: usize,
    pub turns: Vec<TurnRecord>,
    pub rounds: Vec<RoundRecord>,
    pub totals: Vec<i64>,
    pub winner: Option<String>,
}

impl GameRecord {
    pub fn write_json(&self, path: &Path) -> Result<(), AutoplayError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_string_pretty(self)?;
        fs::write(path, body)?;
        Ok(())
    }

    pub fn read_json(path: &Path) -> Result<Self, AutoplayError> {
        let body = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&body)?)
    }
}

use crate::{dumpling_score, Card};
use serde::{Deserialize, Serialize};

/// How maki rolls are turned into points at round end.
///
/// The per-card scheme values every maki card at its printed roll count.
/// The leaderboard scheme ranks the table's maki cards by roll value and
/// awards 6 for an uncontested first place (3 each on a tie) and 3 for an
/// uncontested second place (1 on a tie).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum MakiRule {
    #[default]
    PerCard,
    Leaderboard,
}

impl MakiRule {
    pub fn id(self) -> &'static str {
        match self {
            MakiRule::PerCard => "per_card",
            MakiRule::Leaderboard => "leaderboard",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreRules {
    pub maki: MakiRule,
}

/// Per-category totals for one scored table.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub maki: i64,
    pub nigiri: i64,
    pub tempura: i64,
    pub sashimi: i64,
    pub dumpling: i64,
    pub total: i64,
}

/// Scores a finished table. `extra` lets callers score a card that has not
/// been appended to the table yet; `Some(card)` behaves exactly as if the
/// card were the last element of `cards`.
pub fn score_table(cards: &[Card], extra: Option<Card>, rules: &ScoreRules) -> i64 {
    score_table_breakdown(cards, extra, rules).total
}

pub fn score_table_breakdown(
    cards: &[Card],
    extra: Option<Card>,
    rules: &ScoreRules,
) -> ScoreBreakdown {
    let all = cards.iter().copied().chain(extra);

    let mut maki_values = Vec::new();
    let mut nigiri_sum = 0;
    let mut highest_nigiri = 0;
    let mut has_wasabi = false;
    let mut tempura_count = 0;
    let mut sashimi_count = 0;
    let mut dumpling_count = 0;

    for card in all {
        match card {
            Card::Maki1 | Card::Maki2 | Card::Maki3 => {
                maki_values.push(card.base_value());
            }
            Card::SquidNigiri | Card::SalmonNigiri | Card::EggNigiri => {
                nigiri_sum += card.base_value();
                highest_nigiri = highest_nigiri.max(card.base_value());
            }
            Card::Wasabi => has_wasabi = true,
            Card::Tempura => tempura_count += 1,
            Card::Sashimi => sashimi_count += 1,
            Card::Dumpling => dumpling_count += 1,
        }
    }

    // One wasabi bonus at most, on the single best nigiri.
    let nigiri = if has_wasabi {
        nigiri_sum + highest_nigiri * 3
    } else {
        nigiri_sum
    };

    let breakdown = ScoreBreakdown {
        maki: maki_score(&maki_values, rules.maki),
        nigiri,
        tempura: (tempura_count / 2) * 5,
        sashimi: (sashimi_count / 3) * 10,
        dumpling: dumpling_score(dumpling_count),
        total: 0,
    };
    ScoreBreakdown {
        total: breakdown.maki
            + breakdown.nigiri
            + breakdown.tempura
            + breakdown.sashimi
            + breakdown.dumpling,
        ..breakdown
    }
}

fn maki_score(values: &[i64], rule: MakiRule) -> i64 {
    match rule {
        MakiRule::PerCard => values.iter().sum(),
        MakiRule::Leaderboard => maki_leaderboard_score(values),
    }
}

fn maki_leaderboard_score(values: &[i64]) -> i64 {
    let Some(&first) = values.iter().max() else {
        return 0;
    };
    let first_holders = values.iter().filter(|&&v| v == first).count();
    let mut score = if first_holders == 1 { 6 } else { 3 };

    let rest: Vec<i64> = values.iter().copied().filter(|&v| v != first).collect();
    if let Some(&second) = rest.iter().max() {
        let second_holders = rest.iter().filter(|&&v| v == second).count();
        score += if second_holders == 1 { 3 } else { 1 };
    }
    score
}

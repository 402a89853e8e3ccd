use crate::AutoplayError;
use sushigo_core::{dumpling_score, Card};

/// Every score figure a candidate could realize by being played now: its
/// base value first, then one alternative per combination it could start or
/// complete against the table. Maki candidates have no alternatives.
pub fn possible_scores(candidate: Card, table: &[Card]) -> Vec<i64> {
    let mut scores = vec![candidate.base_value()];
    match candidate {
        Card::SquidNigiri | Card::SalmonNigiri | Card::EggNigiri => {
            if table.contains(&Card::Wasabi) {
                scores.push(candidate.base_value() * 3);
            }
        }
        Card::Wasabi => {
            // Retroactive bonus: one figure per nigiri already down.
            for played in table.iter().filter(|card| card.is_nigiri()) {
                scores.push(played.base_value() * 3);
            }
        }
        Card::Tempura => {
            let completes_pair = table.contains(&Card::Tempura);
            scores.push(if completes_pair { 5 } else { 0 });
        }
        Card::Sashimi => {
            let on_table = table.iter().filter(|&&card| card == Card::Sashimi).count();
            scores.push(if on_table >= 2 { 10 } else { 0 });
        }
        Card::Dumpling => {
            let on_table = table.iter().filter(|&&card| card == Card::Dumpling).count();
            scores.push(dumpling_score(on_table));
        }
        Card::Maki1 | Card::Maki2 | Card::Maki3 => {}
    }
    scores
}

/// Weight used to rank a candidate: the best single figure it could realize.
pub fn selection_weight(candidate: Card, table: &[Card]) -> i64 {
    possible_scores(candidate, table)
        .into_iter()
        .max()
        .unwrap_or(0)
}

/// Picks the hand card with the highest selection weight against `table`.
/// Ties go to the earliest card in hand order. Neither input is mutated;
/// removing the chosen card from the hand is the caller's move.
pub fn select_best_card(hand: &[Card], table: &[Card]) -> Result<Card, AutoplayError> {
    let mut best: Option<(Card, i64)> = None;
    for &candidate in hand {
        let weight = selection_weight(candidate, table);
        match best {
            Some((_, max)) if weight <= max => {}
            _ => best = Some((candidate, weight)),
        }
    }
    best.map(|(card, _)| card).ok_or(AutoplayError::EmptyHand)
}

/// Opening move: ignores the (empty) table and takes the highest base value.
pub fn select_max_base_card(hand: &[Card]) -> Result<Card, AutoplayError> {
    let mut best: Option<(Card, i64)> = None;
    for &candidate in hand {
        let value = candidate.base_value();
        match best {
            Some((_, max)) if value <= max => {}
            _ => best = Some((candidate, value)),
        }
    }
    best.map(|(card, _)| card).ok_or(AutoplayError::EmptyHand)
}

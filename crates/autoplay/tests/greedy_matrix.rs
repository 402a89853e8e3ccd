use sushigo_autoplay::{possible_scores, select_best_card, selection_weight, AutoplayError};
use sushigo_core::Card::{self, *};

macro_rules! weight_case {
    ($name:ident, $candidate:expr, $table:expr, $expected:expr) => {
        #[test]
        fn $name() {
            assert_eq!(selection_weight($candidate, &$table), $expected);
        }
    };
}

// Nigiri candidates against wasabi already on the table.
weight_case!(squid_on_bare_table, SquidNigiri, [], 3);
weight_case!(squid_with_wasabi_down, SquidNigiri, [Wasabi], 9);
weight_case!(egg_with_wasabi_down, EggNigiri, [Wasabi, Tempura], 3);

// Wasabi candidate picks up the best nigiri already down.
weight_case!(wasabi_on_bare_table, Wasabi, [], 0);
weight_case!(wasabi_with_salmon_down, Wasabi, [SalmonNigiri], 6);
weight_case!(
    wasabi_takes_best_table_nigiri,
    Wasabi,
    [EggNigiri, SquidNigiri, SalmonNigiri],
    9
);

// Set-completion signals.
weight_case!(tempura_without_partner, Tempura, [Sashimi], 5);
weight_case!(tempura_completing_pair, Tempura, [Tempura], 5);
weight_case!(sashimi_no_signal_below_two, Sashimi, [Sashimi], 10);
weight_case!(
    sashimi_completing_triple,
    Sashimi,
    [Sashimi, Sashimi],
    10
);

// Dumpling marginal lookup.
weight_case!(first_dumpling, Dumpling, [], 1);
weight_case!(second_dumpling, Dumpling, [Dumpling], 1);
weight_case!(
    fifth_dumpling,
    Dumpling,
    [Dumpling, Dumpling, Dumpling, Dumpling],
    10
);

// Maki candidates never pick up alternatives.
weight_case!(maki_ignores_table, Maki3, [Wasabi, Tempura, Sashimi], 3);

macro_rules! select_case {
    ($name:ident, $hand:expr, $table:expr, $expected:expr) => {
        #[test]
        fn $name() {
            assert_eq!(select_best_card(&$hand, &$table).unwrap(), $expected);
        }
    };
}

// Base-value ranking when no combination applies.
select_case!(
    squid_beats_salmon_and_idle_wasabi,
    [SquidNigiri, Wasabi, SalmonNigiri],
    [Tempura, Sashimi],
    SquidNigiri
);
// Wasabi's retroactive figure beats its zero base value.
select_case!(
    wasabi_chases_table_squid,
    [Wasabi],
    [SquidNigiri, SalmonNigiri],
    Wasabi
);
select_case!(
    wasabi_bonus_outranks_plain_nigiri,
    [EggNigiri, Wasabi],
    [SquidNigiri],
    Wasabi
);
// Pair completion outranks a lone high base value.
select_case!(
    tempura_pair_beats_salmon,
    [SalmonNigiri, Tempura],
    [Tempura],
    Tempura
);
// First-encountered card wins exact ties.
select_case!(
    tie_goes_to_hand_order,
    [EggNigiri, Dumpling],
    [],
    EggNigiri
);
select_case!(
    sashimi_triple_wins,
    [Maki3, Sashimi, SquidNigiri],
    [Sashimi, Sashimi],
    Sashimi
);

#[test]
fn empty_hand_fails() {
    assert!(matches!(
        select_best_card(&[], &[Tempura, Wasabi]),
        Err(AutoplayError::EmptyHand)
    ));
}

#[test]
fn selection_does_not_mutate_inputs() {
    let hand = vec![SquidNigiri, Wasabi, SalmonNigiri];
    let table = vec![Wasabi, Tempura];
    let hand_before = hand.clone();
    let table_before = table.clone();
    select_best_card(&hand, &table).unwrap();
    assert_eq!(hand, hand_before);
    assert_eq!(table, table_before);
}

#[test]
fn possible_scores_lists_every_table_nigiri_for_wasabi() {
    let figures = possible_scores(Wasabi, &[SquidNigiri, EggNigiri, Tempura]);
    assert_eq!(figures, vec![0, 9, 3]);
}

#[test]
fn weight_is_max_of_figures_not_sum() {
    // Squid with wasabi down: figures are [3, 9], weight must be 9 not 12.
    let figures = possible_scores(SquidNigiri, &[Wasabi]);
    assert_eq!(figures, vec![3, 9]);
    assert_eq!(selection_weight(SquidNigiri, &[Wasabi]), 9);
}

#[test]
fn every_card_selects_itself_from_singleton_hand() {
    for card in Card::ALL {
        assert_eq!(select_best_card(&[card], &[]).unwrap(), card);
    }
}

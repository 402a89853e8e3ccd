use std::path::PathBuf;
use sushigo_autoplay::{
    select_best_card, select_max_base_card, selection_weight, GameRecord, RoundRecord, TurnRecord,
};
use sushigo_core::{Deck, Event, GameState, MakiRule, RngState, ScoreRules};

#[derive(Debug, Clone)]
struct CliOptions {
    seed: Option<u64>,
    rounds: u32,
    hand_size: usize,
    players: usize,
    maki_rule: MakiRule,
    trace: Option<PathBuf>,
    quiet: bool,
    help: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            seed: None,
            rounds: 3,
            hand_size: 9,
            players: 2,
            maki_rule: MakiRule::PerCard,
            trace: None,
            quiet: false,
            help: false,
        }
    }
}

const USAGE: &str = "\
sushigo-cli: simulate a game of Sushi Go between greedy players

Options:
  --seed <u64>         deck shuffle seed (random when omitted)
  --rounds <n>         rounds to play (default 3)
  --hand-size <n>      cards dealt per player per round (default 9)
  --players <n>        number of players (default 2)
  --maki-rule <rule>   per-card | leaderboard (default per-card)
  --trace <path>       write a JSON game record
  --quiet              suppress turn-by-turn output
  --help               show this text
";

fn parse_cli_options(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--quiet" => options.quiet = true,
            "--help" | "-h" => options.help = true,
            "--seed" => {
                options.seed = Some(parse_value(args, &mut idx, "--seed")?);
            }
            "--rounds" => {
                options.rounds = parse_value(args, &mut idx, "--rounds")?;
            }
            "--hand-size" => {
                options.hand_size = parse_value(args, &mut idx, "--hand-size")?;
            }
            "--players" => {
                options.players = parse_value(args, &mut idx, "--players")?;
            }
            "--maki-rule" => {
                let value: String = parse_value(args, &mut idx, "--maki-rule")?;
                options.maki_rule = match value.as_str() {
                    "per-card" | "per_card" => MakiRule::PerCard,
                    "leaderboard" => MakiRule::Leaderboard,
                    other => return Err(format!("unknown maki rule: {other}")),
                };
            }
            "--trace" => {
                let value: String = parse_value(args, &mut idx, "--trace")?;
                options.trace = Some(PathBuf::from(value));
            }
            other => return Err(format!("unknown option: {other}")),
        }
        idx += 1;
    }
    if options.players < 2 {
        return Err("at least two players are required".to_string());
    }
    Ok(options)
}

fn parse_value<T: std::str::FromStr>(
    args: &[String],
    idx: &mut usize,
    flag: &str,
) -> Result<T, String> {
    let value = args
        .get(*idx + 1)
        .ok_or_else(|| format!("{flag} needs a value"))?;
    *idx += 1;
    value
        .parse::<T>()
        .map_err(|_| format!("invalid value for {flag}: {value}"))
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_cli_options(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("argument error: {err}");
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };
    if options.help {
        println!("{USAGE}");
        return;
    }
    if let Err(err) = run_game(&options) {
        eprintln!("game error: {err}");
        std::process::exit(1);
    }
}

fn run_game(options: &CliOptions) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = match options.seed {
        Some(seed) => RngState::from_seed(seed),
        None => RngState::from_entropy(),
    };
    let rules = ScoreRules {
        maki: options.maki_rule,
    };
    let names: Vec<String> = (1..=options.players)
        .map(|seat| format!("Player {seat}"))
        .collect();
    let mut state = GameState::new(names.clone());
    let mut deck = Deck::sushi_go();
    deck.shuffle(&mut rng);

    let mut record = GameRecord {
        seed: rng.seed(),
        maki_rule: options.maki_rule,
        players: names,
        hand_size: options.hand_size,
        turns: Vec::new(),
        rounds: Vec::new(),
        totals: Vec::new(),
        winner: None,
    };

    if !options.quiet {
        println!("Sushi Go! seed {}", rng.seed());
    }

    for _ in 0..options.rounds {
        state.deal_round(&mut deck, options.hand_size)?;

        // Opening turn has an empty table, so only base values matter.
        for seat in 0..state.players.len() {
            let card = select_max_base_card(&state.player(seat)?.hand)?;
            record.turns.push(TurnRecord {
                round: state.round,
                turn: state.turn,
                player: state.player(seat)?.name.clone(),
                card,
                selection_weight: card.base_value(),
            });
            state.play(seat, card)?;
        }
        state.switch_hands();

        while !state.hands_empty() {
            for seat in 0..state.players.len() {
                let player = state.player(seat)?;
                let card = select_best_card(&player.hand, &player.table)?;
                record.turns.push(TurnRecord {
                    round: state.round,
                    turn: state.turn,
                    player: player.name.clone(),
                    card,
                    selection_weight: selection_weight(card, &player.table),
                });
                state.play(seat, card)?;
            }
            state.switch_hands();
        }

        let outcome = state.score_round(&rules);
        record.rounds.push(RoundRecord {
            round: outcome.round,
            breakdowns: outcome.breakdowns,
            winner: outcome.winner.map(|seat| state.players[seat].name.clone()),
        });
        flush_events(&mut state, options.quiet);
    }

    record.totals = state
        .players
        .iter()
        .map(|player| player.total_score)
        .collect();
    let winner = state.overall_winner();
    record.winner = winner.map(|seat| state.players[seat].name.clone());
    state.events.push(Event::GameFinished {
        winner: record.winner.clone(),
    });
    flush_events(&mut state, options.quiet);

    if options.quiet {
        print_summary(&state);
    }
    if let Some(path) = &options.trace {
        record.write_json(path)?;
        if !options.quiet {
            println!("trace written to {}", path.display());
        }
    }
    Ok(())
}

fn print_summary(state: &GameState) {
    for player in &state.players {
        println!("{}: {}", player.name, player.total_score);
    }
    match state.overall_winner() {
        Some(seat) => println!("Overall game winner: {}", state.players[seat].name),
        None => println!("Overall game is a tie!"),
    }
}

fn flush_events(state: &mut GameState, quiet: bool) {
    for event in state.events.drain() {
        if quiet {
            continue;
        }
        match event {
            Event::RoundStarted { round, hand_size } => {
                println!("\nRound {round} ({hand_size} cards each)");
            }
            Event::CardsDealt { player, count } => {
                println!("{player} draws {count} cards");
            }
            Event::CardPlayed { player, card, .. } => {
                println!("{player} plays: {card}");
            }
            Event::HandsSwitched { .. } => {
                println!("Switch Hands - Sushi Go!");
            }
            Event::RoundScored {
                player,
                breakdown,
                total_score,
            } => {
                println!(
                    "{player} scores {} (maki {}, nigiri {}, tempura {}, sashimi {}, dumpling {}), total {total_score}",
                    breakdown.total,
                    breakdown.maki,
                    breakdown.nigiri,
                    breakdown.tempura,
                    breakdown.sashimi,
                    breakdown.dumpling,
                );
            }
            Event::RoundWon { round, winner } => match winner {
                Some(name) => println!("{name} wins round {round}!"),
                None => println!("Round {round} is a tie!"),
            },
            Event::GameFinished { winner } => match winner {
                Some(name) => println!("\nOverall game winner: {name}"),
                None => println!("\nOverall game is a tie!"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn defaults_without_arguments() {
        let options = parse_cli_options(&[]).unwrap();
        assert_eq!(options.rounds, 3);
        assert_eq!(options.hand_size, 9);
        assert_eq!(options.players, 2);
        assert_eq!(options.maki_rule, MakiRule::PerCard);
        assert!(options.seed.is_none());
    }

    #[test]
    fn parses_full_option_set() {
        let options = parse_cli_options(&args(&[
            "--seed",
            "42",
            "--rounds",
            "2",
            "--hand-size",
            "3",
            "--maki-rule",
            "leaderboard",
            "--quiet",
        ]))
        .unwrap();
        assert_eq!(options.seed, Some(42));
        assert_eq!(options.rounds, 2);
        assert_eq!(options.hand_size, 3);
        assert_eq!(options.maki_rule, MakiRule::Leaderboard);
        assert!(options.quiet);
    }

    #[test]
    fn rejects_unknown_option_and_bad_values() {
        assert!(parse_cli_options(&args(&["--bogus"])).is_err());
        assert!(parse_cli_options(&args(&["--seed", "abc"])).is_err());
        assert!(parse_cli_options(&args(&["--maki-rule", "pudding"])).is_err());
        assert!(parse_cli_options(&args(&["--players", "1"])).is_err());
    }
}

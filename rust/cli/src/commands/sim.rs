//! Simulation command handler.
//!
//! Plays whole games without input, each on its own seed, and reports how
//! a guessing strategy scores. Game `i` (0-based) uses `seed + i`, so any
//! single game can be replayed with `play --seed`.
//!
//! # Examples
//!
//! ```no_run
//! use highlow_cli::Strategy;
//! use highlow_cli::commands::handle_sim_command;
//! use std::io;
//!
//! handle_sim_command(10, Some(42), Strategy::Likely, &mut io::stdout(), &mut io::stderr()).unwrap();
//! ```

use crate::cli::Strategy;
use crate::config;
use crate::error::CliError;
use crate::ui;
use highlow_engine::game::{GameSession, RoundState};
use highlow_engine::rules::Outcome;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::io::Write;

const OUTCOMES: [Outcome; 3] = [Outcome::Higher, Outcome::Lower, Outcome::Tie];

/// Per-game totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GameSummary {
    seed: u64,
    rounds: u32,
    correct: u32,
    bonuses: u32,
    score: u32,
}

/// Handle the sim command.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` when `games` is zero and
/// `CliError::Config` when no seed was given and the configuration is invalid.
pub fn handle_sim_command(
    games: u32,
    seed: Option<u64>,
    strategy: Strategy,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }

    let base = match seed {
        Some(s) => s,
        None => match config::load_unchecked() {
            Ok(cfg) => cfg.seed.unwrap_or_else(rand::random),
            Err(e) => {
                ui::write_error(err, &format!("Invalid configuration: {}", e))?;
                return Err(CliError::Config(e.to_string()));
            }
        },
    };

    writeln!(
        out,
        "sim: games={} seed={} strategy={}",
        games,
        base,
        strategy.as_str()
    )?;

    let mut rng = ChaCha20Rng::seed_from_u64(base);
    let mut total: u64 = 0;
    let mut best: u32 = 0;
    for i in 0..games {
        let summary = play_to_game_over(base.wrapping_add(u64::from(i)), strategy, &mut rng)?;
        writeln!(
            out,
            "Game {}: seed={} rounds={} correct={} bonuses={} score={}",
            i + 1,
            summary.seed,
            summary.rounds,
            summary.correct,
            summary.bonuses,
            summary.score
        )?;
        total += u64::from(summary.score);
        best = best.max(summary.score);
    }

    writeln!(
        out,
        "Average score: {:.1} | Best: {}",
        total as f64 / f64::from(games),
        best
    )?;
    Ok(())
}

fn play_to_game_over(
    seed: u64,
    strategy: Strategy,
    rng: &mut ChaCha20Rng,
) -> Result<GameSummary, CliError> {
    let mut game = GameSession::new(Some(seed));
    game.new_game()?;
    loop {
        game.reveal_computer_card()?;
        let guess = match strategy {
            Strategy::Likely => game.hint().most_likely(),
            Strategy::Higher => Outcome::Higher,
            Strategy::Random => OUTCOMES[rng.random_range(0..OUTCOMES.len())],
        };
        game.submit_guess(guess)?;
        if game.advance()? == RoundState::GameOver {
            break;
        }
    }

    let history = game.history();
    let summary = GameSummary {
        seed,
        rounds: history.len() as u32,
        correct: history.iter().filter(|r| r.result.correct).count() as u32,
        bonuses: history.iter().filter(|r| r.result.bonus).count() as u32,
        score: game.score(),
    };
    tracing::debug!(
        seed,
        rounds = summary.rounds,
        score = summary.score,
        "simulated game finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sim_zero_games_is_invalid() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let res = handle_sim_command(0, Some(1), Strategy::Likely, &mut out, &mut err);
        assert!(matches!(res, Err(CliError::InvalidInput(_))));
        assert!(String::from_utf8(err).unwrap().contains("games must be >= 1"));
    }

    #[test]
    fn test_every_game_runs_to_the_end_of_the_deck() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        for strategy in [Strategy::Likely, Strategy::Higher, Strategy::Random] {
            let s = play_to_game_over(9, strategy, &mut rng).unwrap();
            assert_eq!(s.rounds, 27);
            assert!(s.correct <= s.rounds);
            assert!(s.score >= s.correct * 10);
        }
    }

    #[test]
    fn test_same_seed_same_report() {
        let run = || {
            let mut out = Vec::new();
            let mut err = Vec::new();
            handle_sim_command(3, Some(42), Strategy::Random, &mut out, &mut err).unwrap();
            String::from_utf8(out).unwrap()
        };
        let first = run();
        assert_eq!(first, run());
        assert!(first.contains("Game 3: seed=44"));
    }
}

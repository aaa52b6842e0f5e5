//! # Play Command
//!
//! Interactive high-low game on a line-based terminal.
//!
//! The engine never waits on a clock, so this adapter owns the pacing: it
//! pauses `reveal_delay_ms` before turning the computer card and
//! `result_delay_ms` while a result is on screen, then advances the session.
//!
//! ## Input
//!
//! - `h`/`higher`, `l`/`lower`, `t`/`tie`: guess
//! - `hint`: show the odds for the hidden card
//! - `shuffle`: shuffle the undealt cards
//! - `help`: how to play
//! - `new`: start again after the game is over
//! - `q`/`quit` or end of input: leave

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_odds, format_result, format_shuffle, format_table};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{Intent, ParseResult, parse_intent};
use highlow_engine::game::{GameSession, RoundState};
use highlow_engine::logger::RoundLogger;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

/// Command-line overrides for `play`; unset fields fall back to the
/// resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct PlayArgs {
    pub seed: Option<u64>,
    pub log: Option<String>,
    pub reveal_delay_ms: Option<u64>,
    pub result_delay_ms: Option<u64>,
}

/// Handle the play command: one interactive session until the player quits.
///
/// Rejected actions (a guess before the computer card is up, `new` in the
/// middle of a game, ...) are reported on `err` and the session goes on.
///
/// # Examples
///
/// ```no_run
/// use highlow_cli::commands::{PlayArgs, handle_play_command};
/// use std::io::{stderr, stdin, stdout};
///
/// let args = PlayArgs { seed: Some(7), ..PlayArgs::default() };
/// handle_play_command(args, &mut stdout(), &mut stderr(), &mut stdin().lock()).unwrap();
/// ```
pub fn handle_play_command(
    args: PlayArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    // Range checks wait until the flags below have been applied
    let mut cfg = match config::load_unchecked() {
        Ok(c) => c,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(e.to_string()));
        }
    };
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    if args.log.is_some() {
        cfg.log_path = args.log;
    }
    if let Some(ms) = args.reveal_delay_ms {
        cfg.reveal_delay_ms = ms;
    }
    if let Some(ms) = args.result_delay_ms {
        cfg.result_delay_ms = ms;
    }
    if let Err(e) = config::validate(&cfg) {
        ui::write_error(err, &format!("Invalid configuration: {}", e))?;
        return Err(CliError::InvalidInput(e.to_string()));
    }

    let mut logger = match cfg.log_path.as_deref() {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    let mut game = GameSession::new(cfg.seed);
    writeln!(out, "highlow: seed={}", game.seed())?;
    game.new_game()?;
    tracing::debug!(seed = game.seed(), "play session started");

    loop {
        if game.round_state() == RoundState::Dealing {
            pause(cfg.reveal_delay_ms);
            game.reveal_computer_card()?;
            writeln!(out, "{}", format_table(&game.state()))?;
        }

        let text = if game.round_state() == RoundState::GameOver {
            "Play again? [new/q]: "
        } else {
            "Your guess [h/l/t, hint, shuffle, help, q]: "
        };
        ui::prompt(out, text)?;

        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            break;
        };
        let intent = match parse_intent(&line) {
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
            ParseResult::Intent(intent) => intent,
        };

        match intent {
            Intent::Guess(guess) => match game.submit_guess(guess) {
                Ok(result) => {
                    writeln!(out, "{}", format_table(&game.state()))?;
                    writeln!(out, "{}", format_result(&result))?;
                    if let (Some(logger), Some(record)) = (logger.as_mut(), game.history().last())
                    {
                        logger.write(record)?;
                    }
                    pause(cfg.result_delay_ms);
                    if game.advance()? == RoundState::GameOver {
                        writeln!(out, "Congratulations! Final Score: {}", game.score())?;
                        writeln!(out, "Type 'new' to play again or 'q' to quit")?;
                    }
                }
                Err(e) => ui::write_error(err, &e.to_string())?,
            },
            Intent::Hint => {
                for line in format_odds(&game.hint()) {
                    writeln!(out, "{}", line)?;
                }
            }
            Intent::Shuffle => match game.shuffle() {
                Ok(Some(report)) => {
                    for line in format_shuffle(&report) {
                        writeln!(out, "{}", line)?;
                    }
                }
                Ok(None) => ui::display_warning(err, "No cards left to shuffle")?,
                Err(e) => ui::write_error(err, &e.to_string())?,
            },
            Intent::Help => {
                for line in game.instructions() {
                    writeln!(out, "{}", line)?;
                }
            }
            Intent::NewGame => match game.new_game() {
                Ok(()) => writeln!(out, "New game started")?,
                Err(e) => ui::write_error(err, &e.to_string())?,
            },
        }
    }

    writeln!(out, "Final score: {}", game.score())?;
    if let Some(logger) = &logger {
        tracing::debug!(rounds = logger.written(), "round log closed");
    }
    Ok(())
}

fn pause(ms: u64) {
    if ms > 0 {
        thread::sleep(Duration::from_millis(ms));
    }
}

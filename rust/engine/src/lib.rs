//! # highlow-engine: High-Low Card Game Core
//!
//! A deterministic engine for a single-player "high-low" guessing game played
//! with a 54-card deck (jokers included). Each round deals the computer a card
//! and the player a hidden card; the player guesses whether their card is
//! higher, lower or tied, and rare correct guesses earn a bonus.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Partitioned deck with seeded ChaCha20 shuffling
//! - [`probability`] - Outcome odds for the hidden card
//! - [`rules`] - Outcomes, scoring and the instruction text
//! - [`engine`] - One round: deal, reveal, guess
//! - [`game`] - Session state machine and cumulative score
//! - [`logger`] - Round records and JSONL output
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use highlow_engine::game::{GameSession, RoundState};
//! use highlow_engine::rules::Outcome;
//!
//! let mut game = GameSession::new(Some(2024));
//! game.new_game().unwrap();
//!
//! // The caller decides when the computer card is shown
//! game.reveal_computer_card().unwrap();
//!
//! let odds = game.hint();
//! println!("higher {:.1}% lower {:.1}% tie {:.1}%",
//!     odds.higher * 100.0, odds.lower * 100.0, odds.tie * 100.0);
//!
//! let result = game.submit_guess(Outcome::Higher).unwrap();
//! println!("correct={} +{}", result.correct, result.delta);
//!
//! // ...and when to move on to the next pair
//! assert_eq!(game.advance().unwrap(), RoundState::Dealing);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All game outcomes are reproducible using seeded RNG:
//!
//! ```rust
//! use highlow_engine::deck::Deck;
//!
//! let mut d1 = Deck::new_with_seed(42);
//! let mut d2 = Deck::new_with_seed(42);
//! assert_eq!(d1.shuffle(), d2.shuffle());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod logger;
pub mod probability;
pub mod rules;

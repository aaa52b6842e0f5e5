use thiserror::Error;

use crate::game::RoundState;

/// Failures reported by the deck and the session. None of them are fatal and
/// none of them leave partial changes behind.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot {operation} while {state}")]
    InvalidStateTransition {
        operation: &'static str,
        state: RoundState,
    },
    #[error("Insufficient cards: requested {requested}, available {available}")]
    InsufficientCards { requested: usize, available: usize },
    #[error("Card {card_id} is not dealt and unrevealed")]
    UnknownCardReference { card_id: String },
}

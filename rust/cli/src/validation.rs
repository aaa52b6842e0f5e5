//! Input parsing for the interactive `play` command.
//!
//! Typed lines are turned into the discrete intents the game session
//! understands. Whether an intent is allowed right now is the session's
//! decision, not the parser's.

use highlow_engine::rules::Outcome;

/// A player request, independent of the current round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Guess(Outcome),
    Hint,
    Shuffle,
    Help,
    NewGame,
}

/// Result type for parsing a line of user input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Intent(Intent),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse a line of user input (case-insensitive).
///
/// - "h"/"higher", "l"/"lower", "t"/"tie" → guesses
/// - "hint", "shuffle", "help", "new"
/// - "q" or "quit" → quit
///
/// # Example
///
/// ```rust
/// # use highlow_cli::validation::{parse_intent, Intent, ParseResult};
/// use highlow_engine::rules::Outcome;
///
/// assert_eq!(parse_intent("H"), ParseResult::Intent(Intent::Guess(Outcome::Higher)));
/// assert_eq!(parse_intent("hint"), ParseResult::Intent(Intent::Hint));
/// assert_eq!(parse_intent("q"), ParseResult::Quit);
/// assert!(matches!(parse_intent("fold"), ParseResult::Invalid(_)));
/// ```
pub fn parse_intent(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" => ParseResult::Invalid("Empty input".to_string()),
        "q" | "quit" | "exit" => ParseResult::Quit,
        "hint" | "?" => ParseResult::Intent(Intent::Hint),
        "shuffle" | "s" => ParseResult::Intent(Intent::Shuffle),
        "help" | "instructions" => ParseResult::Intent(Intent::Help),
        "new" | "n" | "again" => ParseResult::Intent(Intent::NewGame),
        other => match other.parse::<Outcome>() {
            Ok(outcome) => ParseResult::Intent(Intent::Guess(outcome)),
            Err(_) => ParseResult::Invalid(format!(
                "Unrecognized input '{}'. Use h/l/t, hint, shuffle, help, new or q",
                other
            )),
        },
    }
}

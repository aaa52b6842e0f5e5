//! Error types for the CLI application.

use std::fmt;

use highlow_engine::errors::GameError;

/// Custom error type for CLI operations.
///
/// This enum encompasses all error types that can occur during CLI execution,
/// allowing for proper error propagation using the `?` operator.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, round log file, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(GameError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use highlow_engine::game::RoundState;

    #[test]
    fn engine_errors_keep_their_message() {
        let e: CliError = GameError::InvalidStateTransition {
            operation: "advance",
            state: RoundState::Dealing,
        }
        .into();
        assert_eq!(e.to_string(), "Engine error: Cannot advance while dealing");
        assert!(std::error::Error::source(&e).is_some());
    }

    #[test]
    fn invalid_input_display() {
        let e = CliError::InvalidInput("games must be >= 1".into());
        assert_eq!(e.to_string(), "Invalid input: games must be >= 1");
    }
}

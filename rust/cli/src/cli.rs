//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "highlow",
    version,
    about = "High-low card guessing game with a 54-card deck"
)]
pub struct HighlowCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play interactively on stdin/stdout
    Play {
        #[arg(long)]
        seed: Option<u64>,
        /// Write each scored round to this JSONL file
        #[arg(long)]
        log: Option<String>,
        #[arg(long)]
        reveal_delay_ms: Option<u64>,
        #[arg(long)]
        result_delay_ms: Option<u64>,
    },
    /// Play whole games automatically and report scores
    Sim {
        #[arg(long, default_value_t = 1)]
        games: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = Strategy::Likely)]
        strategy: Strategy,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}

/// How `sim` picks its guesses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// The outcome with the highest hint probability
    Likely,
    /// Always guess higher
    Higher,
    /// Uniformly random guess
    Random,
}

impl Strategy {
    /// Returns the string representation of the strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// # use highlow_cli::Strategy;
    /// assert_eq!(Strategy::Likely.as_str(), "likely");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Likely => "likely",
            Strategy::Higher => "higher",
            Strategy::Random => "random",
        }
    }
}

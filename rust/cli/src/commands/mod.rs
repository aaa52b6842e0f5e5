//! Command handlers for the highlow CLI.
//!
//! Each subcommand lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers for that command only
//! - Output streams (`&mut dyn Write`) and input readers passed in by the caller
//! - Errors propagated via the `CliError` enum

pub mod cfg;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use play::{PlayArgs, handle_play_command};
pub use sim::handle_sim_command;

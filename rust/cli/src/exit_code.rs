//! Process exit codes returned by [`crate::run`].

/// The command finished normally, including a player quitting mid-game.
pub const SUCCESS: i32 = 0;

/// Bad arguments, invalid configuration or an I/O failure.
pub const ERROR: i32 = 2;

//! Shared helpers for the CLI integration tests.
//!
//! - `cli_runner`: [`cli_runner::CliRunner`] runs the built `highlow` binary
//!   inside a scratch directory and captures exit code, stdout and stderr.
//!
//! Environment overrides are passed to the child process only, so tests
//! never touch the environment of the test harness.

pub mod cli_runner;

//! Error types for the CLI application.
//!
//! `CliError` is what every command handler returns; `run` maps it to an
//! exit code and a single `Error:` line on stderr.

use highcard_engine::errors::GameError;
use thiserror::Error;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (log file, stdout/stderr writes, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Engine refused to start
    #[error("Engine error: {0}")]
    Engine(#[from] GameError),
}

//! Command implementations for the ellie CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod completions;
pub mod config;
pub mod labels;
pub mod lists;
pub mod tasks;
pub mod users;

use std::env;
use std::path::PathBuf;

use crate::cli::Cli;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// API client error (transport, non-2xx status or response decoding).
    #[error(transparent)]
    Api(#[from] ellie_api_rs::error::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid arguments detected before any request was made.
    #[error("{0}")]
    Usage(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Location of the YAML config file.
    pub config_path: PathBuf,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    pub fn from_cli(cli: &Cli, config_path: PathBuf) -> Self {
        Self {
            json_output: cli.json,
            use_colors: colors_enabled(cli.no_color),
            quiet: cli.quiet,
            config_path,
        }
    }

    /// Prints formatted output: JSON always, text unless quiet.
    ///
    /// Formatters return strings without a trailing newline.
    pub fn emit(&self, output: &str) {
        if self.json_output || !self.quiet {
            println!("{output}");
        }
    }
}

/// Returns false when `--no-color` is given or `NO_COLOR` is set to anything non-empty.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    !env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty())
}

/// Rejects empty or whitespace-only argument values.
pub fn require_non_blank(value: &str, flag: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CommandError::Usage(format!("{flag} cannot be empty")));
    }
    Ok(())
}

//! Error types for treeshell.
//!
//! Defines the main error enum used by registration, configuration, and the
//! terminal layer. Dispatch-time outcomes (unknown commands, handler failures,
//! exit requests) are not errors here; they are contained inside the loop.

use thiserror::Error;

/// Main error type for treeshell operations.
#[derive(Error, Debug)]
pub enum ShellError {
    /// A command path collides with an existing command or blocks nesting under one.
    #[error("command has been registered: {path}")]
    DuplicateCommand {
        /// The normalized path that was rejected.
        path: String,
    },

    /// Terminal setup or I/O failures (raw mode, event reads, writes).
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Configuration errors (unreadable file, invalid TOML, unknown color name).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ShellError {
    /// Creates a duplicate-command error for the given path.
    pub fn duplicate(path: impl Into<String>) -> Self {
        Self::DuplicateCommand { path: path.into() }
    }

    /// Creates a terminal error with the given message.
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::DuplicateCommand { .. } => "Registration Error",
            Self::Terminal(_) => "Terminal Error",
            Self::Config(_) => "Configuration Error",
        }
    }
}

/// Result type alias using ShellError.
pub type Result<T> = std::result::Result<T, ShellError>;

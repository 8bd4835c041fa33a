//! Configuration management for treeshell.
//!
//! Handles loading shell settings (prompt, colors, history size) from a TOML
//! file. Every field is optional; a missing file yields the defaults.

use crate::error::{Result, ShellError};
use crate::terminal::history::DEFAULT_HISTORY_SIZE;
use crossterm::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Prompt text. When unset, the prompt is `"{name}> "`.
    #[serde(default)]
    pub prompt: Option<String>,

    /// Prompt color (crossterm color name, e.g. "green", "dark_cyan").
    #[serde(default = "default_prompt_color")]
    pub prompt_color: String,

    /// Color of error lines.
    #[serde(default = "default_error_color")]
    pub error_color: String,

    /// Number of lines kept in the session history.
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

fn default_prompt_color() -> String {
    "green".to_string()
}

fn default_error_color() -> String {
    "red".to_string()
}

fn default_history_size() -> usize {
    DEFAULT_HISTORY_SIZE
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: None,
            prompt_color: default_prompt_color(),
            error_color: default_error_color(),
            history_size: default_history_size(),
        }
    }
}

impl ShellConfig {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("treeshell")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ShellError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string and validates it.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| {
            ShellError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that both color names are known.
    pub fn validate(&self) -> Result<()> {
        self.prompt_color()?;
        self.error_color()?;
        Ok(())
    }

    /// The prompt for a shell called `name`.
    pub fn prompt_for(&self, name: &str) -> String {
        self.prompt.clone().unwrap_or_else(|| format!("{name}> "))
    }

    /// The parsed prompt color.
    pub fn prompt_color(&self) -> Result<Color> {
        parse_color(&self.prompt_color)
    }

    /// The parsed error color.
    pub fn error_color(&self) -> Result<Color> {
        parse_color(&self.error_color)
    }
}

/// Parses a crossterm color name.
pub fn parse_color(name: &str) -> Result<Color> {
    Color::try_from(name).map_err(|_| ShellError::config(format!("Unknown color '{name}'")))
}

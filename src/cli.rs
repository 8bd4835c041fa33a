//! Command-line argument parsing for the treeshell demo binary.

use clap::Parser;
use std::path::PathBuf;

use treeshell::ShellConfig;

/// An interactive shell with hierarchical commands.
#[derive(Parser, Debug)]
#[command(name = "treeshell")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Prompt text (overrides the config file)
    #[arg(long, value_name = "TEXT", env = "TREESHELL_PROMPT")]
    pub prompt: Option<String>,

    /// Log to stderr instead of the log file
    #[arg(long)]
    pub log_stderr: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(ShellConfig::default_path)
    }

    /// Applies command-line overrides on top of a loaded config.
    pub fn apply_overrides(&self, config: &mut ShellConfig) {
        if let Some(prompt) = &self.prompt {
            config.prompt = Some(prompt.clone());
        }
    }
}

//! tracing setup for shells built on this crate.
//!
//! While the prompt is up the tty is in raw mode and anything written to
//! stderr lands in the middle of the line being edited, so interactive
//! sessions log to a per-application file instead.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Sends logs for `app_name` to its log file, truncating any previous run.
///
/// Returns the path that was opened. On failure no subscriber is installed.
pub fn init_file_logging(app_name: &str) -> io::Result<PathBuf> {
    let log_path = get_log_path(app_name);
    let log_file = create_log_file(&log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(log_file)
        .with_ansi(false)
        .init();
    Ok(log_path)
}

/// Sends logs to stderr, for runs where no raw-mode prompt is shown.
pub fn init_stderr_logging() {
    tracing_subscriber::fmt().with_env_filter(env_filter()).init();
}

/// Where `app_name` keeps its log file.
///
/// `<state dir>/<app>/<app>.log` where a state directory exists (Linux), the
/// config directory otherwise, and the temp directory as a last resort.
pub fn get_log_path(app_name: &str) -> PathBuf {
    let file_name = format!("{app_name}.log");
    match dirs::state_dir().or_else(dirs::config_dir) {
        Some(base) => base.join(app_name).join(file_name),
        None => std::env::temp_dir().join(file_name),
    }
}

fn create_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}

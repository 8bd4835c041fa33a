//! Handler outcome types.
//!
//! A handler reports one of three outcomes. The dispatch loop decides what
//! each one means for the session: keep going, print an error, or stop.

use std::fmt;

/// Outcome of running a command handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// The command completed normally.
    Done,

    /// The command failed; the message is shown to the user as `Err: <message>`.
    Failed(String),

    /// The command asks the shell to stop.
    Exit,
}

impl CommandResult {
    /// Creates a failure result with the given message.
    pub fn failure(msg: impl Into<String>) -> Self {
        Self::Failed(msg.into())
    }
}

impl<E: fmt::Display> From<std::result::Result<(), E>> for CommandResult {
    fn from(result: std::result::Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::Done,
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_output() {
        let result = CommandResult::failure("boom");
        assert!(matches!(result, CommandResult::Failed(s) if s == "boom"));
    }

    #[test]
    fn test_from_ok() {
        let ok: std::result::Result<(), String> = Ok(());
        assert_eq!(CommandResult::from(ok), CommandResult::Done);
    }

    #[test]
    fn test_from_err_uses_display() {
        let err: std::result::Result<(), crate::error::ShellError> =
            Err(crate::error::ShellError::config("bad state"));
        assert_eq!(
            CommandResult::from(err),
            CommandResult::Failed("Configuration error: bad state".to_string())
        );
    }
}

//! Command handlers for treeshell.
//!
//! Handlers are plain functions or closures that take a command context and
//! return a [`CommandResult`](super::CommandResult). This module holds the
//! context type and the built-in handlers.

pub mod system;

use crate::shell::Application;
use crate::terminal::OutputSink;

/// Context provided to command handlers.
///
/// Built fresh for every dispatched line. It gives access to the owning
/// application (for introspection such as listing commands) and to the
/// output sink of the current session.
pub struct CommandContext<'a> {
    app: &'a Application,
    out: &'a mut dyn OutputSink,
}

impl<'a> CommandContext<'a> {
    /// Creates a context over an application and an output sink.
    pub fn new(app: &'a Application, out: &'a mut dyn OutputSink) -> Self {
        Self { app, out }
    }

    /// The application that dispatched this command.
    pub fn app(&self) -> &Application {
        self.app
    }

    /// Writes a plain line of output.
    pub fn info(&mut self, msg: &str) {
        self.out.write_plain(msg);
    }

    /// Writes an error line, prefixed with `Err: `.
    pub fn error(&mut self, msg: &str) {
        self.out.write_error(&format!("Err: {msg}"));
    }
}

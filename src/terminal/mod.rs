//! Terminal collaborator for the dispatch loop.
//!
//! The loop only needs to read a line and write plain or error-styled text.
//! [`CrosstermTerminal`] does that over a raw-mode tty; [`ScriptedTerminal`]
//! does it in memory.

pub mod history;
pub mod input;
mod raw;
mod scripted;

pub use history::InputHistory;
pub use input::{InputState, KeyAction};
pub use raw::{CrosstermTerminal, PanicHookGuard, RawModeGuard};
pub use scripted::{OutputLine, ScriptedTerminal};

use crate::error::Result;

/// Destination for command output.
///
/// Implementations terminate each write with a line break.
pub trait OutputSink {
    /// Writes unstyled text.
    fn write_plain(&mut self, text: &str);

    /// Writes visually distinguished error text.
    fn write_error(&mut self, text: &str);
}

/// A line-oriented terminal.
pub trait Terminal: OutputSink {
    /// Blocks until a line is entered.
    ///
    /// Returns `Ok(None)` at end of input and `Err` on a read failure; both
    /// end the session.
    fn read_line(&mut self) -> Result<Option<String>>;
}

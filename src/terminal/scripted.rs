//! In-memory terminal for tests and non-interactive hosts.
//!
//! Feeds a fixed list of lines to the shell and records everything it writes.

use std::collections::VecDeque;

use super::{OutputSink, Terminal};
use crate::error::{Result, ShellError};

/// A line written to a [`ScriptedTerminal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    /// Written through the plain sink.
    Plain(String),
    /// Written through the error-styled sink.
    Error(String),
}

impl OutputLine {
    /// The written text, without styling information.
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(s) | Self::Error(s) => s,
        }
    }
}

/// Terminal that reads from a script instead of a keyboard.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    input: VecDeque<String>,
    output: Vec<OutputLine>,
    fail_when_empty: bool,
}

impl ScriptedTerminal {
    /// Creates a terminal that yields `lines` in order, then end of input.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            fail_when_empty: false,
        }
    }

    /// Creates a terminal that yields `lines`, then fails with a read error.
    pub fn failing_after<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fail_when_empty: true,
            ..Self::new(lines)
        }
    }

    /// Everything written so far, in order.
    pub fn output(&self) -> &[OutputLine] {
        &self.output
    }

    /// The text of everything written so far, styling aside.
    pub fn output_text(&self) -> Vec<&str> {
        self.output.iter().map(OutputLine::text).collect()
    }

    /// Number of scripted lines not yet read.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl OutputSink for ScriptedTerminal {
    fn write_plain(&mut self, text: &str) {
        self.output.push(OutputLine::Plain(text.to_string()));
    }

    fn write_error(&mut self, text: &str) {
        self.output.push(OutputLine::Error(text.to_string()));
    }
}

impl Terminal for ScriptedTerminal {
    fn read_line(&mut self) -> Result<Option<String>> {
        match self.input.pop_front() {
            Some(line) => Ok(Some(line)),
            None if self.fail_when_empty => Err(ShellError::terminal("scripted input exhausted")),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_in_order_then_eof() {
        let mut term = ScriptedTerminal::new(["a", "b"]);
        assert_eq!(term.read_line().unwrap(), Some("a".to_string()));
        assert_eq!(term.remaining(), 1);
        assert_eq!(term.read_line().unwrap(), Some("b".to_string()));
        assert_eq!(term.read_line().unwrap(), None);
    }

    #[test]
    fn test_failing_after() {
        let mut term = ScriptedTerminal::failing_after(["a"]);
        assert!(term.read_line().unwrap().is_some());
        assert!(matches!(term.read_line(), Err(ShellError::Terminal(_))));
    }

    #[test]
    fn test_records_output() {
        let mut term = ScriptedTerminal::default();
        term.write_plain("hello");
        term.write_error("Err: boom");
        assert_eq!(
            term.output(),
            &[
                OutputLine::Plain("hello".to_string()),
                OutputLine::Error("Err: boom".to_string()),
            ]
        );
        assert_eq!(term.output_text(), vec!["hello", "Err: boom"]);
    }
}

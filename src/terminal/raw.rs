//! Raw-mode terminal backed by crossterm.

use std::io::{self, Stdout, Write};
use std::panic::{self, PanicHookInfo};
use std::sync::Arc;
use std::thread;

use crossterm::{
    cursor::MoveToColumn,
    event::{self, Event as CrosstermEvent, KeyEventKind},
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};
use tracing::{debug, warn};
use unicode_width::UnicodeWidthStr;

use super::history::InputHistory;
use super::input::{InputState, KeyAction};
use super::{OutputSink, Terminal};
use crate::config::ShellConfig;
use crate::error::{Result, ShellError};

/// Holds the tty in raw mode for as long as it lives.
///
/// Raw mode is released on drop, so every exit path out of the loop
/// (return, error, or unwinding panic) restores the terminal.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// Switches the tty to raw mode.
    pub fn acquire() -> Result<Self> {
        enable_raw_mode()
            .map_err(|e| ShellError::terminal(format!("Failed to enable raw mode: {e}")))?;
        debug!("Raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        match disable_raw_mode() {
            Ok(()) => debug!("Raw mode disabled"),
            Err(e) => warn!("Failed to disable raw mode: {}", e),
        }
    }
}

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Runs a cleanup function ahead of the process panic hook while it lives.
///
/// The hook that was installed before [`PanicHookGuard::install`] is put back
/// on drop, so a host process sees its own hook again once the shell is gone.
pub struct PanicHookGuard {
    previous: Option<Arc<PanicHook>>,
}

impl PanicHookGuard {
    /// Chains `on_panic` in front of the current panic hook.
    pub fn install(on_panic: fn()) -> Self {
        let previous: Arc<PanicHook> = Arc::new(panic::take_hook());
        let chained = Arc::clone(&previous);
        panic::set_hook(Box::new(move |panic_info| {
            on_panic();
            (*chained)(panic_info);
        }));
        Self {
            previous: Some(previous),
        }
    }
}

impl Drop for PanicHookGuard {
    fn drop(&mut self) {
        // The hook cannot be swapped from a panicking thread
        if thread::panicking() {
            return;
        }
        let Some(previous) = self.previous.take() else {
            return;
        };

        drop(panic::take_hook());
        match Arc::try_unwrap(previous) {
            Ok(hook) => panic::set_hook(hook),
            Err(shared) => panic::set_hook(Box::new(move |panic_info| (*shared)(panic_info))),
        }
        debug!("Panic hook restored");
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
}

/// Interactive terminal with a colored prompt, line editing and session history.
pub struct CrosstermTerminal {
    stdout: Stdout,
    prompt: String,
    prompt_color: Color,
    error_color: Color,
    history: InputHistory,
    _panic_hook: PanicHookGuard,
    _guard: RawModeGuard,
}

impl CrosstermTerminal {
    /// Enters raw mode and prepares the prompt.
    pub fn new(prompt: impl Into<String>, config: &ShellConfig) -> Result<Self> {
        let prompt_color = config.prompt_color()?;
        let error_color = config.error_color()?;

        let guard = RawModeGuard::acquire()?;
        // Restore the tty before the panic message is printed
        let panic_hook = PanicHookGuard::install(restore_terminal);

        Ok(Self {
            stdout: io::stdout(),
            prompt: prompt.into(),
            prompt_color,
            error_color,
            history: InputHistory::with_capacity(config.history_size),
            _panic_hook: panic_hook,
            _guard: guard,
        })
    }

    /// Redraws the prompt and the line being edited.
    fn redraw(&mut self, input: &InputState) -> Result<()> {
        let column = self.prompt.width() + input.cursor_column();
        queue!(
            self.stdout,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            SetForegroundColor(self.prompt_color),
            Print(&self.prompt),
            ResetColor,
            Print(&input.text),
            MoveToColumn(u16::try_from(column).unwrap_or(u16::MAX))
        )
        .map_err(|e| ShellError::terminal(format!("Failed to draw prompt: {e}")))?;
        self.flush()
    }

    fn newline(&mut self) -> Result<()> {
        queue!(self.stdout, Print("\r\n"))
            .map_err(|e| ShellError::terminal(format!("Failed to write: {e}")))?;
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout
            .flush()
            .map_err(|e| ShellError::terminal(format!("Failed to flush stdout: {e}")))
    }

    /// Writes text line by line with raw-mode line endings.
    fn write_lines(&mut self, text: &str, color: Option<Color>) -> io::Result<()> {
        for line in text.split('\n') {
            if let Some(color) = color {
                queue!(self.stdout, SetForegroundColor(color))?;
            }
            queue!(self.stdout, Print(line))?;
            if color.is_some() {
                queue!(self.stdout, ResetColor)?;
            }
            queue!(self.stdout, Print("\r\n"))?;
        }
        self.stdout.flush()
    }
}

impl OutputSink for CrosstermTerminal {
    fn write_plain(&mut self, text: &str) {
        if let Err(e) = self.write_lines(text, None) {
            warn!("Failed to write output: {}", e);
        }
    }

    fn write_error(&mut self, text: &str) {
        let color = self.error_color;
        if let Err(e) = self.write_lines(text, Some(color)) {
            warn!("Failed to write error output: {}", e);
        }
    }
}

impl Terminal for CrosstermTerminal {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut input = InputState::new();
        self.redraw(&input)?;

        loop {
            let event = event::read()
                .map_err(|e| ShellError::terminal(format!("Failed to read event: {e}")))?;

            let CrosstermEvent::Key(key) = event else {
                continue;
            };
            if key.kind == KeyEventKind::Release {
                continue;
            }

            match KeyAction::from_key(key) {
                KeyAction::Submit => {
                    self.newline()?;
                    let line = input.take();
                    self.history.push(&line);
                    return Ok(Some(line));
                }
                KeyAction::Interrupt => {
                    self.newline()?;
                    return Ok(None);
                }
                KeyAction::EndOfInput if input.is_empty() => {
                    self.newline()?;
                    return Ok(None);
                }
                KeyAction::EndOfInput => input.delete(),
                KeyAction::HistoryPrev => {
                    if let Some(entry) = self.history.previous(&input.text) {
                        input.set(entry);
                    }
                }
                KeyAction::HistoryNext => {
                    if let Some(entry) = self.history.next() {
                        input.set(entry);
                    }
                }
                action => input.apply(action),
            }

            self.redraw(&input)?;
        }
    }
}

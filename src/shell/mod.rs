//! The interactive shell: registration surface and dispatch loop.
//!
//! An [`Application`] owns the command tree. Hosts register their commands,
//! then call [`Application::run`], which reads lines until a handler asks to
//! exit or input ends.

use tracing::{debug, info, warn};

use crate::commands::handlers::{system, CommandContext};
use crate::commands::{
    normalize, segments, CommandRegistry, CommandResult, Handler, Resolution,
};
use crate::config::ShellConfig;
use crate::error::Result;
use crate::terminal::{CrosstermTerminal, OutputSink, Terminal};

/// Message shown when a line does not name a registered command.
pub const NOT_FOUND_MESSAGE: &str = "command not found";

/// What the loop does after a line has been dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Read the next line.
    Continue,
    /// Stop the loop.
    Stop,
}

/// An embeddable command shell.
pub struct Application {
    name: String,
    config: ShellConfig,
    registry: CommandRegistry,
}

impl Application {
    /// Creates a shell with the default configuration and the built-in
    /// `exit` and `help` commands.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, ShellConfig::default())
    }

    /// Creates a shell with the given configuration.
    pub fn with_config(name: impl Into<String>, config: ShellConfig) -> Self {
        let registry = CommandRegistry::with_top_level([
            ("exit", "quit application", Box::new(system::handle_exit) as Handler),
            ("help", "list all commands", Box::new(system::handle_help) as Handler),
        ]);

        Self {
            name: name.into(),
            config,
            registry,
        }
    }

    /// The shell's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The active configuration.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// The prompt shown before each line.
    pub fn prompt(&self) -> String {
        self.config.prompt_for(&self.name)
    }

    /// The command tree.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Registers a command under a space-separated path.
    ///
    /// Empty paths are ignored. Fails with
    /// [`ShellError::DuplicateCommand`](crate::ShellError::DuplicateCommand)
    /// if the path collides with an existing command or group.
    pub fn register_command<F>(
        &mut self,
        path: &str,
        usage: &str,
        description: &str,
        handler: F,
    ) -> Result<()>
    where
        F: Fn(&mut CommandContext<'_>) -> CommandResult + 'static,
    {
        self.registry
            .register(path, usage, description, Box::new(handler))
    }

    /// Renders the command tree, as printed by `help`.
    pub fn render_commands(&self) -> String {
        self.registry.render()
    }

    /// Dispatches one input line.
    ///
    /// Blank lines do nothing. Unknown commands print `command not found`,
    /// handler failures print `Err: <message>`, and an exit request stops
    /// the loop.
    pub fn dispatch(&self, line: &str, out: &mut dyn OutputSink) -> LoopControl {
        let line = normalize(line);
        if line.is_empty() {
            return LoopControl::Continue;
        }

        let def = match self.registry.resolve(&segments(&line)) {
            Resolution::Found(def) => def,
            Resolution::Prefix(children) => {
                debug!(line = %line, subcommands = children.len(), "Incomplete command");
                out.write_plain(NOT_FOUND_MESSAGE);
                return LoopControl::Continue;
            }
            Resolution::NotFound => {
                debug!(line = %line, "Unknown command");
                out.write_plain(NOT_FOUND_MESSAGE);
                return LoopControl::Continue;
            }
        };

        let mut ctx = CommandContext::new(self, out);
        match def.run(&mut ctx) {
            CommandResult::Done => LoopControl::Continue,
            CommandResult::Exit => {
                debug!(line = %line, "Exit requested");
                LoopControl::Stop
            }
            CommandResult::Failed(msg) => {
                warn!(line = %line, "Command failed: {}", msg);
                ctx.error(&msg);
                LoopControl::Continue
            }
        }
    }

    /// Runs the loop over the given terminal until exit or end of input.
    pub fn run_with<T: Terminal>(&self, terminal: &mut T) {
        info!("Shell '{}' started", self.name);

        loop {
            let line = match terminal.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    debug!("End of input");
                    break;
                }
                Err(e) => {
                    debug!("Stopping on read failure: {}", e);
                    break;
                }
            };

            if self.dispatch(&line, terminal) == LoopControl::Stop {
                break;
            }
        }

        info!("Shell '{}' stopped", self.name);
    }

    /// Runs the loop on the process terminal.
    ///
    /// Raw mode is held for the duration of the loop and released on every
    /// exit path. Errors only come from setting up the terminal.
    pub fn run(&self) -> Result<()> {
        let mut terminal = CrosstermTerminal::new(self.prompt(), &self.config)?;
        self.run_with(&mut terminal);
        Ok(())
    }
}

//! treeshell - an embeddable interactive command shell.
//!
//! A host program registers commands under space-separated paths, then runs
//! a read-dispatch loop over a raw terminal:
//!
//! ```no_run
//! use treeshell::{Application, CommandResult};
//!
//! let mut app = Application::new("neo");
//! app.register_command("greet", "", "say hello", |ctx| {
//!     ctx.info("hello");
//!     CommandResult::Done
//! })?;
//! app.run()?;
//! # Ok::<(), treeshell::ShellError>(())
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod shell;
pub mod terminal;

pub use commands::{CommandContext, CommandResult};
pub use config::ShellConfig;
pub use error::{Result, ShellError};
pub use shell::{Application, LoopControl};

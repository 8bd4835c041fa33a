//! Command registration and resolution for treeshell.
//!
//! This module keeps the command tree separate from the terminal, so the
//! registry and handlers can be unit tested without a live session.

pub mod handlers;
pub mod normalize;
pub mod output;
pub mod registry;

pub use handlers::CommandContext;
pub use normalize::{normalize, segments};
pub use output::CommandResult;
pub use registry::{CommandDef, CommandNode, CommandRegistry, Group, Handler, Resolution};

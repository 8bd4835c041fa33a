//! Built-in command handlers (help, exit).

use super::CommandContext;
use crate::commands::output::CommandResult;

/// Handle `help`: list every registered command.
pub fn handle_help(ctx: &mut CommandContext<'_>) -> CommandResult {
    let listing = ctx.app().render_commands();
    ctx.info(listing.trim_end_matches('\n'));
    CommandResult::Done
}

/// Handle `exit`.
pub fn handle_exit(_ctx: &mut CommandContext<'_>) -> CommandResult {
    CommandResult::Exit
}

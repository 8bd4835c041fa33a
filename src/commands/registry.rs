//! Hierarchical command registry.
//!
//! Commands are registered under space-separated paths. Every segment but the
//! last becomes a group node; the last segment holds the command definition.
//! Groups and commands never share a path: `"a"` as a command blocks `"a b"`,
//! and `"a b"` blocks `"a"`.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use super::handlers::CommandContext;
use super::normalize::segments;
use super::output::CommandResult;
use crate::error::{Result, ShellError};

/// A command handler.
///
/// Handlers receive the request context and decide whether the command
/// completed, failed, or asked the shell to stop. Persistent state lives in
/// whatever the closure captures.
pub type Handler = Box<dyn Fn(&mut CommandContext<'_>) -> CommandResult>;

/// Child nodes of a group, keyed by path segment.
pub type Group = BTreeMap<String, CommandNode>;

/// A registered command.
pub struct CommandDef {
    /// The final path segment.
    pub name: String,
    /// Free-form usage hint (may be empty).
    pub usage: String,
    /// Short description shown in help.
    pub description: String,
    handler: Handler,
}

impl CommandDef {
    /// Runs the command's handler.
    pub fn run(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        (self.handler)(ctx)
    }
}

impl fmt::Display for CommandDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.usage, self.description)
    }
}

impl fmt::Debug for CommandDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDef")
            .field("name", &self.name)
            .field("usage", &self.usage)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// A node in the command tree.
#[derive(Debug)]
pub enum CommandNode {
    /// Shared prefix of several commands.
    Group(Group),
    /// A runnable command.
    Leaf(CommandDef),
}

/// Result of resolving a segment sequence against the registry.
#[derive(Debug)]
pub enum Resolution<'a> {
    /// The segments name a registered command.
    Found(&'a CommandDef),
    /// The segments stop at a group; more segments were needed.
    Prefix(&'a Group),
    /// Nothing is registered under the segments.
    NotFound,
}

/// The command tree. The root is always a group.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    root: Group,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding top-level commands with no usage hint.
    ///
    /// Names are used as-is; a repeated name replaces the earlier command.
    pub(crate) fn with_top_level<I>(commands: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static str, Handler)>,
    {
        let root = commands
            .into_iter()
            .map(|(name, description, handler)| {
                let def = CommandDef {
                    name: name.to_string(),
                    usage: String::new(),
                    description: description.to_string(),
                    handler,
                };
                (name.to_string(), CommandNode::Leaf(def))
            })
            .collect();
        Self { root }
    }

    /// Registers a command under `path`.
    ///
    /// The path is normalized first; an empty path is ignored. Fails with
    /// [`ShellError::DuplicateCommand`] if the path is taken, if a prefix of it
    /// is already a command, or if it is already a group. A failed call leaves
    /// the registry unchanged.
    pub fn register(
        &mut self,
        path: &str,
        usage: &str,
        description: &str,
        handler: Handler,
    ) -> Result<()> {
        let segs = segments(path);
        let Some((last, parents)) = segs.split_last() else {
            return Ok(());
        };
        let full_path = segs.join(" ");

        if !self.is_free(&segs) {
            debug!(path = %full_path, "Rejected duplicate command registration");
            return Err(ShellError::duplicate(full_path));
        }

        let mut group = &mut self.root;
        for seg in parents {
            group = match group
                .entry((*seg).to_string())
                .or_insert_with(|| CommandNode::Group(Group::new()))
            {
                CommandNode::Group(children) => children,
                CommandNode::Leaf(_) => return Err(ShellError::duplicate(full_path)),
            };
        }

        group.insert(
            (*last).to_string(),
            CommandNode::Leaf(CommandDef {
                name: (*last).to_string(),
                usage: usage.to_string(),
                description: description.to_string(),
                handler,
            }),
        );
        debug!(path = %full_path, "Registered command");
        Ok(())
    }

    /// Returns true if a command can be installed at `segs`.
    fn is_free(&self, segs: &[&str]) -> bool {
        let Some((last, parents)) = segs.split_last() else {
            return false;
        };

        let mut group = &self.root;
        for seg in parents {
            match group.get(*seg) {
                Some(CommandNode::Group(children)) => group = children,
                Some(CommandNode::Leaf(_)) => return false,
                None => return true,
            }
        }
        !group.contains_key(*last)
    }

    /// Resolves a segment sequence, consuming one segment per tree level.
    pub fn resolve<S: AsRef<str>>(&self, segments: &[S]) -> Resolution<'_> {
        let Some((last, parents)) = segments.split_last() else {
            return Resolution::NotFound;
        };

        let mut group = &self.root;
        for seg in parents {
            match group.get(seg.as_ref()) {
                Some(CommandNode::Group(children)) => group = children,
                _ => return Resolution::NotFound,
            }
        }

        match group.get(last.as_ref()) {
            Some(CommandNode::Leaf(def)) => Resolution::Found(def),
            Some(CommandNode::Group(children)) => Resolution::Prefix(children),
            None => Resolution::NotFound,
        }
    }

    /// Looks up a command by its path string.
    pub fn get(&self, path: &str) -> Option<&CommandDef> {
        match self.resolve(&segments(path)) {
            Resolution::Found(def) => Some(def),
            _ => None,
        }
    }

    /// Returns true if a command is registered at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Returns every registered command with its full path, in sorted order.
    pub fn commands(&self) -> Vec<(String, &CommandDef)> {
        let mut out = Vec::new();
        collect_commands(&self.root, "", &mut out);
        out
    }

    /// Returns the number of registered commands.
    pub fn len(&self) -> usize {
        self.commands().len()
    }

    /// Returns true if no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Renders the whole tree as an indented listing.
    ///
    /// Groups print as `segment:` with their children one space deeper;
    /// commands print as `name usage description`. Siblings are sorted.
    pub fn render(&self) -> String {
        let mut out = String::new();
        render_group(&self.root, 0, &mut out);
        out
    }
}

fn collect_commands<'a>(group: &'a Group, prefix: &str, out: &mut Vec<(String, &'a CommandDef)>) {
    for (segment, node) in group {
        let path = if prefix.is_empty() {
            segment.clone()
        } else {
            format!("{prefix} {segment}")
        };
        match node {
            CommandNode::Group(children) => collect_commands(children, &path, out),
            CommandNode::Leaf(def) => out.push((path, def)),
        }
    }
}

fn render_group(group: &Group, depth: usize, out: &mut String) {
    let indent = " ".repeat(depth);
    for (segment, node) in group {
        match node {
            CommandNode::Group(children) => {
                out.push_str(&format!("{indent}{segment}:\n"));
                render_group(children, depth + 1, out);
            }
            CommandNode::Leaf(def) => {
                out.push_str(&format!("{indent}{def}\n"));
            }
        }
    }
}

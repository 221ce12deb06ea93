//! Shared context for command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Prefix, session snapshot and command catalog

use std::sync::Arc;

use crate::session::SessionStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Text,
    Slash,
}

/// One entry of the help listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSummary {
    pub kind: CommandKind,
    pub name: &'static str,
    pub description: &'static str,
}

impl CommandSummary {
    /// Name as a user types it: `!ping` or `/info`
    pub fn display_name(&self, prefix: &str) -> String {
        match self.kind {
            CommandKind::Text => format!("{prefix}{}", self.name),
            CommandKind::Slash => format!("/{}", self.name),
        }
    }
}

/// Shared context for all command handlers
///
/// Built fresh for every invocation so the session snapshot is never stale:
/// - Command prefix in use
/// - Latency, guild and user counts at the time of the command
/// - Catalog of registered commands for `help`
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub prefix: String,
    pub stats: SessionStats,
    pub catalog: Arc<[CommandSummary]>,
}

impl CommandContext {
    pub fn new(
        prefix: impl Into<String>,
        stats: SessionStats,
        catalog: Arc<[CommandSummary]>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            stats,
            catalog,
        }
    }
}

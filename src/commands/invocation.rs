//! Prefix command parsing and message routing

use serenity::model::channel::Message;
use serenity::model::id::UserId;
use serenity::model::mention::Mentionable;
use serenity::model::permissions::Permissions;

use crate::session::is_own_message;

/// A prefix command split into its name and whitespace-separated arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// Split `content` into a command if it starts with `prefix`.
///
/// Names are matched case-insensitively. A bare prefix yields `None`.
pub fn parse_command(content: &str, prefix: &str) -> Option<ParsedCommand> {
    let rest = content.strip_prefix(prefix)?;
    // "! ping" is not a command
    if rest.starts_with(char::is_whitespace) {
        return None;
    }
    let mut parts = rest.split_whitespace();
    let name = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some(ParsedCommand { name, args })
}

/// What to do with an inbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Authored by the bot itself
    OwnMessage,
    /// Not addressed to the bot
    NotACommand,
    Dispatch(ParsedCommand),
}

pub fn route_message(author_id: UserId, bot_id: UserId, content: &str, prefix: &str) -> Route {
    if is_own_message(author_id, bot_id) {
        return Route::OwnMessage;
    }
    match parse_command(content, prefix) {
        Some(parsed) => Route::Dispatch(parsed),
        None => Route::NotACommand,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: u64,
    pub name: String,
    /// Platform mention markup, e.g. `<@1234>`
    pub mention: String,
}

/// Read-only view of one text command invocation
#[derive(Debug, Clone)]
pub struct Invocation {
    pub author: Author,
    pub name: String,
    pub args: Vec<String>,
    /// Author's permissions in the channel's guild; empty in DMs
    pub permissions: Permissions,
}

impl Invocation {
    pub fn new(author: Author, parsed: ParsedCommand, permissions: Permissions) -> Self {
        Self {
            author,
            name: parsed.name,
            args: parsed.args,
            permissions,
        }
    }

    pub fn from_message(msg: &Message, parsed: ParsedCommand, permissions: Permissions) -> Self {
        let author = Author {
            id: msg.author.id.0,
            name: msg.author.name.clone(),
            mention: msg.author.mention().to_string(),
        };
        Self::new(author, parsed, permissions)
    }
}

//! Utility command handlers
//!
//! Handles: ping, hello (text) and ping (slash)
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;

use crate::commands::context::CommandContext;
use crate::commands::error::CommandError;
use crate::commands::handler::{CommandInfo, SlashCommandHandler, TextCommandHandler};
use crate::commands::invocation::Invocation;
use crate::commands::reply::Reply;
use crate::session::SessionStats;

/// Latency reply shared by `!ping` and `/ping`
pub fn pong(stats: &SessionStats) -> String {
    format!("Pong! Latency: {}ms", stats.latency_ms())
}

/// Greeting that mentions the invoking user
pub fn greeting(mention: &str) -> String {
    format!("Hello {mention}! 👋")
}

/// Handler for utility text commands: ping, hello
pub struct UtilityHandler;

impl CommandInfo for UtilityHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["ping", "hello"]
    }

    fn description(&self, name: &str) -> &'static str {
        match name {
            "ping" => "Check bot latency",
            "hello" => "Say hello to the bot",
            _ => "",
        }
    }
}

#[async_trait]
impl TextCommandHandler for UtilityHandler {
    async fn handle(
        &self,
        ctx: &CommandContext,
        invocation: &Invocation,
    ) -> Result<Reply, CommandError> {
        let reply = match invocation.name.as_str() {
            "ping" => pong(&ctx.stats),
            "hello" => greeting(&invocation.author.mention),
            other => {
                return Err(CommandError::NotFound {
                    name: other.to_string(),
                })
            }
        };

        info!(
            "{} command completed for user {}",
            invocation.name, invocation.author.id
        );
        Ok(Reply::Text(reply))
    }
}

/// Handler for the `/ping` slash command
pub struct SlashPingHandler;

impl CommandInfo for SlashPingHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["ping"]
    }

    fn description(&self, _name: &str) -> &'static str {
        "Check bot latency"
    }
}

#[async_trait]
impl SlashCommandHandler for SlashPingHandler {
    async fn handle(&self, ctx: &CommandContext, _name: &str) -> Result<Reply> {
        Ok(Reply::Text(pong(&ctx.stats)))
    }
}

//! `/info` slash command handler
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Guild count, user count and latency embed

use anyhow::Result;
use async_trait::async_trait;

use crate::commands::context::CommandContext;
use crate::commands::handler::{CommandInfo, SlashCommandHandler};
use crate::commands::reply::Reply;
use crate::core::info_embed;

/// Handler for `/info`
pub struct InfoHandler;

impl CommandInfo for InfoHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["info"]
    }

    fn description(&self, _name: &str) -> &'static str {
        "Get bot information"
    }
}

#[async_trait]
impl SlashCommandHandler for InfoHandler {
    async fn handle(&self, ctx: &CommandContext, _name: &str) -> Result<Reply> {
        Ok(Reply::Embed(info_embed(&ctx.stats)))
    }
}

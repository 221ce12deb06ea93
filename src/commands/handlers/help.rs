//! Help command handler

use async_trait::async_trait;

use crate::commands::context::CommandContext;
use crate::commands::error::CommandError;
use crate::commands::handler::{CommandInfo, TextCommandHandler};
use crate::commands::invocation::Invocation;
use crate::commands::reply::Reply;
use crate::core::help_embed;

/// Handler for `help`: lists every registered text and slash command
pub struct HelpHandler;

impl CommandInfo for HelpHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["help"]
    }

    fn description(&self, _name: &str) -> &'static str {
        "Show this message"
    }
}

#[async_trait]
impl TextCommandHandler for HelpHandler {
    async fn handle(
        &self,
        ctx: &CommandContext,
        _invocation: &Invocation,
    ) -> Result<Reply, CommandError> {
        Ok(Reply::Embed(help_embed(&ctx.prefix, &ctx.catalog)))
    }
}

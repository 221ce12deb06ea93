//! Command handler traits
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Text and slash handler traits sharing a naming contract

use anyhow::Result;
use async_trait::async_trait;
use serenity::model::permissions::Permissions;

use super::context::CommandContext;
use super::error::CommandError;
use super::invocation::Invocation;
use super::reply::Reply;

/// Naming contract shared by text and slash handlers
///
/// A handler can process multiple commands if they share logic, so
/// descriptions are looked up per name.
pub trait CommandInfo {
    /// Command name(s) this handler processes
    fn command_names(&self) -> &'static [&'static str];

    /// One-line description shown in help and slash command listings
    fn description(&self, name: &str) -> &'static str;
}

/// Trait for prefix (`!name`) command handlers
///
/// # Example
///
/// ```ignore
/// pub struct EchoHandler;
///
/// impl CommandInfo for EchoHandler {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["echo"]
///     }
///
///     fn description(&self, _name: &str) -> &'static str {
///         "Repeat a word"
///     }
/// }
///
/// #[async_trait]
/// impl TextCommandHandler for EchoHandler {
///     fn required_args(&self, _name: &str) -> &'static [&'static str] {
///         &["word"]
///     }
///
///     async fn handle(
///         &self,
///         _ctx: &CommandContext,
///         invocation: &Invocation,
///     ) -> Result<Reply, CommandError> {
///         Ok(Reply::text(invocation.args[0].clone()))
///     }
/// }
/// ```
#[async_trait]
pub trait TextCommandHandler: CommandInfo + Send + Sync {
    /// Positional arguments that must be present, in order
    fn required_args(&self, _name: &str) -> &'static [&'static str] {
        &[]
    }

    /// Permissions the author must hold in the guild
    fn required_permissions(&self, _name: &str) -> Permissions {
        Permissions::empty()
    }

    /// Handle the command
    ///
    /// Arguments and permissions have already been checked by the registry.
    async fn handle(
        &self,
        ctx: &CommandContext,
        invocation: &Invocation,
    ) -> Result<Reply, CommandError>;
}

/// Trait for slash (`/name`) command handlers
#[async_trait]
pub trait SlashCommandHandler: CommandInfo + Send + Sync {
    /// Handle the slash command named `name`
    async fn handle(&self, ctx: &CommandContext, name: &str) -> Result<Reply>;
}

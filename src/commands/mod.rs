//! # Command System
//!
//! Prefix (`!`) and slash (/) command handling for Discord.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Handler traits, dispatch registry, utility/help/info commands

pub mod context;
pub mod error;
pub mod handler;
pub mod handlers;
pub mod invocation;
pub mod registry;
pub mod reply;
pub mod slash;

// Re-export handler infrastructure
pub use context::{CommandContext, CommandKind, CommandSummary};
pub use error::{on_command_error, CommandError};
pub use handler::{CommandInfo, SlashCommandHandler, TextCommandHandler};
pub use handlers::{create_slash_registry, create_text_registry};
pub use invocation::{parse_command, route_message, Author, Invocation, ParsedCommand, Route};
pub use registry::{build_catalog, CommandRegistry, SlashRegistry};
pub use reply::{respond_to_interaction, send_to_channel, Reply};

// Re-export commonly used items from submodules
pub use slash::{create_slash_commands, register_global_commands, register_guild_commands};

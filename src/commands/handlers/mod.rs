//! Per-command handler implementations
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Utility (ping, hello), help and info handlers

pub mod help;
pub mod info;
pub mod utility;

use std::sync::Arc;

use super::handler::{SlashCommandHandler, TextCommandHandler};
use super::registry::{CommandRegistry, SlashRegistry};

/// Create all prefix command handlers
pub fn create_text_handlers() -> Vec<Arc<dyn TextCommandHandler>> {
    vec![Arc::new(utility::UtilityHandler), Arc::new(help::HelpHandler)]
}

/// Create all slash command handlers
pub fn create_slash_handlers() -> Vec<Arc<dyn SlashCommandHandler>> {
    vec![Arc::new(info::InfoHandler), Arc::new(utility::SlashPingHandler)]
}

/// Registry with every prefix command registered
pub fn create_text_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    for handler in create_text_handlers() {
        registry.register(handler);
    }
    registry
}

/// Registry with every slash command registered
pub fn create_slash_registry() -> SlashRegistry {
    let mut registry = SlashRegistry::new();
    for handler in create_slash_handlers() {
        registry.register(handler);
    }
    registry
}

//! # Core Module
//!
//! Configuration, startup errors and embed construction shared by the bot.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod config;
pub mod embeds;
pub mod error;

// Re-export commonly used items
pub use config::Config;
pub use embeds::{help_embed, info_embed, EmbedField, EmbedReply};
pub use error::{ConfigError, StartupError};

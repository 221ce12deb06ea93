//! Environment-driven bot configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Token, development guild and prefix from the environment

use std::fmt;

use super::error::ConfigError;

pub const DEFAULT_PREFIX: &str = "!";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone)]
pub struct Config {
    pub discord_token: String,
    /// Guild to publish slash commands to instead of globally (development mode)
    pub discord_guild_id: Option<u64>,
    pub command_prefix: String,
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = lookup("DISCORD_TOKEN")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let discord_guild_id = match lookup("DISCORD_GUILD_ID").map(|v| v.trim().to_string()) {
            Some(raw) if !raw.is_empty() => Some(
                raw.parse::<u64>()
                    .map_err(|_| ConfigError::InvalidGuildId(raw))?,
            ),
            _ => None,
        };

        let command_prefix = match lookup("COMMAND_PREFIX") {
            Some(prefix) if prefix.trim().is_empty() => return Err(ConfigError::EmptyPrefix),
            Some(prefix) => prefix.trim().to_string(),
            None => DEFAULT_PREFIX.to_string(),
        };

        Ok(Config {
            discord_token,
            discord_guild_id,
            command_prefix,
        })
    }
}

// The token never reaches logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("discord_token", &"[redacted]")
            .field("discord_guild_id", &self.discord_guild_id)
            .field("command_prefix", &self.command_prefix)
            .finish()
    }
}

/// Log filter used before the rest of the configuration is loaded
pub fn log_level_from_env() -> String {
    std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
}

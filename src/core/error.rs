//! Fatal startup errors
//!
//! Anything in here ends the process. Command-level failures live in
//! [`crate::commands::CommandError`] instead.

use serenity::gateway::GatewayError;
use serenity::http::error::Error as HttpError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DISCORD_TOKEN environment variable is required")]
    MissingToken,

    #[error("DISCORD_GUILD_ID must be a numeric guild id, got '{0}'")]
    InvalidGuildId(String),

    #[error("COMMAND_PREFIX must not be empty")]
    EmptyPrefix,
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid token provided")]
    InvalidToken,

    #[error("Failed to start bot: {0}")]
    Client(serenity::Error),
}

impl From<serenity::Error> for StartupError {
    fn from(err: serenity::Error) -> Self {
        if is_authentication_failure(&err) {
            StartupError::InvalidToken
        } else {
            StartupError::Client(err)
        }
    }
}

/// Discord rejects a bad token either on the gateway handshake or with a 401
/// when the client fetches the gateway URL.
fn is_authentication_failure(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Gateway(GatewayError::InvalidAuthentication) => true,
        serenity::Error::Http(http) => matches!(
            http.as_ref(),
            HttpError::UnsuccessfulRequest(response) if response.status_code.as_u16() == 401
        ),
        _ => false,
    }
}

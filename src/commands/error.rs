//! Command failure classification
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: NotFound, MissingArgument, MissingPermissions and catch-all Other

use log::{debug, error};
use serenity::model::permissions::Permissions;
use thiserror::Error;

/// Why a text command invocation did not produce a reply
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Command not found: {name}")]
    NotFound { name: String },

    #[error("Missing required argument: {param}")]
    MissingArgument { param: &'static str },

    #[error("Missing permissions: {permissions:?}")]
    MissingPermissions { permissions: Permissions },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CommandError {
    /// Text shown to the invoking user
    pub fn user_message(&self, prefix: &str) -> String {
        match self {
            CommandError::NotFound { .. } => {
                format!("Command not found. Use `{prefix}help` to see available commands.")
            }
            CommandError::MissingArgument { param } => {
                format!("Missing required argument: {param}")
            }
            CommandError::MissingPermissions { .. } => {
                "You do not have permission to use this command.".to_string()
            }
            CommandError::Other(_) => "An error occurred while processing the command.".to_string(),
        }
    }
}

/// Global error hook for text commands: log what needs logging and return
/// the reply for the user.
pub fn on_command_error(request_id: &str, err: &CommandError, prefix: &str) -> String {
    match err {
        CommandError::Other(source) => error!("[{request_id}] Unhandled error: {source:?}"),
        classified => debug!("[{request_id}] {classified}"),
    }
    err.user_message(prefix)
}

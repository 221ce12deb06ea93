//! # Slash Commands (/)
//!
//! Discord native slash command definitions and publishing.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

use anyhow::Result;
use log::info;
use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::Command;
use serenity::model::id::GuildId;
use serenity::prelude::Context;

use super::context::CommandKind;
use super::registry::SlashRegistry;

/// Creates slash command definitions for every registered slash handler
pub fn create_slash_commands(registry: &SlashRegistry) -> Vec<CreateApplicationCommand> {
    registry
        .summaries(CommandKind::Slash)
        .into_iter()
        .map(|summary| {
            CreateApplicationCommand::default()
                .name(summary.name)
                .description(summary.description)
                .to_owned()
        })
        .collect()
}

/// Registers all slash commands globally
///
/// Returns the number of commands Discord accepted.
pub async fn register_global_commands(ctx: &Context, registry: &SlashRegistry) -> Result<usize> {
    let slash_commands = create_slash_commands(registry);

    let synced = Command::set_global_application_commands(&ctx.http, |commands| {
        for command in slash_commands {
            commands.add_application_command(command);
        }
        commands
    })
    .await?;

    info!(
        "Global slash commands registered successfully ({} commands)",
        synced.len()
    );
    Ok(synced.len())
}

/// Registers all slash commands for a specific guild (faster for testing)
pub async fn register_guild_commands(
    ctx: &Context,
    guild_id: GuildId,
    registry: &SlashRegistry,
) -> Result<usize> {
    let slash_commands = create_slash_commands(registry);

    let synced = guild_id
        .set_application_commands(&ctx.http, |commands| {
            for command in slash_commands {
                commands.add_application_command(command);
            }
            commands
        })
        .await?;

    info!(
        "Guild slash commands registered for guild {} ({} commands)",
        guild_id,
        synced.len()
    );
    Ok(synced.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::handlers::create_slash_registry;

    #[test]
    fn test_create_slash_commands() {
        let commands = create_slash_commands(&create_slash_registry());
        assert_eq!(commands.len(), 2);

        let command_names: Vec<String> = commands
            .iter()
            .map(|cmd| cmd.0.get("name").unwrap().as_str().unwrap().to_string())
            .collect();

        for expected in ["info", "ping"] {
            assert!(
                command_names.contains(&expected.to_string()),
                "Missing command: {expected}"
            );
        }
    }

    #[test]
    fn test_slash_commands_have_descriptions() {
        for command in create_slash_commands(&create_slash_registry()) {
            let description = command.0.get("description").unwrap().as_str().unwrap();
            assert!(!description.is_empty());
        }
    }
}

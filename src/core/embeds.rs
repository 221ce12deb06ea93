//! Embed builders for Discord responses
//!
//! Embeds are described as plain values first and only turned into a serenity
//! `CreateEmbed` when the reply is sent, so handlers stay testable.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Info and help embeds

use serenity::builder::CreateEmbed;
use serenity::model::Timestamp;

use crate::commands::context::{CommandKind, CommandSummary};
use crate::session::SessionStats;

/// Blue accent of the info card
pub const INFO_COLOR: u32 = 0x3498DB;
pub const HELP_COLOR: u32 = 0x0099FF;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedReply {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub timestamp: bool,
}

impl EmbedReply {
    pub fn new(title: impl Into<String>, description: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            color,
            fields: Vec::new(),
            timestamp: false,
        }
    }

    pub fn inline_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline: true,
        });
        self
    }

    pub fn with_timestamp(mut self) -> Self {
        self.timestamp = true;
        self
    }

    /// Copy this description onto a serenity embed builder
    pub fn apply<'a>(&self, embed: &'a mut CreateEmbed) -> &'a mut CreateEmbed {
        embed
            .title(&self.title)
            .description(&self.description)
            .color(self.color);
        for field in &self.fields {
            embed.field(&field.name, &field.value, field.inline);
        }
        if self.timestamp {
            embed.timestamp(Timestamp::now());
        }
        embed
    }
}

/// Build the `/info` embed: guild count, user count and latency, in that order.
pub fn info_embed(stats: &SessionStats) -> EmbedReply {
    EmbedReply::new("Bot Information", "A Discord bot template", INFO_COLOR)
        .inline_field("Guilds", stats.guild_count.to_string())
        .inline_field("Users", stats.user_count.to_string())
        .inline_field("Latency", format!("{}ms", stats.latency_ms()))
        .with_timestamp()
}

/// Build the help embed listing every registered command.
pub fn help_embed(prefix: &str, catalog: &[CommandSummary]) -> EmbedReply {
    let mut embed = EmbedReply::new("Bot Commands", "Available commands:", HELP_COLOR);
    for summary in catalog {
        let description = match summary.kind {
            CommandKind::Text => summary.description.to_string(),
            CommandKind::Slash => format!("{} (slash command)", summary.description),
        };
        embed = embed.inline_field(summary.display_name(prefix), description);
    }
    embed.with_timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_info_embed_has_three_fields() {
        let stats = SessionStats {
            latency: Some(Duration::from_millis(42)),
            guild_count: 3,
            user_count: 120,
        };
        let embed = info_embed(&stats);

        assert_eq!(embed.title, "Bot Information");
        assert_eq!(embed.color, INFO_COLOR);
        assert!(embed.timestamp);

        let fields: Vec<(&str, &str)> = embed
            .fields
            .iter()
            .map(|f| (f.name.as_str(), f.value.as_str()))
            .collect();
        assert_eq!(
            fields,
            vec![("Guilds", "3"), ("Users", "120"), ("Latency", "42ms")]
        );
        assert!(embed.fields.iter().all(|f| f.inline));
    }

    #[test]
    fn test_info_embed_unknown_latency() {
        let embed = info_embed(&SessionStats::default());
        assert_eq!(embed.fields[2].value, "0ms");
    }

    #[test]
    fn test_help_embed_marks_slash_commands() {
        let catalog = vec![
            CommandSummary {
                kind: CommandKind::Text,
                name: "ping",
                description: "Check bot latency",
            },
            CommandSummary {
                kind: CommandKind::Slash,
                name: "info",
                description: "Get bot information",
            },
        ];
        let embed = help_embed("!", &catalog);

        assert_eq!(embed.title, "Bot Commands");
        assert_eq!(embed.fields[0].name, "!ping");
        assert_eq!(embed.fields[0].value, "Check bot latency");
        assert_eq!(embed.fields[1].name, "/info");
        assert_eq!(embed.fields[1].value, "Get bot information (slash command)");
    }

    #[test]
    fn test_apply_copies_fields_onto_builder() {
        let stats = SessionStats {
            latency: Some(Duration::from_millis(42)),
            guild_count: 3,
            user_count: 120,
        };
        let mut builder = CreateEmbed::default();
        info_embed(&stats).apply(&mut builder);

        assert_eq!(builder.0["title"], "Bot Information");
        assert_eq!(builder.0["description"], "A Discord bot template");
        assert_eq!(builder.0["color"], INFO_COLOR);
        assert!(builder.0.contains_key("timestamp"));

        let fields = builder.0["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0]["name"], "Guilds");
        assert_eq!(fields[0]["value"], "3");
        assert_eq!(fields[2]["name"], "Latency");
        assert_eq!(fields[2]["value"], "42ms");
        assert_eq!(fields[2]["inline"], true);
    }
}

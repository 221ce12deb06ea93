//! Outbound replies and how they reach Discord

use anyhow::Result;
use serenity::http::Http;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::model::id::ChannelId;

use crate::core::EmbedReply;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Embed(EmbedReply),
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Reply::Text(content.into())
    }

    /// Plain text content, if this is a text reply
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Reply::Text(content) => Some(content),
            Reply::Embed(_) => None,
        }
    }
}

/// Send a reply into a channel
pub async fn send_to_channel(http: &Http, channel_id: ChannelId, reply: &Reply) -> Result<()> {
    match reply {
        Reply::Text(content) => {
            channel_id.say(http, content).await?;
        }
        Reply::Embed(embed) => {
            channel_id
                .send_message(http, |m| m.embed(|e| embed.apply(e)))
                .await?;
        }
    }
    Ok(())
}

/// Answer a slash command interaction
pub async fn respond_to_interaction(
    http: &Http,
    command: &ApplicationCommandInteraction,
    reply: &Reply,
    ephemeral: bool,
) -> Result<()> {
    command
        .create_interaction_response(http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|message| {
                    match reply {
                        Reply::Text(content) => message.content(content),
                        Reply::Embed(embed) => message.embed(|e| embed.apply(e)),
                    };
                    message.ephemeral(ephemeral)
                })
        })
        .await?;
    Ok(())
}

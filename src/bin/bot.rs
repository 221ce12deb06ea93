use anyhow::Result;
use dotenvy::dotenv;
use log::{debug, error, info, warn};
use serenity::async_trait;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::Interaction;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::model::permissions::Permissions;
use serenity::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use beacon::commands::{
    build_catalog, create_slash_registry, create_text_registry, on_command_error,
    register_global_commands, register_guild_commands, respond_to_interaction, route_message,
    send_to_channel, CommandContext, CommandRegistry, CommandSummary, Invocation, Reply, Route,
    SlashRegistry,
};
use beacon::core::config::log_level_from_env;
use beacon::core::{Config, StartupError};
use beacon::session::channel_permissions;
use beacon::shutdown::wait_for_shutdown_signal;
use beacon::{SessionStats, ShardManagerContainer};

struct Handler {
    text_commands: CommandRegistry,
    slash_commands: SlashRegistry,
    catalog: Arc<[CommandSummary]>,
    prefix: String,
    guild_id: Option<GuildId>,
}

impl Handler {
    fn new(config: &Config, text_commands: CommandRegistry, slash_commands: SlashRegistry) -> Self {
        let catalog = build_catalog(&text_commands, &slash_commands);
        Handler {
            text_commands,
            slash_commands,
            catalog,
            prefix: config.command_prefix.clone(),
            guild_id: config.discord_guild_id.map(GuildId),
        }
    }

    async fn command_context(&self, ctx: &Context) -> CommandContext {
        CommandContext::new(
            self.prefix.clone(),
            SessionStats::capture(ctx).await,
            Arc::clone(&self.catalog),
        )
    }

    /// Author permissions, only resolved when the command asks for some
    async fn author_permissions(&self, ctx: &Context, msg: &Message, command: &str) -> Permissions {
        if self.text_commands.required_permissions(command).is_empty() {
            return Permissions::empty();
        }

        channel_permissions(ctx, msg).await
    }

    async fn handle_slash_command(
        &self,
        ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let name = command.data.name.as_str();
        let Some(handler) = self.slash_commands.get(name) else {
            warn!("Unknown slash command: /{name}");
            return respond_to_interaction(&ctx.http, command, &Reply::text("Unknown command!"), true)
                .await;
        };

        let command_ctx = self.command_context(ctx).await;
        let reply = handler.handle(&command_ctx, name).await?;
        respond_to_interaction(&ctx.http, command, &reply, false).await?;
        info!("/{name} command completed for user {}", command.user.id);
        Ok(())
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        let bot_id = ctx.cache.current_user_id();
        let parsed = match route_message(msg.author.id, bot_id, &msg.content, &self.prefix) {
            Route::OwnMessage | Route::NotACommand => return,
            Route::Dispatch(parsed) => parsed,
        };

        let request_id = Uuid::new_v4().to_string();
        info!(
            "[{}] 📥 Command received | User: {} | Channel: {} | Command: '{}' | Args: {}",
            request_id,
            msg.author.id,
            msg.channel_id,
            parsed.name,
            parsed.args.len()
        );

        let permissions = self.author_permissions(&ctx, &msg, &parsed.name).await;
        let invocation = Invocation::from_message(&msg, parsed, permissions);
        let command_ctx = self.command_context(&ctx).await;

        let reply = match self.text_commands.dispatch(&command_ctx, &invocation).await {
            Ok(reply) => reply,
            Err(e) => Reply::Text(on_command_error(&request_id, &e, &self.prefix)),
        };

        debug!("[{request_id}] 📤 Sending reply to Discord");
        if let Err(e) = send_to_channel(&ctx.http, msg.channel_id, &reply).await {
            error!("[{request_id}] Failed to send reply: {e}");
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("✓ Logged in as {}", ready.user.name);
        info!("✓ Bot is in {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);

        // Guild commands update instantly; global ones can take up to an hour
        let synced = if let Some(guild_id) = self.guild_id {
            info!("🔧 Development mode: Registering commands for guild {guild_id}");
            register_guild_commands(&ctx, guild_id, &self.slash_commands).await
        } else {
            info!("🌍 Production mode: Registering commands globally");
            register_global_commands(&ctx, &self.slash_commands).await
        };

        match synced {
            Ok(count) => info!("✅ Synced {count} command(s)"),
            Err(e) => error!("❌ Failed to sync commands: {e}. Text commands remain available."),
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::ApplicationCommand(command) = interaction else {
            return;
        };

        if let Err(e) = self.handle_slash_command(&ctx, &command).await {
            error!(
                "Error handling slash command '{}': {:?}",
                command.data.name, e
            );

            let error_reply = Reply::text("There was an error executing this command!");
            if let Err(why) = respond_to_interaction(&ctx.http, &command, &error_reply, true).await {
                // The interaction may already have been answered
                debug!("Initial error response failed: {why}");
                if let Err(why) = command
                    .create_followup_message(&ctx.http, |m| {
                        m.content("There was an error executing this command!")
                            .ephemeral(true)
                    })
                    .await
                {
                    error!("Failed to send error message: {why}");
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level_from_env()))
        .init();

    let config = Config::from_env().map_err(|e| {
        error!("{e}");
        StartupError::from(e)
    })?;

    info!("Starting Discord bot...");
    debug!("Loaded configuration: {config:?}");

    let handler = Handler::new(&config, create_text_registry(), create_slash_registry());

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            let err = StartupError::from(e);
            error!("Failed to create Discord client: {err}");
            err
        })?;

    {
        let mut data = client.data.write().await;
        data.insert::<ShardManagerContainer>(client.shard_manager.clone());
    }

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        let signal = match wait_for_shutdown_signal().await {
            Ok(signal) => signal,
            Err(e) => {
                error!("Could not register shutdown signal handlers: {e}");
                return;
            }
        };
        info!("Received {signal}, shutting down gracefully...");
        shard_manager.lock().await.shutdown_all().await;
    });

    info!("Establishing WebSocket connection to Discord gateway...");
    info!("Gateway intents: {intents:?}");

    if let Err(why) = client.start().await {
        let err = StartupError::from(why);
        error!("{err}");
        return Err(err.into());
    }

    info!("Bot stopped");
    Ok(())
}

//! # Session snapshot
//!
//! Read-only view of the live gateway connection: shard latency, cached guild
//! and user counts, the bot's own identity, and an author's channel
//! permissions.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

use log::{debug, warn};
use serenity::client::bridge::gateway::{ShardId, ShardManager};
use serenity::model::channel::Message;
use serenity::model::id::UserId;
use serenity::model::permissions::Permissions;
use serenity::prelude::{Context, Mutex, TypeMapKey};
use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;

/// TypeMap key giving handlers access to the shard manager
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<Mutex<ShardManager>>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Heartbeat round trip; `None` until the first heartbeat is acknowledged
    pub latency: Option<Duration>,
    pub guild_count: usize,
    pub user_count: usize,
}

impl SessionStats {
    /// Latency rounded to whole milliseconds, 0 while unknown
    pub fn latency_ms(&self) -> u64 {
        self.latency
            .map(|latency| (latency.as_secs_f64() * 1000.0).round() as u64)
            .unwrap_or(0)
    }

    /// Snapshot the current connection state
    pub async fn capture(ctx: &Context) -> Self {
        SessionStats {
            latency: shard_latency(ctx).await,
            guild_count: ctx.cache.guild_count(),
            user_count: ctx.cache.user_count(),
        }
    }
}

/// Heartbeat latency of the shard this context belongs to
pub async fn shard_latency(ctx: &Context) -> Option<Duration> {
    let data = ctx.data.read().await;
    let Some(shard_manager) = data.get::<ShardManagerContainer>() else {
        debug!("Shard manager not registered, latency unavailable");
        return None;
    };

    let manager = shard_manager.lock().await;
    let runners = manager.runners.lock().await;
    runners
        .get(&ShardId(ctx.shard_id))
        .and_then(|runner| runner.latency)
}

/// Whether a message was authored by the bot itself
pub fn is_own_message(author_id: UserId, bot_id: UserId) -> bool {
    author_id == bot_id
}

/// Author's effective permissions in the message's channel, overwrites included.
///
/// Empty in DMs and whenever the guild, channel or member cannot be resolved.
pub async fn channel_permissions(ctx: &Context, msg: &Message) -> Permissions {
    let Some(guild) = msg.guild(&ctx.cache) else {
        return Permissions::empty();
    };

    let channel = match msg.channel(ctx).await {
        Ok(channel) => channel.guild(),
        Err(e) => {
            warn!("Could not resolve channel {}: {e}", msg.channel_id);
            return Permissions::empty();
        }
    };
    let Some(channel) = channel else {
        warn!("Channel {} is not a guild channel", msg.channel_id);
        return Permissions::empty();
    };

    let member = match msg.member(ctx).await {
        Ok(member) => member,
        Err(e) => {
            warn!("Could not resolve member for {}: {e}", msg.author.id);
            return Permissions::empty();
        }
    };

    permissions_or_empty(guild.user_permissions_in(&channel, &member), msg.author.id)
}

/// Unwrap a permission lookup, denying everything on failure
pub fn permissions_or_empty<E: Display>(
    result: Result<Permissions, E>,
    user_id: UserId,
) -> Permissions {
    result.unwrap_or_else(|e| {
        warn!("Could not compute permissions for {user_id}: {e}");
        Permissions::empty()
    })
}

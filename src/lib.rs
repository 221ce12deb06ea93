// Core layer - configuration, startup errors, embeds
pub mod core;

// Live connection snapshot
pub mod session;

// Process signal handling
pub mod shutdown;

// Application layer
pub mod commands;

pub use crate::core::Config;
pub use session::{SessionStats, ShardManagerContainer};

use std::sync::Arc;

use serenity::all::{Context, EventHandler, Message, Ready};
use serenity::async_trait;

use crate::state::BotState;

pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: Arc<BotState>,
    pub command_prefix: Option<String>,
}

impl Handler {
    pub fn new(state: Arc<BotState>, command_prefix: Option<String>) -> Self {
        Self {
            state,
            command_prefix,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.state, self.command_prefix.as_deref(), ctx, message).await;
    }
}

//! Command parsing, precondition checks and handlers.
//!
//! This layer is independent of serenity's gateway types: the event handler resolves a
//! message into an `Invocation` and a parsed `Command`, and answers guild lookups
//! through the `GuildAccess` trait. That keeps every lobby and configuration rule
//! testable without a Discord connection.

pub mod check;
pub mod configure;
pub mod dispatch;
pub mod general;
pub mod lobby;
pub mod parse;

#[cfg(test)]
mod test;

use serenity::async_trait;

use crate::model::command::Reply;

/// Guild lookups the command layer needs from the chat platform.
pub trait GuildAccess: Sync {
    /// Whether the bot can both read and send messages in the channel.
    ///
    /// Returns `false` for channels that do not belong to the guild.
    fn bot_can_use_channel(&self, guild_id: u64, channel_id: u64) -> bool;

    /// Whether the role exists in the guild.
    fn role_exists(&self, guild_id: u64, role_id: u64) -> bool;
}

/// Delivers replies on behalf of the dispatcher.
///
/// Replies are sent while the guild's lock is still held, so they reach the channel in
/// the same order the commands ran.
#[async_trait]
pub trait ReplySink: Sync {
    async fn send(&self, reply: Reply);
}

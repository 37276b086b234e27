//! Discord integration for the lobby bot.
//!
//! `start` builds the serenity client, `handler` receives gateway events and turns
//! messages into command invocations, and `command` holds the platform-independent
//! command layer those invocations run through.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Populates the cache with guild channels, roles and permissions
//! - `GUILD_MESSAGES` - Receive messages sent in guild channels
//! - `MESSAGE_CONTENT` - Read message text to parse commands (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled in
//! the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;

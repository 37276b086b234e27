//! Shared state owned by the bot.
//!
//! `BotState` is built once in `main` and shared with the serenity event handler behind
//! an `Arc`. It replaces any process-wide globals: the configuration cache, the lobby
//! registry, the per-guild locks and the clock all live here and are handed to the
//! command layer by reference.

use std::sync::Arc;

use crate::{
    config::Config,
    service::{guild_config::GuildConfigStore, guild_lock::GuildLocks, lobby::LobbyRegistry},
    util::clock::Clock,
};

/// Guilds the bot is allowed to operate in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuildScope {
    /// Production: every guild the bot is a member of.
    All,
    /// Development: a single test guild.
    Only(u64),
}

impl GuildScope {
    pub fn from_config(config: &Config) -> Self {
        match (config.production, config.dev_guild_id) {
            (false, Some(guild_id)) => GuildScope::Only(guild_id),
            _ => GuildScope::All,
        }
    }

    pub fn allows(&self, guild_id: u64) -> bool {
        match self {
            GuildScope::All => true,
            GuildScope::Only(allowed) => *allowed == guild_id,
        }
    }
}

pub struct BotState {
    pub config_store: GuildConfigStore,
    pub lobbies: LobbyRegistry,
    pub guild_locks: GuildLocks,
    pub scope: GuildScope,
    pub clock: Arc<dyn Clock>,
}

impl BotState {
    pub fn new(config_store: GuildConfigStore, scope: GuildScope, clock: Arc<dyn Clock>) -> Self {
        Self {
            config_store,
            lobbies: LobbyRegistry::new(),
            guild_locks: GuildLocks::new(),
            scope,
            clock,
        }
    }
}

//! Registry of active lobbies, one per guild.
//!
//! Nothing here is persisted; a restart drops every lobby. Expiry is lazy: each access
//! first cleans up the guild's lobby, deleting it if its 24 hours have passed and
//! otherwise dropping queue entries older than 2 hours. There is no background sweep,
//! so an expired lobby stays in memory until its guild is next accessed.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{
    error::lobby::LobbyError,
    model::lobby::{JoinOutcome, LobbyState},
};

#[derive(Default)]
pub struct LobbyRegistry {
    lobbies: Mutex<HashMap<u64, LobbyState>>,
}

impl LobbyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lobbies(&self) -> MutexGuard<'_, HashMap<u64, LobbyState>> {
        self.lobbies.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs lazy cleanup for a guild and returns its lobby if one is still open.
    fn active(
        lobbies: &mut HashMap<u64, LobbyState>,
        guild_id: u64,
        now: DateTime<Utc>,
    ) -> Option<&mut LobbyState> {
        let expired = lobbies.get_mut(&guild_id)?.clean_up(now);

        if expired {
            lobbies.remove(&guild_id);
            tracing::debug!("Lobby for guild {} expired", guild_id);
            return None;
        }

        lobbies.get_mut(&guild_id)
    }

    /// Reports whether the guild has an open lobby, after cleanup.
    pub fn exists(&self, guild_id: u64, now: DateTime<Utc>) -> bool {
        Self::active(&mut self.lobbies(), guild_id, now).is_some()
    }

    /// Opens a lobby for the guild.
    ///
    /// # Arguments
    /// - `queue_size` - Number of members that fills the lobby; fixed for its lifetime
    ///
    /// # Returns
    /// - `Ok(())` - Lobby created
    /// - `Err(LobbyError::AlreadyExists)` - The guild still has an open lobby
    pub fn create(
        &self,
        guild_id: u64,
        queue_size: u32,
        now: DateTime<Utc>,
    ) -> Result<(), LobbyError> {
        let mut lobbies = self.lobbies();

        if Self::active(&mut lobbies, guild_id, now).is_some() {
            return Err(LobbyError::AlreadyExists(guild_id));
        }

        lobbies.insert(guild_id, LobbyState::new(guild_id, queue_size, now));
        tracing::info!(
            "Lobby created for guild {} with queue size {}",
            guild_id,
            queue_size
        );

        Ok(())
    }

    /// Queues a member, or refreshes their entry if already queued.
    ///
    /// When the join fills the lobby, the lobby is removed from the registry and every
    /// queued member is returned in `JoinOutcome::Popped`.
    ///
    /// # Returns
    /// - `Ok(JoinOutcome)` - What happened to the member and the lobby
    /// - `Err(LobbyError::NotFound)` - The guild has no open lobby
    pub fn join(
        &self,
        guild_id: u64,
        member_id: u64,
        now: DateTime<Utc>,
    ) -> Result<JoinOutcome, LobbyError> {
        let mut lobbies = self.lobbies();
        let lobby =
            Self::active(&mut lobbies, guild_id, now).ok_or(LobbyError::NotFound(guild_id))?;

        let outcome = lobby.join(member_id, now);
        if outcome == JoinOutcome::AlreadyQueued || !lobby.is_full() {
            return Ok(outcome);
        }

        let members = lobby.member_ids();
        lobbies.remove(&guild_id);
        tracing::info!(
            "Lobby for guild {} filled with {} member(s)",
            guild_id,
            members.len()
        );

        Ok(JoinOutcome::Popped { members })
    }

    /// Removes a member's queue entry. Removing an absent member is a no-op.
    pub fn leave(
        &self,
        guild_id: u64,
        member_id: u64,
        now: DateTime<Utc>,
    ) -> Result<(), LobbyError> {
        let mut lobbies = self.lobbies();
        let lobby =
            Self::active(&mut lobbies, guild_id, now).ok_or(LobbyError::NotFound(guild_id))?;

        lobby.leave(member_id);

        Ok(())
    }

    /// Gets the number of live queue entries.
    pub fn query(&self, guild_id: u64, now: DateTime<Utc>) -> Result<usize, LobbyError> {
        let mut lobbies = self.lobbies();
        let lobby =
            Self::active(&mut lobbies, guild_id, now).ok_or(LobbyError::NotFound(guild_id))?;

        Ok(lobby.queue.len())
    }

    /// Gets a copy of the guild's lobby without running cleanup.
    #[cfg(test)]
    pub fn snapshot(&self, guild_id: u64) -> Option<LobbyState> {
        self.lobbies().get(&guild_id).cloned()
    }
}

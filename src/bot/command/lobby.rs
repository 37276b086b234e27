//! Lobby command handlers: host, join, leave and query.

use chrono::{DateTime, Utc};
use serenity::all::{Mentionable, UserId};

use crate::{
    error::command::CommandError,
    model::{
        command::Reply,
        guild_config::{GuildConfig, DEFAULT_QUEUE_SIZE},
        lobby::JoinOutcome,
    },
    state::BotState,
};

pub struct LobbyCommands<'a> {
    state: &'a BotState,
    guild_id: u64,
    now: DateTime<Utc>,
}

impl<'a> LobbyCommands<'a> {
    pub fn new(state: &'a BotState, guild_id: u64, now: DateTime<Utc>) -> Self {
        Self {
            state,
            guild_id,
            now,
        }
    }

    /// Opens a lobby sized from the guild's current default queue size.
    pub fn host(&self, config: Option<&GuildConfig>) -> Result<Vec<Reply>, CommandError> {
        let queue_size = config.map_or(DEFAULT_QUEUE_SIZE, GuildConfig::queue_size);

        self.state
            .lobbies
            .create(self.guild_id, queue_size, self.now)?;

        Ok(vec![Reply::message("Lobby created!")])
    }

    /// Queues the member. A join that fills the lobby also announces the full lobby.
    pub fn join(&self, member_id: u64) -> Result<Vec<Reply>, CommandError> {
        let outcome = self.state.lobbies.join(self.guild_id, member_id, self.now)?;

        let replies = match outcome {
            JoinOutcome::AlreadyQueued => {
                vec![Reply::message("You are already part of the queue!")]
            }
            JoinOutcome::Joined => {
                vec![Reply::message("You have successfully joined the queue!")]
            }
            JoinOutcome::Popped { members } => vec![
                Reply::message("You have successfully joined the queue!"),
                Reply::message(format!("{} Full lobby. Start game!", mention_all(&members))),
            ],
        };

        Ok(replies)
    }

    pub fn leave(&self, member_id: u64) -> Result<Vec<Reply>, CommandError> {
        self.state
            .lobbies
            .leave(self.guild_id, member_id, self.now)?;

        Ok(vec![Reply::message("You are no longer part of the queue!")])
    }

    pub fn query(&self) -> Result<Vec<Reply>, CommandError> {
        let count = self.state.lobbies.query(self.guild_id, self.now)?;

        Ok(vec![Reply::message(format!(
            "Currently there are {} players in the lobby.",
            count
        ))])
    }
}

fn mention_all(members: &[u64]) -> String {
    members
        .iter()
        .map(|id| UserId::new(*id).mention().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

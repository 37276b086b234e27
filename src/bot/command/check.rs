//! Command preconditions.
//!
//! Each command declares an ordered list of preconditions. The dispatcher evaluates
//! them in order before running the handler and stops at the first denial.

use chrono::{DateTime, Utc};

use crate::{
    error::command::Denied,
    model::{
        command::{Command, Invocation},
        guild_config::GuildConfig,
    },
    state::BotState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    /// Guild is within the bot's operating scope.
    AllowedGuild,
    /// Command was sent in the guild's queue channel.
    QueueChannel,
    /// Author holds the guild's host role, if one is configured.
    HostRole,
    /// Author holds Manage Server.
    ManageGuild,
    LobbyExists,
    LobbyNotExists,
}

/// Everything a precondition may inspect.
pub struct CheckContext<'a> {
    pub state: &'a BotState,
    pub invocation: &'a Invocation,
    pub guild_id: u64,
    pub config: Option<&'a GuildConfig>,
    pub now: DateTime<Utc>,
}

impl Precondition {
    pub fn check(self, ctx: &CheckContext<'_>) -> Result<(), Denied> {
        match self {
            Precondition::AllowedGuild => {
                require(ctx.state.scope.allows(ctx.guild_id), Denied::GuildNotAllowed)
            }
            Precondition::QueueChannel => {
                let queue_channel = ctx
                    .config
                    .and_then(|config| config.queue_channel_id)
                    .ok_or(Denied::QueueChannelUnset)?;
                require(
                    queue_channel == ctx.invocation.channel_id,
                    Denied::WrongChannel,
                )
            }
            Precondition::HostRole => {
                let host_role = ctx.config.and_then(|config| config.host_role_id);
                require(
                    host_role.is_none_or(|role_id| ctx.invocation.has_role(role_id)),
                    Denied::MissingHostRole,
                )
            }
            Precondition::ManageGuild => require(
                ctx.invocation.author_can_manage_guild,
                Denied::MissingManageGuild,
            ),
            Precondition::LobbyExists => require(
                ctx.state.lobbies.exists(ctx.guild_id, ctx.now),
                Denied::NoLobby,
            ),
            Precondition::LobbyNotExists => require(
                !ctx.state.lobbies.exists(ctx.guild_id, ctx.now),
                Denied::LobbyExists,
            ),
        }
    }
}

fn require(allowed: bool, denied: Denied) -> Result<(), Denied> {
    if allowed {
        Ok(())
    } else {
        Err(denied)
    }
}

/// Preconditions for a command, in evaluation order.
pub fn preconditions(command: &Command) -> &'static [Precondition] {
    use Precondition::*;

    match command {
        Command::Configure { .. } => &[AllowedGuild, ManageGuild],
        Command::Host => &[AllowedGuild, QueueChannel, HostRole, LobbyNotExists],
        Command::Join | Command::Leave | Command::Query => {
            &[AllowedGuild, QueueChannel, LobbyExists]
        }
        Command::Echo(_) | Command::Help => &[AllowedGuild],
    }
}

/// Evaluates preconditions in order, stopping at the first denial.
pub fn run_checks(preconditions: &[Precondition], ctx: &CheckContext<'_>) -> Result<(), Denied> {
    preconditions
        .iter()
        .try_for_each(|precondition| precondition.check(ctx))
}

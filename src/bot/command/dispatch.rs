//! Runs a parsed command against the bot state.

use crate::{
    bot::command::{
        check::{preconditions, run_checks, CheckContext},
        configure::ConfigureCommand,
        general,
        lobby::LobbyCommands,
        GuildAccess, ReplySink,
    },
    error::{
        command::{CommandError, Denied},
        AppError,
    },
    model::command::{Command, Invocation, Reply},
    state::BotState,
};

const FAILURE_REPLY: &str = "Something went wrong, please try again later.";

pub struct CommandDispatcher<'a> {
    state: &'a BotState,
}

impl<'a> CommandDispatcher<'a> {
    pub fn new(state: &'a BotState) -> Self {
        Self { state }
    }

    /// Checks a command's preconditions, runs it and delivers its replies.
    ///
    /// The guild's lock is held from the first precondition until the last reply has
    /// been sent, so commands within one guild never interleave.
    ///
    /// # Arguments
    /// - `invocation` - Who sent the command and where
    /// - `command` - The parsed command
    /// - `access` - Guild lookups for argument validation
    /// - `sink` - Receives the command's replies, none when the command was dropped
    ///
    /// # Returns
    /// - `Ok(())` - The command ran or was dropped
    /// - `Err(AppError)` - The command failed internally; the sink received a
    ///   generic failure reply
    pub async fn dispatch(
        &self,
        invocation: &Invocation,
        command: Command,
        access: &dyn GuildAccess,
        sink: &dyn ReplySink,
    ) -> Result<(), AppError> {
        let Some(guild_id) = invocation.guild_id else {
            tracing::debug!("Dropping `{}`: {}", command.name(), Denied::NotInGuild);
            return Ok(());
        };

        let _guard = self.state.guild_locks.acquire(guild_id).await;

        let replies = match self.execute(invocation, guild_id, command, access).await {
            Ok(replies) => replies,
            Err(err) => {
                sink.send(Reply::ephemeral(FAILURE_REPLY)).await;
                return Err(err);
            }
        };

        for reply in replies {
            sink.send(reply).await;
        }

        Ok(())
    }

    async fn execute(
        &self,
        invocation: &Invocation,
        guild_id: u64,
        command: Command,
        access: &dyn GuildAccess,
    ) -> Result<Vec<Reply>, AppError> {
        let now = self.state.clock.now();
        let config = self.state.config_store.get(guild_id).await;

        let ctx = CheckContext {
            state: self.state,
            invocation,
            guild_id,
            config: config.as_ref(),
            now,
        };

        let result = match run_checks(preconditions(&command), &ctx) {
            Ok(()) => self.run(&command, access, &ctx).await,
            Err(denied) => Err(CommandError::Denied(denied)),
        };

        match result {
            Ok(replies) => Ok(replies),
            Err(CommandError::Validation(message)) => Ok(vec![Reply::ephemeral(message)]),
            Err(CommandError::Denied(Denied::QueueChannelUnset)) => {
                Ok(vec![Reply::ephemeral(
                    "No queue channel is set up for this server. An administrator needs to run `configure queue_channel <#channel>` first.",
                )])
            }
            Err(CommandError::Denied(denied)) => {
                tracing::debug!(
                    "Dropping `{}` in guild {}: {}",
                    command.name(),
                    guild_id,
                    denied
                );
                Ok(Vec::new())
            }
            Err(CommandError::Lobby(err)) => {
                tracing::debug!("Dropping `{}`: {}", command.name(), err);
                Ok(Vec::new())
            }
            Err(CommandError::App(err)) => Err(err),
        }
    }

    async fn run(
        &self,
        command: &Command,
        access: &dyn GuildAccess,
        ctx: &CheckContext<'_>,
    ) -> Result<Vec<Reply>, CommandError> {
        let author_id = ctx.invocation.author_id;
        let lobbies = LobbyCommands::new(self.state, ctx.guild_id, ctx.now);

        match command {
            Command::Configure { setting, argument } => {
                ConfigureCommand::new(self.state, access, ctx.guild_id)
                    .run(setting.as_deref(), argument.as_deref())
                    .await
            }
            Command::Host => lobbies.host(ctx.config),
            Command::Join => lobbies.join(author_id),
            Command::Leave => lobbies.leave(author_id),
            Command::Query => lobbies.query(),
            Command::Echo(text) => general::echo(text),
            Command::Help => Ok(general::help()),
        }
    }
}

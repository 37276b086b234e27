use thiserror::Error;

use crate::error::{lobby::LobbyError, AppError};

/// Reasons a command precondition can refuse to run a command.
///
/// Denials are silent: the command is dropped without a reply. The one exception is
/// `QueueChannelUnset`, which tells the caller that the guild still needs setup.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denied {
    #[error("command was not sent from a guild")]
    NotInGuild,
    #[error("guild is outside the bot's operating scope")]
    GuildNotAllowed,
    #[error("no queue channel is configured")]
    QueueChannelUnset,
    #[error("command was sent outside the queue channel")]
    WrongChannel,
    #[error("author does not hold the host role")]
    MissingHostRole,
    #[error("author lacks the Manage Server permission")]
    MissingManageGuild,
    #[error("an active lobby already exists")]
    LobbyExists,
    #[error("there is no active lobby")]
    NoLobby,
}

/// Errors produced while running a single command.
///
/// The dispatcher decides what the user sees for each variant: validation errors are
/// answered with an ephemeral reply, denials and lobby mismatches are dropped, and
/// application errors abort the command with a generic failure reply.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Bad command argument. The message is shown to the user verbatim.
    #[error("{0}")]
    Validation(String),

    #[error("precondition failed: {0}")]
    Denied(#[from] Denied),

    #[error(transparent)]
    Lobby(#[from] LobbyError),

    /// Persistence or other internal failure.
    #[error(transparent)]
    App(#[from] AppError),
}

impl CommandError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<sea_orm::DbErr> for CommandError {
    fn from(err: sea_orm::DbErr) -> Self {
        CommandError::App(AppError::from(err))
    }
}

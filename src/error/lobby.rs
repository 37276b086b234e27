use thiserror::Error;

/// Lobby registry precondition mismatches.
///
/// These mirror the `lobby_exists` / `lobby_not_exists` checks and are normally caught
/// by them first. They surface here only if the registry state differs from what the
/// check observed, and like the checks they are dropped without a reply.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LobbyError {
    /// No active lobby exists for the guild.
    #[error("No active lobby for guild {0}")]
    NotFound(u64),

    /// The guild already has an active lobby.
    #[error("Guild {0} already has an active lobby")]
    AlreadyExists(u64),
}

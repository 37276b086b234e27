//! Platform-independent representation of a chat command and its replies.
//!
//! The serenity adapter turns a gateway message into an `Invocation` plus a parsed
//! `Command`; the dispatcher answers with a list of `Reply` values which the adapter
//! then delivers.

/// A recognized bot command with its raw arguments.
///
/// Arguments are kept as text so they are validated only after the command's
/// preconditions pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `configure [setting] [argument]`
    Configure {
        setting: Option<String>,
        argument: Option<String>,
    },
    Host,
    Join,
    Leave,
    Query,
    /// Hidden debug command.
    Echo(String),
    Help,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Configure { .. } => "configure",
            Command::Host => "host",
            Command::Join => "join",
            Command::Leave => "leave",
            Command::Query => "query",
            Command::Echo(_) => "echo",
            Command::Help => "help",
        }
    }
}

/// Who invoked a command and where.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// `None` for direct messages.
    pub guild_id: Option<u64>,
    pub channel_id: u64,
    pub author_id: u64,
    pub author_role_ids: Vec<u64>,
    /// Whether the author holds Manage Server (or Administrator) in the guild.
    pub author_can_manage_guild: bool,
}

impl Invocation {
    pub fn has_role(&self, role_id: u64) -> bool {
        self.author_role_ids.contains(&role_id)
    }
}

/// A message the bot sends in response to a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Regular message in the invoking channel.
    Message(String),
    /// Reply to the invoking message that is deleted shortly after.
    Ephemeral(String),
}

impl Reply {
    pub fn message(content: impl Into<String>) -> Self {
        Reply::Message(content.into())
    }

    pub fn ephemeral(content: impl Into<String>) -> Self {
        Reply::Ephemeral(content.into())
    }

    #[cfg(test)]
    pub fn content(&self) -> &str {
        match self {
            Reply::Message(content) | Reply::Ephemeral(content) => content,
        }
    }
}

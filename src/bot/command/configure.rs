//! The `configure` command.
//!
//! Every setting is validated before anything is written. A rejected argument is
//! answered with an ephemeral explanation and leaves both the cache and the database
//! untouched.

use serenity::all::{ChannelId, Mentionable, RoleId};

use crate::{
    bot::command::{
        parse::{parse_channel_argument, parse_role_argument},
        GuildAccess,
    },
    error::command::CommandError,
    model::{
        command::Reply,
        guild_config::{GuildConfig, GuildConfigUpdate, DEFAULT_QUEUE_SIZE},
    },
    state::BotState,
};

pub struct ConfigureCommand<'a> {
    state: &'a BotState,
    access: &'a dyn GuildAccess,
    guild_id: u64,
}

impl<'a> ConfigureCommand<'a> {
    pub fn new(state: &'a BotState, access: &'a dyn GuildAccess, guild_id: u64) -> Self {
        Self {
            state,
            access,
            guild_id,
        }
    }

    /// Runs `configure [setting] [argument]`.
    ///
    /// Without a setting the command answers with usage and the guild's current
    /// settings.
    ///
    /// # Returns
    /// - `Ok(replies)` - Settings were updated or help was shown
    /// - `Err(CommandError::Validation)` - Unknown setting or invalid argument
    /// - `Err(CommandError::App)` - The update could not be persisted
    pub async fn run(
        &self,
        setting: Option<&str>,
        argument: Option<&str>,
    ) -> Result<Vec<Reply>, CommandError> {
        let Some(setting) = setting else {
            let config = self.state.config_store.get(self.guild_id).await;
            return Ok(vec![Reply::ephemeral(usage(config.as_ref()))]);
        };

        let update = match setting {
            "default_queue_size" => self.default_queue_size(argument)?,
            "queue_channel" => self.queue_channel(argument)?,
            "host_role" => self.host_role(argument)?,
            other => {
                return Err(CommandError::validation(format!(
                    "Unknown setting `{}`. Available settings: default_queue_size, queue_channel, host_role.",
                    other
                )))
            }
        };

        self.state
            .config_store
            .upsert(self.guild_id, update)
            .await?;

        Ok(vec![Reply::ephemeral("Settings updated.")])
    }

    fn default_queue_size(&self, argument: Option<&str>) -> Result<GuildConfigUpdate, CommandError> {
        let argument = argument
            .ok_or_else(|| CommandError::validation("Default queue size must be greater than 0."))?;

        let size: i64 = argument.parse().map_err(|_| {
            CommandError::validation(format!("`{}` is not a valid queue size.", argument))
        })?;

        if size <= 0 {
            return Err(CommandError::validation(
                "Default queue size must be greater than 0.",
            ));
        }

        // Stored in a signed 32-bit column.
        let size = i32::try_from(size)
            .map(|size| size as u32)
            .map_err(|_| CommandError::validation("Default queue size is too large."))?;

        Ok(GuildConfigUpdate::DefaultQueueSize(size))
    }

    fn queue_channel(&self, argument: Option<&str>) -> Result<GuildConfigUpdate, CommandError> {
        let channel_id = argument
            .and_then(parse_channel_argument)
            .ok_or_else(|| CommandError::validation("Please mention a text channel, e.g. `#lobby`."))?;

        if !self.access.bot_can_use_channel(self.guild_id, channel_id) {
            return Err(CommandError::validation(format!(
                "Bot does not have permissions for: {}",
                ChannelId::new(channel_id).mention()
            )));
        }

        Ok(GuildConfigUpdate::QueueChannel(channel_id))
    }

    fn host_role(&self, argument: Option<&str>) -> Result<GuildConfigUpdate, CommandError> {
        let argument = match argument {
            None => return Ok(GuildConfigUpdate::HostRole(None)),
            Some(arg) if arg.eq_ignore_ascii_case("clear") || arg.eq_ignore_ascii_case("none") => {
                return Ok(GuildConfigUpdate::HostRole(None))
            }
            Some(arg) => arg,
        };

        let role_id = parse_role_argument(argument)
            .filter(|role_id| self.access.role_exists(self.guild_id, *role_id))
            .ok_or_else(|| {
                CommandError::validation(format!("`{}` is not a role in this server.", argument))
            })?;

        Ok(GuildConfigUpdate::HostRole(Some(role_id)))
    }
}

fn usage(config: Option<&GuildConfig>) -> String {
    let queue_channel = config
        .and_then(|config| config.queue_channel_id)
        .map_or_else(|| "not set".to_string(), |id| ChannelId::new(id).mention().to_string());
    let host_role = config
        .and_then(|config| config.host_role_id)
        .map_or_else(|| "everyone".to_string(), |id| RoleId::new(id).mention().to_string());
    let queue_size = config.map_or(DEFAULT_QUEUE_SIZE, GuildConfig::queue_size);

    format!(
        "Changes the bot's configuration for this server.\n\
         `configure default_queue_size <n>` Sets the default queue size.\n\
         `configure queue_channel <#channel>` Sets the channel for the bot to listen to.\n\
         `configure host_role [@role]` Restricts hosts to a role. Empty allows everyone.\n\
         \n\
         Queue channel: {}\n\
         Host role: {}\n\
         Default queue size: {}",
        queue_channel, host_role, queue_size
    )
}

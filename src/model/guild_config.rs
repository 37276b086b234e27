use sea_orm::DbErr;

use crate::util::parse::{parse_optional_snowflake, parse_snowflake};

/// Queue size used when a guild never configured `default_queue_size`.
pub const DEFAULT_QUEUE_SIZE: u32 = 8;

/// Lobby settings for one guild.
///
/// Ids are parsed into `u64` at the repository boundary; the database stores them as
/// strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildConfig {
    /// Discord guild ID.
    pub guild_id: u64,
    /// Role required to host a lobby. `None` lets everyone host.
    pub host_role_id: Option<u64>,
    /// The only channel lobby commands are accepted in.
    pub queue_channel_id: Option<u64>,
    /// Queue size for new lobbies. `None` falls back to `DEFAULT_QUEUE_SIZE`.
    pub default_queue_size: Option<u32>,
}

/// A single field-level change to a guild's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuildConfigUpdate {
    HostRole(Option<u64>),
    QueueChannel(u64),
    DefaultQueueSize(u32),
}

impl GuildConfig {
    /// Creates an unconfigured row for a guild that has never been configured.
    pub fn new(guild_id: u64) -> Self {
        Self {
            guild_id,
            host_role_id: None,
            queue_channel_id: None,
            default_queue_size: None,
        }
    }

    /// Effective queue size for a lobby hosted now.
    pub fn queue_size(&self) -> u32 {
        self.default_queue_size.unwrap_or(DEFAULT_QUEUE_SIZE)
    }

    pub fn apply(&mut self, update: GuildConfigUpdate) {
        match update {
            GuildConfigUpdate::HostRole(role_id) => self.host_role_id = role_id,
            GuildConfigUpdate::QueueChannel(channel_id) => self.queue_channel_id = Some(channel_id),
            GuildConfigUpdate::DefaultQueueSize(size) => self.default_queue_size = Some(size),
        }
    }

    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The database entity model to convert
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - Successfully converted model
    /// - `Err(DbErr::Custom)` - A stored id is not a valid u64 or the queue size is negative
    pub fn from_entity(entity: entity::guild_config::Model) -> Result<Self, DbErr> {
        let default_queue_size = entity
            .default_queue_size
            .map(|size| {
                u32::try_from(size).map_err(|e| {
                    DbErr::Custom(format!("Failed to parse default_queue_size {}: {}", size, e))
                })
            })
            .transpose()?;

        Ok(Self {
            guild_id: parse_snowflake("guild_id", &entity.guild_id)?,
            host_role_id: parse_optional_snowflake("host_role_id", entity.host_role_id.as_deref())?,
            queue_channel_id: parse_optional_snowflake(
                "queue_channel_id",
                entity.queue_channel_id.as_deref(),
            )?,
            default_queue_size,
        })
    }
}

//! Fixture for guild configuration test data.
//!
//! Provides fixture methods for creating in-memory guild configuration rows without
//! database insertion. Used for unit testing and as factory defaults.

use chrono::{DateTime, Utc};
use entity::guild_config;

/// Default test guild Discord ID.
pub const DEFAULT_GUILD_ID: &str = "100000000000000001";

/// Default test queue channel Discord ID.
pub const DEFAULT_QUEUE_CHANNEL_ID: &str = "200000000000000001";

/// Creates a guild configuration entity model with default values.
///
/// The default row has a queue channel configured and no host role or queue size,
/// which is the smallest configuration that lets lobby commands run.
///
/// # Returns
/// - `guild_config::Model` - In-memory entity
///
/// # Example
/// ```rust,ignore
/// let entity = fixture::guild_config::entity();
/// assert_eq!(entity.guild_id, "100000000000000001");
/// ```
pub fn entity() -> guild_config::Model {
    entity_builder().build()
}

/// Creates a customizable guild configuration entity builder.
///
/// # Example
/// ```rust,ignore
/// let entity = fixture::guild_config::entity_builder()
///     .guild_id("111111111")
///     .host_role_id(Some("222222222".to_string()))
///     .build();
/// ```
pub fn entity_builder() -> GuildConfigEntityBuilder {
    GuildConfigEntityBuilder::default()
}

/// Builder for guild configuration entity models.
pub struct GuildConfigEntityBuilder {
    guild_id: String,
    host_role_id: Option<String>,
    queue_channel_id: Option<String>,
    default_queue_size: Option<i32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Default for GuildConfigEntityBuilder {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            guild_id: DEFAULT_GUILD_ID.to_string(),
            host_role_id: None,
            queue_channel_id: Some(DEFAULT_QUEUE_CHANNEL_ID.to_string()),
            default_queue_size: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl GuildConfigEntityBuilder {
    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the host role ID. `None` allows everyone to host.
    pub fn host_role_id(mut self, host_role_id: Option<String>) -> Self {
        self.host_role_id = host_role_id;
        self
    }

    /// Sets the queue channel ID.
    pub fn queue_channel_id(mut self, queue_channel_id: Option<String>) -> Self {
        self.queue_channel_id = queue_channel_id;
        self
    }

    /// Sets the default queue size.
    pub fn default_queue_size(mut self, default_queue_size: Option<i32>) -> Self {
        self.default_queue_size = default_queue_size;
        self
    }

    /// Sets both timestamps.
    pub fn timestamps(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self.updated_at = at;
        self
    }

    /// Builds the entity model.
    ///
    /// # Returns
    /// - `guild_config::Model` - In-memory entity with configured values
    pub fn build(self) -> guild_config::Model {
        guild_config::Model {
            guild_id: self.guild_id,
            host_role_id: self.host_role_id,
            queue_channel_id: self.queue_channel_id,
            default_queue_size: self.default_queue_size,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

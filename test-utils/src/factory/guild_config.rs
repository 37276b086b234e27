//! Guild configuration factory for creating test configuration rows.

use crate::{factory::helpers::next_id, fixture};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild configuration rows with customizable fields.
///
/// Defaults come from `fixture::guild_config`, except the guild id which is unique per
/// factory so several rows can coexist in one test database.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_config::GuildConfigFactory;
///
/// let config = GuildConfigFactory::new(&db)
///     .guild_id("987654321")
///     .host_role_id(Some("555".to_string()))
///     .build()
///     .await?;
/// ```
pub struct GuildConfigFactory<'a> {
    db: &'a DatabaseConnection,
    entity: fixture::guild_config::GuildConfigEntityBuilder,
}

impl<'a> GuildConfigFactory<'a> {
    /// Creates a new GuildConfigFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented snowflake-like id
    /// - queue_channel_id: `fixture::guild_config::DEFAULT_QUEUE_CHANNEL_ID`
    /// - host_role_id / default_queue_size: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: fixture::guild_config::entity_builder().guild_id(next_id().to_string()),
        }
    }

    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.entity = self.entity.guild_id(guild_id);
        self
    }

    /// Sets the host role ID.
    pub fn host_role_id(mut self, host_role_id: Option<String>) -> Self {
        self.entity = self.entity.host_role_id(host_role_id);
        self
    }

    /// Sets the queue channel ID.
    pub fn queue_channel_id(mut self, queue_channel_id: Option<String>) -> Self {
        self.entity = self.entity.queue_channel_id(queue_channel_id);
        self
    }

    /// Sets the default queue size.
    pub fn default_queue_size(mut self, default_queue_size: Option<i32>) -> Self {
        self.entity = self.entity.default_queue_size(default_queue_size);
        self
    }

    /// Builds and inserts the guild configuration row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_config::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_config::Model, DbErr> {
        let model = self.entity.build();

        entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(model.guild_id),
            host_role_id: ActiveValue::Set(model.host_role_id),
            queue_channel_id: ActiveValue::Set(model.queue_channel_id),
            default_queue_size: ActiveValue::Set(model.default_queue_size),
            created_at: ActiveValue::Set(model.created_at),
            updated_at: ActiveValue::Set(model.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild configuration row with default values.
///
/// Shorthand for `GuildConfigFactory::new(db).build().await`.
pub async fn create_guild_config(
    db: &DatabaseConnection,
) -> Result<entity::guild_config::Model, DbErr> {
    GuildConfigFactory::new(db).build().await
}

//! Guild configuration repository.
//!
//! Stores one row per guild in `guild_config`. Rows are created on the first
//! configuration write for a guild and are never deleted.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::guild_config::GuildConfig;

pub struct GuildConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every stored guild configuration.
    ///
    /// Used once at startup to fill the configuration cache.
    ///
    /// # Returns
    /// - `Ok(Vec<GuildConfig>)` - All rows, converted to domain models
    /// - `Err(DbErr)` - Query failed or a row holds a corrupt id
    pub async fn get_all(&self) -> Result<Vec<GuildConfig>, DbErr> {
        entity::prelude::GuildConfig::find()
            .all(self.db)
            .await?
            .into_iter()
            .map(GuildConfig::from_entity)
            .collect()
    }

    /// Inserts the configuration or overwrites the existing row for the guild.
    ///
    /// Every configurable column is written, so the stored row matches `config` exactly
    /// afterwards. `created_at` is only set on insert; `updated_at` is refreshed on
    /// every call.
    ///
    /// # Returns
    /// - `Ok(GuildConfig)`: The row as stored by the database
    /// - `Err(DbErr)`: Write failed; the stored row is unchanged
    pub async fn upsert(&self, config: &GuildConfig) -> Result<GuildConfig, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::GuildConfig::insert(entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(config.guild_id.to_string()),
            host_role_id: ActiveValue::Set(config.host_role_id.map(|id| id.to_string())),
            queue_channel_id: ActiveValue::Set(config.queue_channel_id.map(|id| id.to_string())),
            default_queue_size: ActiveValue::Set(
                config.default_queue_size.map(|size| size as i32),
            ),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::guild_config::Column::GuildId)
                .update_columns([
                    entity::guild_config::Column::HostRoleId,
                    entity::guild_config::Column::QueueChannelId,
                    entity::guild_config::Column::DefaultQueueSize,
                    entity::guild_config::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        GuildConfig::from_entity(entity)
    }
}

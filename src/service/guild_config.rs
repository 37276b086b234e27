//! Write-through cache of guild configurations.
//!
//! All configuration rows are loaded into memory at startup. Reads are served from
//! the cache; writes go to the database first and only replace the cached entry once
//! the database has accepted them, so the cache never holds a value the database
//! does not.

use sea_orm::DatabaseConnection;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::{
    data::guild_config::GuildConfigRepository,
    error::AppError,
    model::guild_config::{GuildConfig, GuildConfigUpdate},
};

pub struct GuildConfigStore {
    db: DatabaseConnection,
    cache: RwLock<HashMap<u64, GuildConfig>>,
}

impl GuildConfigStore {
    /// Loads every stored configuration into a new store.
    ///
    /// # Returns
    /// - `Ok(GuildConfigStore)` - Store with a fully populated cache
    /// - `Err(AppError::DbErr)` - Rows could not be read or parsed
    pub async fn load(db: DatabaseConnection) -> Result<Self, AppError> {
        let configs = GuildConfigRepository::new(&db).get_all().await?;

        tracing::info!("Loaded configuration for {} guild(s)", configs.len());

        let cache = configs
            .into_iter()
            .map(|config| (config.guild_id, config))
            .collect();

        Ok(Self {
            db,
            cache: RwLock::new(cache),
        })
    }

    /// Gets the cached configuration for a guild.
    pub async fn get(&self, guild_id: u64) -> Option<GuildConfig> {
        self.cache.read().await.get(&guild_id).cloned()
    }

    /// Applies one field update to a guild's configuration and persists it.
    ///
    /// Starts from the cached row, or an unconfigured row if the guild has none yet.
    /// The cache write lock is held across the database write so no reader can see a
    /// value that is not yet committed.
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - The configuration as stored
    /// - `Err(AppError::DbErr)` - Write failed; neither cache nor database changed
    pub async fn upsert(
        &self,
        guild_id: u64,
        update: GuildConfigUpdate,
    ) -> Result<GuildConfig, AppError> {
        let mut cache = self.cache.write().await;

        let mut config = cache
            .get(&guild_id)
            .cloned()
            .unwrap_or_else(|| GuildConfig::new(guild_id));
        config.apply(update);

        let stored = GuildConfigRepository::new(&self.db).upsert(&config).await?;

        tracing::debug!("Updated configuration for guild {}: {:?}", guild_id, update);

        cache.insert(guild_id, stored.clone());

        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ConnectionTrait;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests that startup loads every stored row into the cache.
    ///
    /// Expected: Ok with both guilds readable from the cache
    #[tokio::test]
    async fn loads_existing_configs() -> Result<(), AppError> {
        let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
        let db = test.db.clone().unwrap();

        factory::guild_config::GuildConfigFactory::new(&db)
            .guild_id("1")
            .default_queue_size(Some(3))
            .build()
            .await?;
        factory::guild_config::GuildConfigFactory::new(&db)
            .guild_id("2")
            .build()
            .await?;

        let store = GuildConfigStore::load(db).await?;

        assert_eq!(store.get(1).await.unwrap().queue_size(), 3);
        assert!(store.get(2).await.is_some());
        assert!(store.get(3).await.is_none());

        Ok(())
    }

    /// Tests creating a configuration on first write.
    ///
    /// Expected: Ok with only the written field set
    #[tokio::test]
    async fn creates_config_on_first_write() -> Result<(), AppError> {
        let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
        let store = GuildConfigStore::load(test.db.clone().unwrap()).await?;

        let config = store
            .upsert(10, GuildConfigUpdate::DefaultQueueSize(2))
            .await?;

        assert_eq!(
            config,
            GuildConfig {
                guild_id: 10,
                host_role_id: None,
                queue_channel_id: None,
                default_queue_size: Some(2),
            }
        );
        assert_eq!(store.get(10).await, Some(config));

        Ok(())
    }

    /// Tests that successive updates keep earlier fields.
    ///
    /// Expected: Ok with all three fields set
    #[tokio::test]
    async fn merges_field_updates() -> Result<(), AppError> {
        let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
        let store = GuildConfigStore::load(test.db.clone().unwrap()).await?;

        store.upsert(10, GuildConfigUpdate::QueueChannel(20)).await?;
        store.upsert(10, GuildConfigUpdate::HostRole(Some(30))).await?;
        let config = store
            .upsert(10, GuildConfigUpdate::DefaultQueueSize(4))
            .await?;

        assert_eq!(config.queue_channel_id, Some(20));
        assert_eq!(config.host_role_id, Some(30));
        assert_eq!(config.default_queue_size, Some(4));

        Ok(())
    }

    /// Tests that writes survive a reload from the database.
    ///
    /// Expected: Ok with a fresh store seeing the same configuration
    #[tokio::test]
    async fn persists_writes_through_reload() -> Result<(), AppError> {
        let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
        let db = test.db.clone().unwrap();

        let store = GuildConfigStore::load(db.clone()).await?;
        store.upsert(10, GuildConfigUpdate::QueueChannel(20)).await?;
        let written = store.upsert(10, GuildConfigUpdate::HostRole(Some(30))).await?;

        let reloaded = GuildConfigStore::load(db).await?;

        assert_eq!(reloaded.get(10).await, Some(written));

        Ok(())
    }

    /// Tests that a failed write leaves the cache untouched.
    ///
    /// Expected: Err(AppError::DbErr) and the previous cached value
    #[tokio::test]
    async fn failed_write_keeps_cache_unchanged() -> Result<(), AppError> {
        let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
        let db = test.db.clone().unwrap();

        let store = GuildConfigStore::load(db.clone()).await?;
        let before = store
            .upsert(10, GuildConfigUpdate::DefaultQueueSize(5))
            .await?;

        db.execute_unprepared("DROP TABLE guild_config").await?;

        let result = store
            .upsert(10, GuildConfigUpdate::DefaultQueueSize(9))
            .await;

        assert!(matches!(result, Err(AppError::DbErr(_))));
        assert_eq!(store.get(10).await, Some(before));

        Ok(())
    }
}

use super::*;
use sea_orm::PaginatorTrait;

/// Tests upserting a configuration for a new guild.
///
/// Expected: Ok with the row created
#[tokio::test]
async fn inserts_new_guild_config() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut config = GuildConfig::new(123456789);
    config.default_queue_size = Some(6);

    let stored = GuildConfigRepository::new(db).upsert(&config).await?;

    assert_eq!(stored, config);

    let row = entity::prelude::GuildConfig::find_by_id("123456789".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.default_queue_size, Some(6));
    assert!(row.queue_channel_id.is_none());

    Ok(())
}

/// Tests upserting over an existing row.
///
/// Verifies that the existing row is overwritten instead of duplicated, and that
/// clearing the host role writes NULL.
///
/// Expected: Ok with a single updated row
#[tokio::test]
async fn updates_existing_guild_config() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("123456789")
        .host_role_id(Some("777".to_string()))
        .queue_channel_id(Some("555".to_string()))
        .build()
        .await?;

    let config = GuildConfig {
        guild_id: 123456789,
        host_role_id: None,
        queue_channel_id: Some(556),
        default_queue_size: Some(3),
    };

    let stored = GuildConfigRepository::new(db).upsert(&config).await?;

    assert_eq!(stored, config);

    let count = entity::prelude::GuildConfig::find().count(db).await?;
    assert_eq!(count, 1);

    let row = entity::prelude::GuildConfig::find_by_id("123456789".to_string())
        .one(db)
        .await?
        .unwrap();
    assert!(row.host_role_id.is_none());
    assert_eq!(row.queue_channel_id.as_deref(), Some("556"));
    assert_eq!(row.created_at, existing.created_at);
    assert!(row.updated_at >= existing.updated_at);

    Ok(())
}

/// Tests upserting into the table created by the migrator rather than from the
/// entity definition.
///
/// Verifies that the stored timestamps decode back into the entity after both the
/// insert and the conflict update, and that the rows load again afterwards.
///
/// Expected: Ok with timestamps preserved across the round trip
#[tokio::test]
async fn round_trips_timestamps_on_migrated_schema() -> Result<(), DbErr> {
    use migration::{Migrator, MigratorTrait};

    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;

    let repo = GuildConfigRepository::new(&db);
    let mut config = GuildConfig::new(10);
    config.default_queue_size = Some(3);

    repo.upsert(&config).await?;
    config.default_queue_size = Some(4);
    let stored = repo.upsert(&config).await?;

    assert_eq!(stored, config);
    assert_eq!(repo.get_all().await?, vec![config]);

    let row = entity::prelude::GuildConfig::find_by_id("10".to_string())
        .one(&db)
        .await?
        .unwrap();
    assert!(row.updated_at >= row.created_at);

    Ok(())
}

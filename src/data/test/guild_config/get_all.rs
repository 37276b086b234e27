use super::*;

/// Tests loading configurations from an empty table.
///
/// Expected: Ok with no configurations
#[tokio::test]
async fn returns_empty_when_no_guilds_configured() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let configs = GuildConfigRepository::new(db).get_all().await?;

    assert!(configs.is_empty());

    Ok(())
}

/// Tests loading every stored configuration.
///
/// Verifies that each row is returned and converted to a domain model with
/// parsed ids.
///
/// Expected: Ok with both configurations
#[tokio::test]
async fn returns_all_configured_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("111")
        .default_queue_size(Some(4))
        .build()
        .await?;
    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("222")
        .host_role_id(Some("999".to_string()))
        .build()
        .await?;

    let mut configs = GuildConfigRepository::new(db).get_all().await?;
    configs.sort_by_key(|c| c.guild_id);

    assert_eq!(configs.len(), 2);
    assert_eq!(configs[0].guild_id, 111);
    assert_eq!(configs[0].default_queue_size, Some(4));
    assert_eq!(configs[1].guild_id, 222);
    assert_eq!(configs[1].host_role_id, Some(999));

    Ok(())
}

/// Tests that a corrupt row fails the whole load.
///
/// A configuration that cannot be parsed would otherwise be silently dropped and
/// the cache would disagree with the database.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_corrupt_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("not-a-snowflake")
        .build()
        .await?;

    let result = GuildConfigRepository::new(db).get_all().await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}

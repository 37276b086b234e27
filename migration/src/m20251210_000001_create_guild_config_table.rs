use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildConfig::Table).to_owned())
            .await
    }
}

/// Timestamp columns must be timezone-aware to decode as `DateTimeUtc` on Postgres.
fn create_table() -> TableCreateStatement {
    Table::create()
        .table(GuildConfig::Table)
        .if_not_exists()
        .col(string(GuildConfig::GuildId).primary_key())
        .col(string_null(GuildConfig::HostRoleId))
        .col(string_null(GuildConfig::QueueChannelId))
        .col(integer_null(GuildConfig::DefaultQueueSize))
        .col(timestamp_with_time_zone(GuildConfig::CreatedAt))
        .col(timestamp_with_time_zone(GuildConfig::UpdatedAt))
        .to_owned()
}

#[derive(DeriveIden)]
enum GuildConfig {
    Table,
    GuildId,
    HostRoleId,
    QueueChannelId,
    DefaultQueueSize,
    CreatedAt,
    UpdatedAt,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postgres_timestamps_carry_time_zone() {
        let sql = create_table().to_string(PostgresQueryBuilder);

        assert!(sql.contains(r#""created_at" timestamp with time zone"#));
        assert!(sql.contains(r#""updated_at" timestamp with time zone"#));
    }
}

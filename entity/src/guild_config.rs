use sea_orm::entity::prelude::*;

/// Per-guild lobby settings.
///
/// Discord snowflakes are stored as strings, the same way every other Discord
/// id column in the schema is stored.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_config")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    pub host_role_id: Option<String>,
    pub queue_channel_id: Option<String>,
    pub default_queue_size: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

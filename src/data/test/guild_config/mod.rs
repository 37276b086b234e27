use crate::data::guild_config::GuildConfigRepository;
use crate::model::guild_config::GuildConfig;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod upsert;

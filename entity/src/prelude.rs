pub use super::guild_config::Entity as GuildConfig;

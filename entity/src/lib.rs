//! SeaORM entity definitions for the Raven lobby bot.

pub mod prelude;

pub mod guild_config;

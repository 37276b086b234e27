mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod state;
mod util;

use std::sync::Arc;

use crate::{
    config::Config,
    error::AppError,
    service::guild_config::GuildConfigStore,
    state::{BotState, GuildScope},
    util::clock::SystemClock,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing()?;

    let config = Config::from_env()?;

    if config.production {
        tracing::info!("Starting in production mode");
    } else {
        tracing::info!(
            "Starting in development mode, serving guild {:?} only",
            config.dev_guild_id
        );
    }

    let db = startup::connect_to_database(&config).await?;
    let config_store = GuildConfigStore::load(db).await?;

    let state = Arc::new(BotState::new(
        config_store,
        GuildScope::from_config(&config),
        Arc::new(SystemClock),
    ));

    let client = bot::start::init_bot(&config, state).await?;

    bot::start::start_bot(client).await
}

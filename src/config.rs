use crate::error::{config::ConfigError, AppError};

/// Database used in development when `DATABASE_URL` is not set.
const DEV_DATABASE_URL: &str = "sqlite://raven_dev.db?mode=rwc";

pub struct Config {
    pub discord_bot_token: String,
    /// Selects the production database and lifts the development guild restriction.
    pub production: bool,
    pub database_url: String,
    /// The only guild served outside production.
    pub dev_guild_id: Option<u64>,
    /// Optional text prefix accepted in addition to mentioning the bot.
    pub command_prefix: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required =
            |name: &str| var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let production = match var("RAVEN_PRODUCTION") {
            Some(value) => parse_bool("RAVEN_PRODUCTION", &value)?,
            None => false,
        };

        let database_url = if production {
            required("DATABASE_URL")?
        } else {
            var("DATABASE_URL").unwrap_or_else(|| DEV_DATABASE_URL.to_string())
        };

        let dev_guild_id = if production {
            None
        } else {
            let value = required("DEV_GUILD_ID")?;
            let guild_id = value
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "DEV_GUILD_ID".to_string(),
                    reason: e.to_string(),
                })?;
            Some(guild_id)
        };

        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            production,
            database_url,
            dev_guild_id,
            command_prefix: var("COMMAND_PREFIX").map(|prefix| prefix.trim().to_string()),
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("expected a boolean, got '{}'", other),
        }),
    }
}

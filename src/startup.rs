use crate::{config::Config, error::AppError};

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "info,raven=debug";

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG`, falling back to `info,raven=debug`.
///
/// # Returns
/// - `Ok(())` - Subscriber installed
/// - `Err(AppError::InternalError)` - A global subscriber was already set
pub fn init_tracing() -> Result<(), AppError> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::InternalError(format!("Failed to initialize logging: {}", e)))
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the `guild_config` table is up-to-date before
/// the configuration cache is loaded. SQL statement logging is enabled outside
/// production.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(!config.production);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

use migration::{HistoryMigrator, Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{config::Config, error::AppError};

/// Connects to both stores and runs their pending migrations.
///
/// The primary store receives the user, project, section and event tables; the
/// history store receives the product and order history tables. The two
/// connections share nothing: no cross-store transactions are ever opened.
///
/// # Arguments
/// - `config` - Application configuration containing both database URLs
///
/// # Returns
/// - `Ok((primary, history))` - Connected databases with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to a database or run migrations
pub async fn connect_to_databases(
    config: &Config,
) -> Result<(DatabaseConnection, DatabaseConnection), AppError> {
    let db = connect(&config.database_url, config.debug).await?;
    Migrator::up(&db, None).await?;

    let history_db = connect(&config.history_database_url, config.debug).await?;
    HistoryMigrator::up(&history_db, None).await?;

    Ok((db, history_db))
}

async fn connect(url: &str, debug: bool) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(url);
    opt.sqlx_logging(debug);

    Ok(Database::connect(opt).await?)
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level is `debug` in debug mode and
/// `info` otherwise.
pub fn init_tracing(config: &Config) {
    use tracing_subscriber::EnvFilter;

    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

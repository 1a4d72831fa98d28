use axum::Router;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError};

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before the service
/// accepts requests.
///
/// # Arguments
/// - `config` - Service configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};

    let db = open_database(config).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Drops every table and re-runs all migrations.
pub async fn recreate_database(config: &Config) -> Result<(), AppError> {
    use migration::{Migrator, MigratorTrait};

    let db = open_database(config).await?;

    Migrator::fresh(&db).await?;
    tracing::info!("Recreated database schema");

    Ok(())
}

async fn open_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    Ok(Database::connect(opt).await?)
}

/// Binds `address` and serves `router` until the process is stopped.
pub async fn serve(address: &str, router: Router) -> Result<(), AppError> {
    let listener = TcpListener::bind(address).await?;
    tracing::info!("Listening on {}", address);

    axum::serve(listener, router).await?;

    Ok(())
}

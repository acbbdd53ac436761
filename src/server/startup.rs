use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError};

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the level comes from `LOG_LEVEL`.
///
/// # Arguments
/// - `config` - Application configuration containing the log filter
pub fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// automatically runs all pending SeaORM migrations to ensure the database schema is
/// up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::debug!("Database connected and migrations applied");

    Ok(db)
}

/// Binds the admin API listener and serves the router until shutdown.
///
/// # Returns
/// - `Ok(())` - Server shut down
/// - `Err(AppError::IoErr)` - The port could not be bound or serving failed
pub async fn serve(config: &Config, router: axum::Router) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.web_port)).await?;

    tracing::info!("Admin API listening on port {}", config.web_port);

    axum::serve(listener, router).await?;

    Ok(())
}

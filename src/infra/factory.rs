use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use anyhow::Context;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::{info, warn};
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::ports::{BookingRepository, CustomerDirectory, RoomCatalog};
use crate::domain::services::booking_service::BookingService;
use crate::infra::catalog::StaticRoomCatalog;
use crate::infra::repositories::{
    memory_booking_repo::MemoryBookingRepo, memory_customer_repo::MemoryCustomerRepo,
    postgres_booking_repo::PostgresBookingRepo, postgres_customer_repo::PostgresCustomerRepo,
    sqlite_booking_repo::SqliteBookingRepo, sqlite_customer_repo::SqliteCustomerRepo,
};

pub async fn bootstrap_state(config: &Config) -> anyhow::Result<AppState> {
    let catalog: Arc<dyn RoomCatalog> = match &config.rooms_file {
        Some(path) => {
            info!("Loading room catalog from {}", path);
            Arc::new(StaticRoomCatalog::from_json_file(path)?)
        }
        None => Arc::new(StaticRoomCatalog::default()),
    };

    let (ledger, customers): (Arc<dyn BookingRepository>, Arc<dyn CustomerDirectory>) =
        match config.database_url.as_deref() {
            Some(url) if url.starts_with("postgres://") || url.starts_with("postgresql://") => {
                info!("Initializing PostgreSQL connection...");
                let pool = connect_postgres(url).await?;
                (
                    Arc::new(PostgresBookingRepo::new(pool.clone())),
                    Arc::new(PostgresCustomerRepo::new(pool)),
                )
            }
            Some(url) => {
                info!("Initializing SQLite connection with WAL Mode...");
                let pool = connect_sqlite(url).await?;
                (
                    Arc::new(SqliteBookingRepo::new(pool.clone())),
                    Arc::new(SqliteCustomerRepo::new(pool)),
                )
            }
            None => {
                warn!("No DATABASE_URL provided. Bookings are kept in memory and lost on restart.");
                (Arc::new(MemoryBookingRepo::new()), Arc::new(MemoryCustomerRepo::new()))
            }
        };

    Ok(AppState {
        config: config.clone(),
        booking_service: Arc::new(BookingService::new(catalog, ledger, customers)),
    })
}

async fn connect_postgres(url: &str) -> anyhow::Result<PgPool> {
    let opts = PgConnectOptions::from_str(url)
        .context("Invalid Postgres URL")?
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(opts)
        .await
        .context("Failed to connect to Postgres")?;

    sqlx::migrate!("./migrations/postgres")
        .run(&pool)
        .await
        .context("Failed to run Postgres migrations")?;

    Ok(pool)
}

pub async fn connect_sqlite(url: &str) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(url)
        .context("Invalid SQLite connection string")?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .context("Failed to connect to SQLite")?;

    sqlx::migrate!("./migrations/sqlite")
        .run(&pool)
        .await
        .context("Failed to run SQLite migrations")?;

    Ok(pool)
}

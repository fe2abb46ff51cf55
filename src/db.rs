//! Connection pool construction and schema management for the SQLite backend.

use diesel::connection::{InstrumentationEvent, SimpleConnection};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::config::{DEFAULT_POOL_SIZE, PersistenceConfig, SchemaAction};
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

const SQL_LOG_TARGET: &str = "product_store::sql";

/// Per-connection setup run every time the pool opens a connection.
#[derive(Debug, Clone, Copy)]
struct ConnectionOptions {
    show_sql: bool,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA busy_timeout = 5000; PRAGMA foreign_keys = ON;")
            .map_err(diesel::r2d2::Error::QueryError)?;

        if self.show_sql {
            conn.set_instrumentation(log_statements);
        }

        Ok(())
    }
}

fn log_statements(event: InstrumentationEvent<'_>) {
    if let InstrumentationEvent::StartQuery { query, .. } = event {
        log::info!(target: SQL_LOG_TARGET, "{query}");
    }
}

/// Build a connection pool for `database_url` with default options.
pub fn establish_connection_pool(database_url: &str) -> RepositoryResult<DbPool> {
    build_pool(database_url, DEFAULT_POOL_SIZE, false)
}

/// Build a connection pool from `config` and apply its schema action.
pub fn bootstrap(config: &PersistenceConfig) -> RepositoryResult<DbPool> {
    let pool = build_pool(&config.database_url, config.pool_size, config.show_sql)?;

    let mut conn = pool.get()?;
    apply_schema_action(&mut conn, config.schema_action)?;

    log::info!(
        "Persistence ready: database={}, schema_action={}, pool_size={}",
        config.database_url,
        config.schema_action,
        config.pool_size
    );

    Ok(pool)
}

fn build_pool(database_url: &str, pool_size: u32, show_sql: bool) -> RepositoryResult<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(pool_size)
        .connection_customizer(Box::new(ConnectionOptions { show_sql }))
        .build(manager)?;

    // Journal mode is stored in the database file, so one connection is enough.
    pool.get()?.batch_execute("PRAGMA journal_mode = WAL;")?;

    Ok(pool)
}

/// Bring the schema in line with `action` using the embedded migrations.
pub fn apply_schema_action(
    conn: &mut SqliteConnection,
    action: SchemaAction,
) -> RepositoryResult<()> {
    match action {
        SchemaAction::None => {}
        SchemaAction::Create => {
            let applied = conn
                .run_pending_migrations(MIGRATIONS)
                .map_err(|e| RepositoryError::Migration(e.to_string()))?
                .len();
            log::debug!("Applied {applied} pending migration(s)");
        }
        SchemaAction::DropAndCreate => {
            let reverted = conn
                .revert_all_migrations(MIGRATIONS)
                .map_err(|e| RepositoryError::Migration(e.to_string()))?
                .len();
            let applied = conn
                .run_pending_migrations(MIGRATIONS)
                .map_err(|e| RepositoryError::Migration(e.to_string()))?
                .len();
            log::debug!("Reverted {reverted} and applied {applied} migration(s)");
        }
    }
    Ok(())
}


//! Helpers for integration tests.

use diesel_migrations::MigrationHarness;
use tempfile::TempDir;

use product_store::db::{DbPool, MIGRATIONS, establish_connection_pool};

/// Temporary database used in integration tests.
///
/// The database file lives in its own temporary directory, which is removed
/// together with the `-wal` and `-shm` side files when the value is dropped.
pub struct TestDb {
    pool: DbPool,
    filename: String,
    dir: TempDir,
}

#[allow(dead_code)]
impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temporary directory.");
        let path = dir.path().join(filename);
        let filename = path.to_string_lossy().into_owned();

        let pool =
            establish_connection_pool(&filename).expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            pool,
            filename,
            dir,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn dir(&self) -> &std::path::Path {
        self.dir.path()
    }
}

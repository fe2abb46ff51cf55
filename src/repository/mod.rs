use diesel::sqlite::SqliteConnection;

use crate::db::{DbConnection, DbPool};
use crate::domain::product::{Product, ProductUpdate};
use crate::domain::programming_language::{NewProgrammingLanguage, ProgrammingLanguage};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod product;
pub mod programming_language;
pub mod session;
pub mod unit_of_work;

#[cfg(test)]
pub mod mock;

pub use session::ProductSession;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
///
/// Every operation checks out its own connection and runs in its own
/// transaction, so values returned from one call are detached by the time
/// the next call starts.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }

    /// Run `operation` inside a single transaction on a freshly checked-out
    /// connection.
    ///
    /// The transaction commits when `operation` returns `Ok` and rolls back
    /// otherwise. The connection goes back to the pool on every path.
    pub fn run_in_transaction<T, F>(&self, operation: F) -> RepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> RepositoryResult<T>,
    {
        let mut conn = self.conn()?;
        unit_of_work::run_in_transaction(&mut conn, operation)
    }

    /// Open a long-lived session that keeps one connection and tracks the
    /// products it loads or saves.
    pub fn open_session(&self) -> RepositoryResult<ProductSession> {
        Ok(ProductSession::new(self.conn()?))
    }
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
}

/// Write operations over product records.
pub trait ProductWriter {
    /// Persist a transient product and assign the generated identifier to it.
    ///
    /// A product that already carries an identifier is rejected with
    /// [`RepositoryError::AlreadySaved`](errors::RepositoryError::AlreadySaved).
    fn save_product(&self, product: &mut Product) -> RepositoryResult<()>;
    /// Merge a detached product into the store, then apply `update` to the
    /// merged row.
    fn update_with_merge_detached(
        &self,
        product: &Product,
        update: &ProductUpdate,
    ) -> RepositoryResult<Product>;
    /// Load the stored row for `product`'s identifier and apply `update` to it.
    fn update_with_get_persistent(
        &self,
        product: &Product,
        update: &ProductUpdate,
    ) -> RepositoryResult<Product>;
    /// Remove the row addressed by `product`'s identifier.
    fn delete_product(&self, product: &Product) -> RepositoryResult<()>;
}

/// Read-only operations over programming language records.
pub trait ProgrammingLanguageReader {
    fn list_programming_languages_rated_above(
        &self,
        min_rating: i32,
    ) -> RepositoryResult<Vec<ProgrammingLanguage>>;
}

/// Write operations over programming language records.
pub trait ProgrammingLanguageWriter {
    fn create_programming_languages(
        &self,
        new_languages: &[NewProgrammingLanguage],
    ) -> RepositoryResult<usize>;
}

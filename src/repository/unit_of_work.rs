use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::repository::errors::{RepositoryError, RepositoryResult};

/// Execute `operation` inside one begin/commit-or-rollback boundary on `conn`.
///
/// Commits when `operation` returns `Ok`. Any `Err` rolls the transaction
/// back before the error is handed back to the caller unchanged.
pub fn run_in_transaction<T, F>(conn: &mut SqliteConnection, operation: F) -> RepositoryResult<T>
where
    F: FnOnce(&mut SqliteConnection) -> RepositoryResult<T>,
{
    conn.transaction::<T, RepositoryError, _>(operation)
        .inspect_err(|err| log::warn!("Transaction rolled back: {err}"))
}

use diesel::r2d2::PoolError;
use thiserror::Error;

/// Errors surfaced by the data access layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("product has not been saved yet and carries no identifier")]
    Transient,
    #[error("product {0} has already been saved")]
    AlreadySaved(i32),
    #[error("product {0} is not managed by this session")]
    Detached(i32),
    #[error("failed to acquire a database connection: {0}")]
    Pool(#[from] PoolError),
    #[error("database error: {0}")]
    Database(diesel::result::Error),
    #[error("schema migration failed: {0}")]
    Migration(String),
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(value: diesel::result::Error) -> Self {
        match value {
            diesel::result::Error::NotFound => Self::NotFound,
            other => Self::Database(other),
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

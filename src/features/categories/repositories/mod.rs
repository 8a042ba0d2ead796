//! Storage seam for categories.
//!
//! The repository is the authority on slug uniqueness: every implementation
//! must reject a write that would leave two records with the same slug and
//! report it as [`StoreError::UniqueViolation`].

mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::features::categories::models::{Category, CategoryInput};

pub use postgres::PgCategoryRepository;

/// Name of the unique constraint backing slug uniqueness
pub const SLUG_UNIQUE_CONSTRAINT: &str = "categories_slug_key";

/// PostgreSQL error code for unique constraint violations
const PG_UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint violated ({})", constraint.as_deref().unwrap_or("unknown"))]
    UniqueViolation { constraint: Option<String> },

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Database(ref db_err)
                if db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION) =>
            {
                StoreError::UniqueViolation {
                    constraint: db_err.constraint().map(str::to_string),
                }
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                StoreError::Unavailable(e.to_string())
            }
            other => StoreError::Database(other),
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Category>>;

    /// Find the record holding `slug`, ignoring `exclude_id` when given
    async fn find_by_slug(&self, slug: &str, exclude_id: Option<Uuid>)
        -> StoreResult<Option<Category>>;

    /// All records, ordered by name ascending
    async fn list_ordered_by_name(&self) -> StoreResult<Vec<Category>>;

    async fn insert(&self, input: &CategoryInput) -> StoreResult<Category>;

    /// Returns `None` when no record has `id`
    async fn update(&self, id: Uuid, input: &CategoryInput) -> StoreResult<Option<Category>>;

    /// Returns `false` when no record has `id`
    async fn delete(&self, id: Uuid) -> StoreResult<bool>;
}

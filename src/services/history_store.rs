//! Persistence contract for processed queries.
//!
//! The orchestration service only needs two operations from storage: append a
//! record and list every record newest first. [`crate::db::Store`] implements
//! this on top of `SQLite`.

use crate::db::SearchRecord;
use thiserror::Error;

/// Storage faults. Never retried by callers.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for StoreError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for StoreError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait SearchHistoryStore: Send + Sync {
    /// Persists a new record with a fresh id and the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the row cannot be written.
    async fn append(&self, input_string: &str, result_count: u32)
    -> Result<SearchRecord, StoreError>;

    /// Returns every record, most recent first. Empty when nothing was stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on connection failures.
    async fn list_descending(&self) -> Result<Vec<SearchRecord>, StoreError>;
}

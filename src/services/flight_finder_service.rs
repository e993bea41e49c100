//! Domain service for flight-count queries.
//!
//! Counts how often "flight" can be spelled from a validated input, records
//! the outcome and serves the recorded history.

use crate::api::types::{CalculateResponse, SearchHistoryDto};
use crate::services::history_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlightFinderError {
    /// The count was computed but the record could not be saved.
    #[error("Failed to save result {count} for '{input}': {message}")]
    Persistence {
        input: String,
        count: u32,
        message: String,
    },

    #[error("Database error: {0}")]
    Database(String),
}

impl From<StoreError> for FlightFinderError {
    fn from(err: StoreError) -> Self {
        Self::Database(err.to_string())
    }
}

/// Service trait for the calculate/history flow.
///
/// # Examples
///
/// ```rust,ignore
/// use flight_finder::services::{FlightFinderError, FlightFinderService};
/// use std::sync::Arc;
///
/// async fn example(service: Arc<dyn FlightFinderService>) -> Result<(), FlightFinderError> {
///     let response = service.process_request("flightflight").await?;
///     assert_eq!(response.count, 2);
///     Ok(())
/// }
/// ```
#[async_trait::async_trait]
pub trait FlightFinderService: Send + Sync {
    /// Counts `input_string` and appends the outcome to the history.
    ///
    /// The input must already satisfy the boundary rules (lowercase `a`-`z`,
    /// at most 100 characters).
    ///
    /// # Errors
    ///
    /// Returns [`FlightFinderError::Persistence`] if the record cannot be
    /// written. The error still carries the computed count.
    async fn process_request(&self, input_string: &str)
    -> Result<CalculateResponse, FlightFinderError>;

    /// Every recorded query, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`FlightFinderError::Database`] on connection failures.
    async fn search_history(&self) -> Result<Vec<SearchHistoryDto>, FlightFinderError>;
}

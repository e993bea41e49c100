//! Default implementation of the `FlightFinderService` trait.

use crate::api::types::{CalculateResponse, SearchHistoryDto};
use crate::counter::count_flight;
use crate::services::flight_finder_service::{FlightFinderError, FlightFinderService};
use crate::services::history_store::SearchHistoryStore;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info};

pub struct DefaultFlightFinderService {
    store: Arc<dyn SearchHistoryStore>,
}

impl DefaultFlightFinderService {
    #[must_use]
    pub fn new(store: Arc<dyn SearchHistoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FlightFinderService for DefaultFlightFinderService {
    async fn process_request(
        &self,
        input_string: &str,
    ) -> Result<CalculateResponse, FlightFinderError> {
        info!("Processing flight finder request: {}", input_string);

        debug!("Calculating flight count for input: {}", input_string);
        let count = count_flight(input_string);

        if let Err(e) = self.store.append(input_string, count).await {
            error!(input = %input_string, count, "Failed to save search history: {}", e);
            return Err(FlightFinderError::Persistence {
                input: input_string.to_string(),
                count,
                message: e.to_string(),
            });
        }

        info!("Saved search history with result: {}", count);

        Ok(CalculateResponse::success(input_string, count))
    }

    async fn search_history(&self) -> Result<Vec<SearchHistoryDto>, FlightFinderError> {
        debug!("Fetching all search history");

        let rows = self.store.list_descending().await?;
        Ok(rows.into_iter().map(SearchHistoryDto::from).collect())
    }
}

pub mod history_store;
pub use history_store::{SearchHistoryStore, StoreError};

pub mod flight_finder_service;
pub mod flight_finder_service_impl;
pub use flight_finder_service::{FlightFinderError, FlightFinderService};
pub use flight_finder_service_impl::DefaultFlightFinderService;

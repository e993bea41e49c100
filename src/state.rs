use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::db::Store;
use crate::services::{DefaultFlightFinderService, FlightFinderService};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<RwLock<Config>>,

    pub store: Store,

    pub flight_finder: Arc<dyn FlightFinderService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        let flight_finder: Arc<dyn FlightFinderService> =
            Arc::new(DefaultFlightFinderService::new(Arc::new(store.clone())));

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            store,
            flight_finder,
        })
    }
}

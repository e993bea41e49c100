use std::sync::Arc;

use crate::api::validation::validate_input_string;
use crate::config::Config;
use crate::db::Store;
use crate::services::{DefaultFlightFinderService, FlightFinderService};

pub async fn cmd_calculate(config: &Config, input: &str) -> anyhow::Result<()> {
    let input = validate_input_string(Some(input))?;

    let store = Store::new(&config.general.database_path).await?;
    let service = DefaultFlightFinderService::new(Arc::new(store));

    let response = service.process_request(input).await?;

    println!(
        "\"{}\" can spell \"flight\" {} time(s)",
        response.input_string, response.count
    );

    Ok(())
}

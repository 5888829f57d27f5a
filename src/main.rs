use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use hiresync_api::config::ApiConfig;
use hiresync_core::oracle::HttpAvailabilityOracle;
use hiresync_store::SessionStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // In-memory session store with TTL eviction
    let store = SessionStore::new(chrono::Duration::seconds(config.session_ttl_seconds));

    // Availability-parsing oracle (external text-to-windows service)
    let oracle = Arc::new(HttpAvailabilityOracle::new(config.oracle_url.clone()));

    // Start API server
    hiresync_api::start_server(config, store, oracle).await?;

    Ok(())
}

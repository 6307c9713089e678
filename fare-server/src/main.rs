use std::net::SocketAddr;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fare_server::airports::{AirportClient, AirportClientConfig, AirportDirectory};
use fare_server::cache::{CacheConfig, CachedFareClient};
use fare_server::ryanair::{RyanairClient, RyanairConfig};
use fare_server::search::SearchConfig;
use fare_server::web::{AppState, create_router};

/// How often to refresh the airport directory (24 hours).
const AIRPORT_REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fare_server=debug,info")),
        )
        .init();

    // Create the provider client; base URLs can be overridden to point at a
    // local stub during development.
    let mut ryanair_config = RyanairConfig::new();
    if let Ok(url) = std::env::var("RYANAIR_FARES_URL") {
        ryanair_config = ryanair_config.with_fares_url(url);
    }
    if let Ok(url) = std::env::var("RYANAIR_ROUTES_URL") {
        ryanair_config = ryanair_config.with_routes_url(url);
    }

    let ryanair_client =
        RyanairClient::new(ryanair_config).expect("Failed to create Ryanair client");

    // Create cached client
    let cache_config = CacheConfig::default();
    let cached_fares = CachedFareClient::new(ryanair_client, &cache_config);

    // Create search config
    let search_config = SearchConfig::default();

    // Fetch the airport directory. The directory is UI-only, so failure
    // degrades to an empty lookup instead of preventing startup.
    let airport_client =
        AirportClient::new(AirportClientConfig::new()).expect("Failed to create airport client");
    let airports = match AirportDirectory::fetch(airport_client.clone()).await {
        Ok(directory) => {
            let count = directory.len().await;
            info!(airports = count, "loaded airport directory");
            directory
        }
        Err(e) => {
            warn!(error = %e, "airport directory unavailable, starting with an empty one");
            AirportDirectory::empty(airport_client)
        }
    };

    // Spawn background task to refresh the airport directory daily
    let airports_refresh = airports.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(AIRPORT_REFRESH_INTERVAL);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            match airports_refresh.refresh().await {
                Ok(count) => info!(airports = count, "refreshed airport directory"),
                Err(e) => warn!(error = %e, "failed to refresh airport directory"),
            }
        }
    });

    // Build app state
    let state = AppState::new(cached_fares, airports, search_config);

    // Create router
    let app = create_router(state, "static");

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("Fare search server listening on http://{addr}");
    info!("API endpoints: GET /health, GET /api/airports, GET /api/airports/search, GET /api/search");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}

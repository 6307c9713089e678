//! Application state for the web layer.

use std::sync::Arc;

use crate::airports::AirportDirectory;
use crate::cache::CachedFareClient;
use crate::search::SearchConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached fare provider client
    pub fares: Arc<CachedFareClient>,

    /// Airport directory for UI lookups
    pub airports: AirportDirectory,

    /// Search engine configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(fares: CachedFareClient, airports: AirportDirectory, config: SearchConfig) -> Self {
        Self {
            fares: Arc::new(fares),
            airports,
            config: Arc::new(config),
        }
    }
}

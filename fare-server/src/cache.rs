//! Caching layer for provider responses.
//!
//! Date-window and multi-airport searches probe the same fares and route
//! listings many times over (every hub probe of every combination hits the
//! same provider endpoints). We cache both, including negative "no fare"
//! answers, which the provider reports authoritatively.
//!
//! Route listings change rarely and get a long TTL; fares move during the
//! day and get a short one. Errors are never cached.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use moka::future::Cache as MokaCache;

use crate::domain::{AirportCode, FareLeg};
use crate::ryanair::{RyanairClient, RyanairError};
use crate::search::{FareSource, SearchError};

/// Cache key for fare lookups.
type FareKey = (AirportCode, AirportCode, NaiveDate);

/// Cached route listing entry.
type RouteListing = Arc<Vec<AirportCode>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached fares (positive and negative).
    pub fare_ttl: Duration,

    /// TTL for cached route listings.
    pub route_ttl: Duration,

    /// Maximum number of cached fare entries.
    pub fare_capacity: u64,

    /// Maximum number of cached route listings.
    pub route_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            fare_ttl: Duration::from_secs(10 * 60),
            route_ttl: Duration::from_secs(6 * 60 * 60),
            fare_capacity: 10_000,
            route_capacity: 500,
        }
    }
}

/// Cache for provider responses.
pub struct FareCache {
    /// Cheapest one-way fares, keyed by (origin, destination, date).
    /// `None` records an authoritative "no fare that day".
    fares: MokaCache<FareKey, Option<FareLeg>>,

    /// Nonstop route listings, keyed by origin airport.
    routes: MokaCache<AirportCode, RouteListing>,
}

impl FareCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let fares = MokaCache::builder()
            .time_to_live(config.fare_ttl)
            .max_capacity(config.fare_capacity)
            .build();

        let routes = MokaCache::builder()
            .time_to_live(config.route_ttl)
            .max_capacity(config.route_capacity)
            .build();

        Self { fares, routes }
    }

    /// Get a cached fare entry.
    pub async fn get_fare(&self, key: &FareKey) -> Option<Option<FareLeg>> {
        self.fares.get(key).await
    }

    /// Insert a fare entry into the cache.
    pub async fn insert_fare(&self, key: FareKey, entry: Option<FareLeg>) {
        self.fares.insert(key, entry).await;
    }

    /// Get a cached route listing.
    pub async fn get_routes(&self, key: &AirportCode) -> Option<RouteListing> {
        self.routes.get(key).await
    }

    /// Insert a route listing into the cache.
    pub async fn insert_routes(&self, key: AirportCode, entry: RouteListing) {
        self.routes.insert(key, entry).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn fare_entry_count(&self) -> u64 {
        self.fares.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.fares.invalidate_all();
        self.routes.invalidate_all();
    }
}

/// Ryanair client with caching.
///
/// Wraps a `RyanairClient` and caches fares and route listings. This is
/// the production [`FareSource`] handed to the search engine.
pub struct CachedFareClient {
    client: RyanairClient,
    cache: FareCache,
}

impl CachedFareClient {
    /// Create a new cached client.
    pub fn new(client: RyanairClient, cache_config: &CacheConfig) -> Self {
        Self {
            client,
            cache: FareCache::new(cache_config),
        }
    }

    /// Get the cheapest one-way fare, using the cache if possible.
    pub async fn one_way_fare(
        &self,
        origin: &AirportCode,
        destination: &AirportCode,
        date: NaiveDate,
    ) -> Result<Option<FareLeg>, RyanairError> {
        let key = (*origin, *destination, date);

        if let Some(cached) = self.cache.get_fare(&key).await {
            return Ok(cached);
        }

        let fare = self.client.one_way_fare(origin, destination, date).await?;
        self.cache.insert_fare(key, fare.clone()).await;

        Ok(fare)
    }

    /// Get the nonstop route listing, using the cache if possible.
    pub async fn nonstop_destinations(
        &self,
        origin: &AirportCode,
    ) -> Result<RouteListing, RyanairError> {
        if let Some(cached) = self.cache.get_routes(origin).await {
            return Ok(cached);
        }

        let routes = self.client.nonstop_destinations(origin).await?;
        let entry = Arc::new(routes);
        self.cache.insert_routes(*origin, entry.clone()).await;

        Ok(entry)
    }

    /// Access the underlying client for operations that bypass the cache.
    pub fn client(&self) -> &RyanairClient {
        &self.client
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.fare_entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}

impl FareSource for CachedFareClient {
    async fn one_way_fare(
        &self,
        origin: &AirportCode,
        destination: &AirportCode,
        date: NaiveDate,
    ) -> Result<Option<FareLeg>, SearchError> {
        CachedFareClient::one_way_fare(self, origin, destination, date)
            .await
            .map_err(|e| SearchError::Fetch(e.to_string()))
    }

    async fn nonstop_destinations(
        &self,
        airport: &AirportCode,
    ) -> Result<Vec<AirportCode>, SearchError> {
        CachedFareClient::nonstop_destinations(self, airport)
            .await
            .map(|routes| routes.as_ref().clone())
            .map_err(|e| SearchError::Fetch(e.to_string()))
    }
}

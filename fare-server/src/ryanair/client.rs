//! Ryanair HTTP client.
//!
//! Provides async methods for querying the public fare-finder and
//! route-listing endpoints. Handles request headers, rate limiting, and
//! conversion to domain types.

use std::sync::Arc;

use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tokio::sync::Semaphore;

use crate::domain::{AirportCode, FareLeg};

use super::error::RyanairError;
use super::types::{OneWayFaresResponse, RouteEntry};

/// Default base URL for the fare-finder API.
const DEFAULT_FARES_URL: &str = "https://services-api.ryanair.com/farfnd/v4";

/// Default base URL for the route-listing API.
const DEFAULT_ROUTES_URL: &str = "https://www.ryanair.com/api/views/locate";

/// Default currency requested from the fare-finder.
const DEFAULT_CURRENCY: &str = "EUR";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Browser-style user agent; the public endpoints reject default client UAs.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for the Ryanair client.
#[derive(Debug, Clone)]
pub struct RyanairConfig {
    /// Base URL for the fare-finder API
    pub fares_url: String,
    /// Base URL for the route-listing API
    pub routes_url: String,
    /// Currency code requested from the fare-finder
    pub currency: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RyanairConfig {
    /// Create a config with production defaults.
    pub fn new() -> Self {
        Self {
            fares_url: DEFAULT_FARES_URL.to_string(),
            routes_url: DEFAULT_ROUTES_URL.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 10,
        }
    }

    /// Set a custom fare-finder base URL (for testing).
    pub fn with_fares_url(mut self, url: impl Into<String>) -> Self {
        self.fares_url = url.into();
        self
    }

    /// Set a custom route-listing base URL (for testing).
    pub fn with_routes_url(mut self, url: impl Into<String>) -> Self {
        self.routes_url = url.into();
        self
    }

    /// Set the fare currency.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for RyanairConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Ryanair fare-finder API client.
///
/// Provides methods for fetching one-way fares and nonstop route listings.
/// Uses a semaphore to limit concurrent requests and avoid rate limiting.
#[derive(Debug, Clone)]
pub struct RyanairClient {
    http: reqwest::Client,
    fares_url: String,
    routes_url: String,
    currency: String,
    semaphore: Arc<Semaphore>,
}

impl RyanairClient {
    /// Create a new Ryanair client with the given configuration.
    pub fn new(config: RyanairConfig) -> Result<Self, RyanairError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            fares_url: config.fares_url,
            routes_url: config.routes_url,
            currency: config.currency,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Get the cheapest one-way fare for a route on a date.
    ///
    /// Returns `Ok(None)` when the provider advertises no fare for that day;
    /// data is never invented.
    pub async fn one_way_fare(
        &self,
        origin: &AirportCode,
        destination: &AirportCode,
        date: NaiveDate,
    ) -> Result<Option<FareLeg>, RyanairError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| RyanairError::ApiError {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/oneWayFares", self.fares_url);
        let date_str = date.format("%Y-%m-%d").to_string();

        let response = self
            .http
            .get(&url)
            .query(&[
                ("departureAirportIataCode", origin.as_str()),
                ("arrivalAirportIataCode", destination.as_str()),
                ("outboundDepartureDateFrom", date_str.as_str()),
                ("outboundDepartureDateTo", date_str.as_str()),
                ("currency", self.currency.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RyanairError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RyanairError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let fares: OneWayFaresResponse =
            serde_json::from_str(&body).map_err(|e| RyanairError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        // The provider returns at most one fare for a single-day window;
        // take the first entry either way.
        match fares.fares.first() {
            Some(entry) => {
                let leg = entry.outbound.to_leg().map_err(|e| RyanairError::Json {
                    message: e.to_string(),
                    body: None,
                })?;
                Ok(Some(leg))
            }
            None => Ok(None),
        }
    }

    /// Get the set of airports reachable nonstop from `origin`.
    ///
    /// Entries with malformed airport codes are skipped rather than failing
    /// the whole listing.
    pub async fn nonstop_destinations(
        &self,
        origin: &AirportCode,
    ) -> Result<Vec<AirportCode>, RyanairError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| RyanairError::ApiError {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!(
            "{}/searchWidget/routes/en/airport/{}",
            self.routes_url,
            origin.as_str()
        );

        let response = self.http.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RyanairError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RyanairError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let routes: Vec<RouteEntry> =
            serde_json::from_str(&body).map_err(|e| RyanairError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        Ok(routes
            .iter()
            .filter_map(|r| AirportCode::parse_normalized(&r.arrival_airport.code).ok())
            .collect())
    }
}

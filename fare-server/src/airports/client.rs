//! Airport listing API client.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;

use super::error::AirportError;

/// Default base URL for the airport listing API.
const DEFAULT_BASE_URL: &str = "https://www.ryanair.com/api/views/locate";

/// Browser-style user agent; the public endpoints reject default client UAs.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// DTO for one served airport.
#[derive(Debug, Clone, Deserialize)]
pub struct AirportDto {
    pub code: String,
    pub name: String,
    pub country: RegionDto,
    pub city: RegionDto,
}

/// Named region (country or city) attached to an airport.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionDto {
    pub name: String,
}

/// Configuration for the airport listing client.
#[derive(Debug, Clone)]
pub struct AirportClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl AirportClientConfig {
    /// Create a config with production defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl Default for AirportClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the served-airport listing.
#[derive(Debug, Clone)]
pub struct AirportClient {
    http: reqwest::Client,
    base_url: String,
}

impl AirportClient {
    /// Create a new airport listing client.
    pub fn new(config: AirportClientConfig) -> Result<Self, AirportError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch all active airports from the API.
    pub async fn fetch_all(&self) -> Result<Vec<AirportDto>, AirportError> {
        let url = format!("{}/5/airports/en/active", self.base_url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AirportError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let airports: Vec<AirportDto> =
            serde_json::from_str(&body).map_err(|e| AirportError::Json {
                message: e.to_string(),
            })?;

        Ok(airports)
    }
}

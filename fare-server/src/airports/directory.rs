//! Airport directory lookup.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::AirportCode;

use super::client::{AirportClient, AirportDto};
use super::error::AirportError;

/// One served airport, validated for lookup.
#[derive(Debug, Clone)]
pub struct Airport {
    pub code: AirportCode,
    pub name: String,
    pub country: String,
    pub city: String,
}

/// Thread-safe airport directory.
///
/// Holds the provider's static list of served airports for UI lookups
/// (autocomplete and display names), with support for background refresh.
/// The search engine itself never consults the directory.
#[derive(Clone)]
pub struct AirportDirectory {
    inner: Arc<RwLock<Vec<Airport>>>,
    client: AirportClient,
}

impl AirportDirectory {
    /// Create a new directory by fetching from the API.
    ///
    /// This will fail if the API is unreachable.
    pub async fn fetch(client: AirportClient) -> Result<Self, AirportError> {
        let airports = client.fetch_all().await?;
        let list = build_list(airports);

        Ok(Self {
            inner: Arc::new(RwLock::new(list)),
            client,
        })
    }

    /// Create an empty directory (degraded mode; searches still work, the
    /// UI just loses autocomplete).
    pub fn empty(client: AirportClient) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Vec::new())),
            client,
        }
    }

    /// Get the number of airports in the directory.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    /// Check if the directory is empty.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.is_empty()
    }

    /// Return all airports, sorted by code.
    pub async fn all(&self) -> Vec<Airport> {
        let guard = self.inner.read().await;
        guard.clone()
    }

    /// Look up an airport's display name by code.
    pub async fn get(&self, code: &AirportCode) -> Option<Airport> {
        let guard = self.inner.read().await;
        guard.iter().find(|a| &a.code == code).cloned()
    }

    /// Search airports for autocomplete.
    ///
    /// Case-insensitive; matches the code, name, city, or country. Code
    /// matches rank before the rest.
    pub async fn search(&self, query: &str, limit: usize) -> Vec<Airport> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let guard = self.inner.read().await;

        let mut code_matches = Vec::new();
        let mut text_matches = Vec::new();

        for airport in guard.iter() {
            if airport.code.as_str().to_lowercase().starts_with(&needle) {
                code_matches.push(airport.clone());
            } else if airport.name.to_lowercase().contains(&needle)
                || airport.city.to_lowercase().contains(&needle)
                || airport.country.to_lowercase().contains(&needle)
            {
                text_matches.push(airport.clone());
            }
        }

        code_matches.extend(text_matches);
        code_matches.truncate(limit);
        code_matches
    }

    /// Refresh the directory from the API.
    ///
    /// On success, replaces the current list. On failure, the existing
    /// list is preserved and the error is returned.
    pub async fn refresh(&self) -> Result<usize, AirportError> {
        let airports = self.client.fetch_all().await?;
        let list = build_list(airports);
        let count = list.len();

        let mut guard = self.inner.write().await;
        *guard = list;

        Ok(count)
    }
}

/// Build the validated, code-sorted airport list from DTOs.
///
/// Entries with malformed codes are dropped.
fn build_list(airports: Vec<AirportDto>) -> Vec<Airport> {
    let mut list: Vec<Airport> = airports
        .into_iter()
        .filter_map(|a| {
            AirportCode::parse_normalized(&a.code)
                .ok()
                .map(|code| Airport {
                    code,
                    name: a.name,
                    country: a.country.name,
                    city: a.city.name,
                })
        })
        .collect();
    list.sort_by_key(|a| a.code);
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airports::client::RegionDto;

    fn dto(code: &str, name: &str, country: &str, city: &str) -> AirportDto {
        AirportDto {
            code: code.to_string(),
            name: name.to_string(),
            country: RegionDto {
                name: country.to_string(),
            },
            city: RegionDto {
                name: city.to_string(),
            },
        }
    }

    #[test]
    fn build_list_filters_invalid_codes() {
        let list = build_list(vec![
            dto("STN", "London Stansted", "United Kingdom", "London"),
            dto("invalid", "Bad Airport", "Nowhere", "Nowhere"),
            dto("VNO", "Vilnius", "Lithuania", "Vilnius"),
        ]);

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].code.as_str(), "STN");
        assert_eq!(list[1].code.as_str(), "VNO");
    }

    #[test]
    fn build_list_handles_lowercase_codes() {
        let list = build_list(vec![dto("stn", "London Stansted", "United Kingdom", "London")]);

        assert_eq!(list.len(), 1);
        assert_eq!(list[0].code.as_str(), "STN");
    }

    use super::super::client::AirportClientConfig;

    /// Seed a directory directly; `fetch()` needs the network.
    async fn directory_with(list: Vec<AirportDto>) -> AirportDirectory {
        let client = AirportClient::new(AirportClientConfig::new()).unwrap();
        let directory = AirportDirectory::empty(client);
        *directory.inner.write().await = build_list(list);
        directory
    }

    #[tokio::test]
    async fn search_prefers_code_matches() {
        let directory = directory_with(vec![
            dto("VNO", "Vilnius", "Lithuania", "Vilnius"),
            dto("KUN", "Kaunas", "Lithuania", "Kaunas"),
            dto("STN", "London Stansted", "United Kingdom", "London"),
        ])
        .await;

        let results = directory.search("vno", 10).await;
        assert_eq!(results[0].code.as_str(), "VNO");

        // "lith" matches both Lithuanian airports by country.
        let results = directory.search("lith", 10).await;
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn search_respects_limit_and_empty_query() {
        let directory = directory_with(vec![
            dto("VNO", "Vilnius", "Lithuania", "Vilnius"),
            dto("KUN", "Kaunas", "Lithuania", "Kaunas"),
        ])
        .await;

        assert_eq!(directory.search("lith", 1).await.len(), 1);
        assert!(directory.search("", 10).await.is_empty());
        assert!(directory.search("   ", 10).await.is_empty());
    }

    #[tokio::test]
    async fn get_by_code() {
        let directory = directory_with(vec![dto("VNO", "Vilnius", "Lithuania", "Vilnius")]).await;

        let vno = AirportCode::parse("VNO").unwrap();
        assert_eq!(directory.get(&vno).await.unwrap().name, "Vilnius");

        let xxx = AirportCode::parse("XXX").unwrap();
        assert!(directory.get(&xxx).await.is_none());
    }

    #[tokio::test]
    async fn empty_directory() {
        let client = AirportClient::new(AirportClientConfig::new()).unwrap();
        let directory = AirportDirectory::empty(client);

        assert!(directory.is_empty().await);
        assert_eq!(directory.len().await, 0);
        assert!(directory.all().await.is_empty());
    }
}

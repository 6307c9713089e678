//! Mock fare client for development without hitting the live API.
//!
//! Loads canned fares and route listings from JSON files and serves them
//! through the same [`FareSource`] contract as the real client.

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::{AirportCode, FareLeg, Price};
use crate::search::{FareSource, SearchError};

use super::error::RyanairError;

/// One canned fare in `fares.json`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MockFare {
    origin: String,
    destination: String,
    date: NaiveDate,
    departure_date: chrono::NaiveDateTime,
    arrival_date: chrono::NaiveDateTime,
    flight_number: String,
    price: MockPrice,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MockPrice {
    value: f64,
    currency_code: String,
}

/// Mock fare client that serves data from JSON files.
///
/// Expects a fixture directory containing `fares.json` (a list of fares
/// keyed by origin/destination/date) and `routes.json` (a map of airport
/// code to nonstop destination codes). Pairs with no canned fare yield
/// "no fare", exactly like the live API.
#[derive(Debug, Clone)]
pub struct MockFareClient {
    fares: HashMap<(AirportCode, AirportCode, NaiveDate), FareLeg>,
    routes: HashMap<AirportCode, Vec<AirportCode>>,
}

impl MockFareClient {
    /// Create a new mock client by loading fixtures from a directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, RyanairError> {
        let data_dir = data_dir.as_ref();

        let fares_json = std::fs::read_to_string(data_dir.join("fares.json")).map_err(|e| {
            RyanairError::ApiError {
                status: 0,
                message: format!("Failed to read fares.json in {:?}: {}", data_dir, e),
            }
        })?;
        let routes_json = std::fs::read_to_string(data_dir.join("routes.json")).map_err(|e| {
            RyanairError::ApiError {
                status: 0,
                message: format!("Failed to read routes.json in {:?}: {}", data_dir, e),
            }
        })?;

        let raw_fares: Vec<MockFare> =
            serde_json::from_str(&fares_json).map_err(|e| RyanairError::Json {
                message: format!("fares.json: {e}"),
                body: None,
            })?;
        let raw_routes: HashMap<String, Vec<String>> =
            serde_json::from_str(&routes_json).map_err(|e| RyanairError::Json {
                message: format!("routes.json: {e}"),
                body: None,
            })?;

        let mut fares = HashMap::new();
        for fare in raw_fares {
            let origin = parse_code(&fare.origin)?;
            let destination = parse_code(&fare.destination)?;
            let leg = FareLeg::new(
                fare.departure_date,
                fare.arrival_date,
                fare.flight_number,
                Price::new(fare.price.value, fare.price.currency_code),
            )
            .map_err(|e| RyanairError::Json {
                message: format!("fares.json: {e}"),
                body: None,
            })?;
            fares.insert((origin, destination, fare.date), leg);
        }

        let mut routes = HashMap::new();
        for (code, destinations) in raw_routes {
            let origin = parse_code(&code)?;
            let destinations = destinations
                .iter()
                .map(|d| parse_code(d))
                .collect::<Result<Vec<_>, _>>()?;
            routes.insert(origin, destinations);
        }

        Ok(Self { fares, routes })
    }

    /// List the airports with route data in the fixtures.
    pub fn available_airports(&self) -> Vec<AirportCode> {
        let mut airports: Vec<_> = self.routes.keys().copied().collect();
        airports.sort();
        airports
    }

    /// Number of canned fares loaded.
    pub fn fare_count(&self) -> usize {
        self.fares.len()
    }
}

fn parse_code(s: &str) -> Result<AirportCode, RyanairError> {
    AirportCode::parse_normalized(s).map_err(|e| RyanairError::Json {
        message: format!("invalid airport code {s:?}: {e}"),
        body: None,
    })
}

impl FareSource for MockFareClient {
    async fn one_way_fare(
        &self,
        origin: &AirportCode,
        destination: &AirportCode,
        date: NaiveDate,
    ) -> Result<Option<FareLeg>, SearchError> {
        Ok(self.fares.get(&(*origin, *destination, date)).cloned())
    }

    async fn nonstop_destinations(
        &self,
        airport: &AirportCode,
    ) -> Result<Vec<AirportCode>, SearchError> {
        Ok(self.routes.get(airport).cloned().unwrap_or_default())
    }
}

//! Wire types for the Ryanair fare-finder and route-listing endpoints.
//!
//! These mirror the JSON the public API actually returns; conversion into
//! domain types happens here so the client only ever hands out validated
//! data.

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::domain::{DomainError, FareLeg, Price};

/// Response of `GET /oneWayFares`.
#[derive(Debug, Deserialize)]
pub struct OneWayFaresResponse {
    #[serde(default)]
    pub fares: Vec<FareEntry>,
}

/// One fare entry; only the outbound flight matters for one-way queries.
#[derive(Debug, Deserialize)]
pub struct FareEntry {
    pub outbound: OutboundFare,
}

/// The priced flight inside a fare entry.
///
/// Timestamps are airport-local ISO 8601 without offsets
/// (e.g. `"2025-06-01T06:25:00"`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundFare {
    pub departure_date: NaiveDateTime,
    pub arrival_date: NaiveDateTime,
    pub price: PriceDto,
    pub flight_number: String,
}

/// Price as reported by the provider.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDto {
    pub value: f64,
    pub currency_code: String,
}

impl OutboundFare {
    /// Convert into a validated domain leg.
    ///
    /// # Errors
    ///
    /// Returns `Err` for payloads whose arrival does not follow the
    /// departure; the client treats those as malformed responses.
    pub fn to_leg(&self) -> Result<FareLeg, DomainError> {
        FareLeg::new(
            self.departure_date,
            self.arrival_date,
            self.flight_number.clone(),
            Price::new(self.price.value, self.price.currency_code.clone()),
        )
    }
}

/// One entry of `GET /searchWidget/routes/en/airport/{code}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEntry {
    pub arrival_airport: RouteAirport,
}

/// The destination airport of a route entry.
#[derive(Debug, Deserialize)]
pub struct RouteAirport {
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_one_way_fares_response() {
        let json = r#"{
            "fares": [
                {
                    "outbound": {
                        "departureAirport": {"iataCode": "STN"},
                        "arrivalAirport": {"iataCode": "BGY"},
                        "departureDate": "2025-06-01T06:25:00",
                        "arrivalDate": "2025-06-01T09:40:00",
                        "price": {"value": 29.99, "currencyCode": "EUR"},
                        "flightNumber": "FR 1885"
                    }
                }
            ]
        }"#;

        let response: OneWayFaresResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.fares.len(), 1);

        let leg = response.fares[0].outbound.to_leg().unwrap();
        assert_eq!(leg.flight_number(), "FR 1885");
        assert_eq!(leg.price().amount, 29.99);
        assert_eq!(leg.price().currency, "EUR");
        assert_eq!(leg.duration_mins(), 195);
    }

    #[test]
    fn parse_empty_fares_response() {
        let response: OneWayFaresResponse = serde_json::from_str(r#"{"fares": []}"#).unwrap();
        assert!(response.fares.is_empty());

        // The API sometimes omits the array entirely
        let response: OneWayFaresResponse = serde_json::from_str("{}").unwrap();
        assert!(response.fares.is_empty());
    }

    #[test]
    fn malformed_fare_rejected_on_conversion() {
        let json = r#"{
            "departureDate": "2025-06-01T10:00:00",
            "arrivalDate": "2025-06-01T08:00:00",
            "price": {"value": 9.99, "currencyCode": "EUR"},
            "flightNumber": "FR 1"
        }"#;

        let fare: OutboundFare = serde_json::from_str(json).unwrap();
        assert!(fare.to_leg().is_err());
    }

    #[test]
    fn parse_route_entries() {
        let json = r#"[
            {"arrivalAirport": {"code": "BGY", "name": "Milan Bergamo"}, "operator": "RYANAIR"},
            {"arrivalAirport": {"code": "VNO", "name": "Vilnius"}, "operator": "RYANAIR"}
        ]"#;

        let routes: Vec<RouteEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].arrival_airport.code, "BGY");
        assert_eq!(routes[1].arrival_airport.code, "VNO");
    }
}

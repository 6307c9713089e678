//! Data transfer objects for web requests and responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::airports::Airport;
use crate::domain::{AirportCode, FareLeg, Itinerary};
use crate::search::{DateDirection, DateWindow, SearchCriteria, SearchOutcome};

/// Query parameters for `/api/search`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Origin airport code(s), comma-joined for multi-airport search
    pub origin: String,

    /// Destination airport code(s), comma-joined
    pub dest: String,

    /// Departure date, YYYY-MM-DD
    pub date: String,

    /// Return date, YYYY-MM-DD; absence means one-way
    pub return_date: Option<String>,

    /// Flexible-date range in days around the departure date
    pub date_range_days: Option<String>,

    /// Departure window direction: "both" (default), "after", or "before"
    pub date_direction: Option<String>,

    /// Flexible-date range in days around the return date
    pub return_date_range: Option<String>,

    /// Return window direction: "both" (default), "after", or "before"
    pub return_date_direction: Option<String>,
}

impl SearchQuery {
    /// Parse the raw query into validated search criteria.
    ///
    /// Empty optional fields (as submitted by blank HTML form inputs) are
    /// treated as absent.
    ///
    /// # Errors
    ///
    /// Returns a human-readable message for the 400 response on malformed
    /// codes, dates, ranges, or directions.
    pub fn to_criteria(&self) -> Result<SearchCriteria, String> {
        let origins = parse_code_list(&self.origin)
            .map_err(|code| format!("Invalid origin airport code: {code}"))?;
        let destinations = parse_code_list(&self.dest)
            .map_err(|code| format!("Invalid destination airport code: {code}"))?;

        let departure_date = parse_date(&self.date)
            .ok_or_else(|| format!("Invalid departure date: {}", self.date))?;

        let mut criteria = SearchCriteria::new(origins, destinations, departure_date);

        if let Some(raw) = non_empty(self.return_date.as_deref()) {
            let date =
                parse_date(raw).ok_or_else(|| format!("Invalid return date: {raw}"))?;
            criteria = criteria.with_return_date(date);
        }

        if let Some(raw) = non_empty(self.date_range_days.as_deref()) {
            let days: u32 = raw
                .parse()
                .map_err(|_| format!("Invalid date range: {raw}"))?;
            let direction = parse_direction(non_empty(self.date_direction.as_deref()))?;
            criteria = criteria.with_departure_window(DateWindow::new(days, direction));
        }

        if let Some(raw) = non_empty(self.return_date_range.as_deref()) {
            let days: u32 = raw
                .parse()
                .map_err(|_| format!("Invalid return date range: {raw}"))?;
            let direction = parse_direction(non_empty(self.return_date_direction.as_deref()))?;
            criteria = criteria.with_return_window(DateWindow::new(days, direction));
        }

        Ok(criteria)
    }
}

/// Treat blank form fields as absent.
fn non_empty(opt: Option<&str>) -> Option<&str> {
    opt.map(str::trim).filter(|s| !s.is_empty())
}

/// Split a comma-joined code list into validated airport codes.
///
/// Returns the first offending fragment on failure.
fn parse_code_list(raw: &str) -> Result<Vec<AirportCode>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| AirportCode::parse_normalized(s).map_err(|_| s.to_string()))
        .collect()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn parse_direction(raw: Option<&str>) -> Result<DateDirection, String> {
    match raw {
        None => Ok(DateDirection::Both),
        Some(s) => DateDirection::parse(s).ok_or_else(|| format!("Invalid date direction: {s}")),
    }
}

/// Query parameters for `/api/airports/search`.
#[derive(Debug, Deserialize)]
pub struct AirportSearchQuery {
    /// Search text (code, name, city, or country)
    pub q: String,

    /// Maximum results (default 10, capped at 50)
    pub limit: Option<usize>,
}

/// An airport in directory responses.
#[derive(Debug, Serialize)]
pub struct AirportResult {
    /// IATA code
    pub code: String,

    /// Display name
    pub name: String,

    /// Country name
    pub country: String,

    /// City name
    pub city: String,
}

impl AirportResult {
    /// Build from a directory entry.
    pub fn from_airport(airport: &Airport) -> Self {
        Self {
            code: airport.code.as_str().to_string(),
            name: airport.name.clone(),
            country: airport.country.clone(),
            city: airport.city.clone(),
        }
    }
}

/// Response for airport listing and search.
#[derive(Debug, Serialize)]
pub struct AirportsResponse {
    /// Matching airports
    pub airports: Vec<AirportResult>,
}

/// A price in search responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceResult {
    pub amount: f64,
    pub currency: String,
}

/// A flight leg in search responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegResult {
    /// Flight number (e.g. "FR 1885")
    pub flight_number: String,

    /// Scheduled departure, airport-local ISO 8601
    pub departure: String,

    /// Scheduled arrival, airport-local ISO 8601
    pub arrival: String,

    /// Leg fare
    pub price: PriceResult,
}

impl LegResult {
    fn from_leg(leg: &FareLeg) -> Self {
        Self {
            flight_number: leg.flight_number().to_string(),
            departure: leg.departure().format("%Y-%m-%dT%H:%M:%S").to_string(),
            arrival: leg.arrival().format("%Y-%m-%dT%H:%M:%S").to_string(),
            price: PriceResult {
                amount: leg.price().amount,
                currency: leg.price().currency.clone(),
            },
        }
    }
}

/// One itinerary in search responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryResult {
    /// "direct" or "layover"
    pub kind: String,

    /// Origin airport code
    pub origin: String,

    /// Destination airport code
    pub destination: String,

    /// Hub airport code (layovers only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via: Option<String>,

    /// The search date that produced this itinerary
    pub search_date: String,

    /// Legs in travel order
    pub legs: Vec<LegResult>,

    /// Sum of leg fares
    pub total_price: f64,

    /// Currency of the total
    pub currency: String,

    /// First departure to last arrival, in minutes
    pub duration_mins: i64,
}

impl ItineraryResult {
    /// Build from a domain itinerary.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        let total = itinerary.total_price();
        Self {
            kind: itinerary.kind().as_str().to_string(),
            origin: itinerary.origin().as_str().to_string(),
            destination: itinerary.destination().as_str().to_string(),
            via: itinerary.via().map(|v| v.as_str().to_string()),
            search_date: itinerary.search_date().format("%Y-%m-%d").to_string(),
            legs: itinerary.legs().iter().map(LegResult::from_leg).collect(),
            total_price: total.amount,
            currency: total.currency,
            duration_mins: itinerary.duration_mins(),
        }
    }
}

/// One ranked search result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// The outbound itinerary
    pub outbound: ItineraryResult,

    /// Whether this is a round-trip result
    pub is_round_trip: bool,

    /// Feasible returns, cheapest first (round trips only; an empty list
    /// means "no return available")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_options: Option<Vec<ItineraryResult>>,

    /// Ranking price: itinerary total, or combined round-trip total
    pub total_price: f64,
}

impl SearchResult {
    /// Build from a search outcome.
    pub fn from_outcome(outcome: &SearchOutcome) -> Self {
        match outcome {
            SearchOutcome::OneWay(itinerary) => Self {
                outbound: ItineraryResult::from_itinerary(itinerary),
                is_round_trip: false,
                return_options: None,
                total_price: itinerary.total_price().amount,
            },
            SearchOutcome::RoundTrip(rt) => Self {
                outbound: ItineraryResult::from_itinerary(rt.outbound()),
                is_round_trip: true,
                return_options: Some(
                    rt.return_options()
                        .iter()
                        .map(ItineraryResult::from_itinerary)
                        .collect(),
                ),
                total_price: rt.total_price().amount,
            },
        }
    }
}

/// Response for `/api/search`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Results, cheapest first
    pub results: Vec<SearchResult>,
}

/// Error body for non-success responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Price, RoundTripItinerary};

    fn query(origin: &str, dest: &str, date: &str) -> SearchQuery {
        SearchQuery {
            origin: origin.to_string(),
            dest: dest.to_string(),
            date: date.to_string(),
            return_date: None,
            date_range_days: None,
            date_direction: None,
            return_date_range: None,
            return_date_direction: None,
        }
    }

    #[test]
    fn criteria_from_minimal_query() {
        let criteria = query("STN", "BGY", "2025-06-01").to_criteria().unwrap();

        assert_eq!(criteria.origins.len(), 1);
        assert_eq!(criteria.origins[0].as_str(), "STN");
        assert_eq!(criteria.destinations[0].as_str(), "BGY");
        assert_eq!(
            criteria.departure_date,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );
        assert!(criteria.return_date.is_none());
        assert!(criteria.departure_window.is_none());
    }

    #[test]
    fn criteria_splits_multi_airport_lists() {
        let criteria = query("STN, ltn,sen", "BGY", "2025-06-01")
            .to_criteria()
            .unwrap();

        let codes: Vec<&str> = criteria.origins.iter().map(|c| c.as_str()).collect();
        assert_eq!(codes, vec!["STN", "LTN", "SEN"]);
    }

    #[test]
    fn criteria_with_windows() {
        let mut q = query("STN", "BGY", "2025-06-01");
        q.return_date = Some("2025-06-08".to_string());
        q.date_range_days = Some("2".to_string());
        q.date_direction = Some("after".to_string());
        q.return_date_range = Some("1".to_string());

        let criteria = q.to_criteria().unwrap();

        let window = criteria.departure_window.unwrap();
        assert_eq!(window.days, 2);
        assert_eq!(window.direction, DateDirection::After);

        // Direction defaults to "both" when omitted.
        let return_window = criteria.return_window.unwrap();
        assert_eq!(return_window.direction, DateDirection::Both);
    }

    #[test]
    fn blank_form_fields_treated_as_absent() {
        let mut q = query("STN", "BGY", "2025-06-01");
        q.return_date = Some(String::new());
        q.date_range_days = Some(String::new());
        q.date_direction = Some(String::new());
        q.return_date_range = Some(" ".to_string());

        let criteria = q.to_criteria().unwrap();

        assert!(criteria.return_date.is_none());
        assert!(criteria.departure_window.is_none());
        assert!(criteria.return_window.is_none());
    }

    #[test]
    fn criteria_rejects_bad_input() {
        assert!(query("ST", "BGY", "2025-06-01").to_criteria().is_err());
        assert!(query("STN", "B-Y", "2025-06-01").to_criteria().is_err());
        assert!(query("STN", "BGY", "01/06/2025").to_criteria().is_err());

        let mut q = query("STN", "BGY", "2025-06-01");
        q.date_range_days = Some("2".to_string());
        q.date_direction = Some("sideways".to_string());
        assert!(q.to_criteria().is_err());

        let mut q = query("STN", "BGY", "2025-06-01");
        q.date_range_days = Some("many".to_string());
        assert!(q.to_criteria().is_err());

        let mut q = query("STN", "BGY", "2025-06-01");
        q.return_date = Some("not-a-date".to_string());
        assert!(q.to_criteria().is_err());
    }

    #[test]
    fn empty_code_list_yields_invalid_criteria() {
        // Parses to an empty origin set; the orchestrator's validation
        // rejects it as invalid criteria rather than a parse error.
        let criteria = query(" , ", "BGY", "2025-06-01").to_criteria().unwrap();
        assert!(criteria.origins.is_empty());
        assert!(criteria.validate().is_err());
    }

    fn sample_itinerary() -> Itinerary {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let leg = FareLeg::new(
            date.and_hms_opt(6, 25, 0).unwrap(),
            date.and_hms_opt(9, 40, 0).unwrap(),
            "FR 1885",
            Price::new(29.99, "EUR"),
        )
        .unwrap();
        Itinerary::direct(
            AirportCode::parse("STN").unwrap(),
            AirportCode::parse("BGY").unwrap(),
            leg,
            date,
        )
    }

    #[test]
    fn itinerary_result_mapping() {
        let result = ItineraryResult::from_itinerary(&sample_itinerary());

        assert_eq!(result.kind, "direct");
        assert_eq!(result.origin, "STN");
        assert_eq!(result.destination, "BGY");
        assert_eq!(result.via, None);
        assert_eq!(result.search_date, "2025-06-01");
        assert_eq!(result.legs.len(), 1);
        assert_eq!(result.legs[0].departure, "2025-06-01T06:25:00");
        assert_eq!(result.total_price, 29.99);
        assert_eq!(result.currency, "EUR");
        assert_eq!(result.duration_mins, 195);
    }

    #[test]
    fn one_way_outcome_has_no_return_fields() {
        let outcome = SearchOutcome::OneWay(sample_itinerary());
        let result = SearchResult::from_outcome(&outcome);

        assert!(!result.is_round_trip);
        assert!(result.return_options.is_none());

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("returnOptions").is_none());
        assert_eq!(json["isRoundTrip"], false);
    }

    #[test]
    fn incomplete_round_trip_serializes_empty_return_list() {
        let outcome =
            SearchOutcome::RoundTrip(RoundTripItinerary::new(sample_itinerary(), vec![]));
        let result = SearchResult::from_outcome(&outcome);

        assert!(result.is_round_trip);
        assert!(result.return_options.as_ref().unwrap().is_empty());
        assert_eq!(result.total_price, 29.99);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["returnOptions"], serde_json::json!([]));
    }
}

//! Askama templates for the web frontend.

use askama::Template;
use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::{AirportCode, FareLeg, Itinerary, ItineraryKind};
use crate::search::SearchOutcome;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// Search results page.
#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsTemplate {
    pub results: Vec<ItineraryView>,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One leg row in a result card.
pub struct LegView {
    pub flight_number: String,
    pub departure: String,
    pub arrival: String,
    pub price: String,
}

impl LegView {
    fn from_leg(leg: &FareLeg) -> Self {
        Self {
            flight_number: leg.flight_number().to_string(),
            departure: format_datetime(leg.departure()),
            arrival: format_datetime(leg.arrival()),
            price: leg.price().to_string(),
        }
    }
}

/// One search result card.
pub struct ItineraryView {
    pub route: String,
    pub kind_label: String,
    pub search_date: String,
    pub legs: Vec<LegView>,
    pub duration: String,
    pub total_price: String,
    pub is_round_trip: bool,
    pub has_return: bool,
    pub return_legs: Vec<LegView>,
    pub return_summary: String,
    pub booking_url: String,
}

impl ItineraryView {
    /// Build a card from a search outcome.
    pub fn from_outcome(outcome: &SearchOutcome) -> Self {
        let outbound = outcome.outbound();

        let (is_round_trip, best_return, return_count) = match outcome {
            SearchOutcome::OneWay(_) => (false, None, 0),
            SearchOutcome::RoundTrip(rt) => (
                true,
                rt.return_options().first(),
                rt.return_options().len(),
            ),
        };

        let return_summary = match (is_round_trip, best_return) {
            (false, _) => String::new(),
            (true, None) => "No return available".to_string(),
            (true, Some(ret)) => {
                let alternates = return_count - 1;
                if alternates > 0 {
                    format!(
                        "Return {} ({} more option{})",
                        ret.total_price(),
                        alternates,
                        if alternates == 1 { "" } else { "s" }
                    )
                } else {
                    format!("Return {}", ret.total_price())
                }
            }
        };

        let booking_date_in = best_return.map(|ret| ret.departure_time().date());

        Self {
            route: format!("{} → {}", outbound.origin(), outbound.destination()),
            kind_label: kind_label(outbound),
            search_date: outbound.search_date().format("%a %d %b %Y").to_string(),
            legs: outbound.legs().iter().map(LegView::from_leg).collect(),
            duration: format_duration(outbound.duration_mins()),
            total_price: outcome.total_price().to_string(),
            is_round_trip,
            has_return: best_return.is_some(),
            return_legs: best_return
                .map(|ret| ret.legs().iter().map(LegView::from_leg).collect())
                .unwrap_or_default(),
            return_summary,
            booking_url: booking_url(
                outbound.origin(),
                outbound.destination(),
                outbound.departure_time().date(),
                booking_date_in,
            ),
        }
    }
}

/// Human label for an itinerary's kind, including the hub and wait for
/// layovers.
fn kind_label(itinerary: &Itinerary) -> String {
    match (itinerary.kind(), itinerary.via(), itinerary.connection_mins()) {
        (ItineraryKind::Direct, _, _) => "Direct".to_string(),
        (ItineraryKind::Layover, Some(hub), Some(wait)) => {
            format!("1 stop via {} ({} at hub)", hub, format_duration(wait))
        }
        // Layover invariants guarantee hub and wait exist
        (ItineraryKind::Layover, _, _) => "1 stop".to_string(),
    }
}

/// Format minutes as "7h 25m".
fn format_duration(mins: i64) -> String {
    format!("{}h {}m", mins / 60, mins % 60)
}

/// Format a timestamp as "Sun 01 Jun 06:25".
fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format("%a %d %b %H:%M").to_string()
}

/// Deep link into the provider's booking flow for the given route and
/// dates. Booking itself stays with the provider; we only link out.
fn booking_url(
    origin: AirportCode,
    destination: AirportCode,
    date_out: NaiveDate,
    date_in: Option<NaiveDate>,
) -> String {
    let base = format!(
        "https://www.ryanair.com/en/en/trip/flights/select\
         ?adt=1&chd=0&inf=0&originIata={}&destinationIata={}&dateOut={}",
        origin,
        destination,
        date_out.format("%Y-%m-%d"),
    );

    match date_in {
        Some(date_in) => format!(
            "{base}&dateIn={}&roundtrip=true",
            date_in.format("%Y-%m-%d")
        ),
        None => format!("{base}&roundtrip=false"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Price, RoundTripItinerary};

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn direct(from: &str, to: &str, d: u32, dep_h: u32, arr_h: u32, amount: f64) -> Itinerary {
        let leg = FareLeg::new(
            day(d).and_hms_opt(dep_h, 0, 0).unwrap(),
            day(d).and_hms_opt(arr_h, 0, 0).unwrap(),
            "FR 1885",
            Price::new(amount, "EUR"),
        )
        .unwrap();
        Itinerary::direct(code(from), code(to), leg, day(d))
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(195), "3h 15m");
        assert_eq!(format_duration(60), "1h 0m");
        assert_eq!(format_duration(45), "0h 45m");
    }

    #[test]
    fn one_way_booking_url() {
        let url = booking_url(code("STN"), code("BGY"), day(1), None);
        assert!(url.contains("originIata=STN"));
        assert!(url.contains("destinationIata=BGY"));
        assert!(url.contains("dateOut=2025-06-01"));
        assert!(url.contains("roundtrip=false"));
        assert!(!url.contains("dateIn"));
    }

    #[test]
    fn round_trip_booking_url() {
        let url = booking_url(code("STN"), code("BGY"), day(1), Some(day(8)));
        assert!(url.contains("dateOut=2025-06-01"));
        assert!(url.contains("dateIn=2025-06-08"));
        assert!(url.contains("roundtrip=true"));
    }

    #[test]
    fn one_way_view() {
        let view = ItineraryView::from_outcome(&SearchOutcome::OneWay(direct(
            "STN", "BGY", 1, 6, 9, 29.99,
        )));

        assert_eq!(view.route, "STN → BGY");
        assert_eq!(view.kind_label, "Direct");
        assert_eq!(view.total_price, "29.99 EUR");
        assert_eq!(view.duration, "3h 0m");
        assert!(!view.is_round_trip);
        assert!(view.return_legs.is_empty());
        assert!(view.return_summary.is_empty());
    }

    #[test]
    fn layover_view_labels_hub_and_wait() {
        let first = FareLeg::new(
            day(1).and_hms_opt(8, 0, 0).unwrap(),
            day(1).and_hms_opt(10, 0, 0).unwrap(),
            "FR 1",
            Price::new(20.0, "EUR"),
        )
        .unwrap();
        let second = FareLeg::new(
            day(1).and_hms_opt(13, 0, 0).unwrap(),
            day(1).and_hms_opt(15, 0, 0).unwrap(),
            "FR 2",
            Price::new(30.0, "EUR"),
        )
        .unwrap();
        let itinerary =
            Itinerary::layover(code("STN"), code("VNO"), code("BGY"), first, second, day(1))
                .unwrap();

        let view = ItineraryView::from_outcome(&SearchOutcome::OneWay(itinerary));

        assert_eq!(view.kind_label, "1 stop via BGY (3h 0m at hub)");
        assert_eq!(view.legs.len(), 2);
    }

    #[test]
    fn incomplete_round_trip_view_warns() {
        let rt = RoundTripItinerary::new(direct("STN", "BGY", 1, 6, 9, 29.99), vec![]);
        let view = ItineraryView::from_outcome(&SearchOutcome::RoundTrip(rt));

        assert!(view.is_round_trip);
        assert!(!view.has_return);
        assert_eq!(view.return_summary, "No return available");
        assert!(view.booking_url.contains("roundtrip=false"));
    }

    #[test]
    fn round_trip_view_summarizes_best_return() {
        let rt = RoundTripItinerary::new(
            direct("STN", "BGY", 1, 6, 9, 29.99),
            vec![
                direct("BGY", "STN", 8, 10, 12, 25.0),
                direct("BGY", "STN", 8, 18, 20, 40.0),
            ],
        );
        let view = ItineraryView::from_outcome(&SearchOutcome::RoundTrip(rt));

        assert!(view.has_return);
        assert_eq!(view.return_summary, "Return 25.00 EUR (1 more option)");
        assert_eq!(view.return_legs.len(), 1);
        assert_eq!(view.total_price, "54.99 EUR");
        assert!(view.booking_url.contains("dateIn=2025-06-08"));
    }

    #[test]
    fn templates_render() {
        let results = vec![ItineraryView::from_outcome(&SearchOutcome::OneWay(direct(
            "STN", "BGY", 1, 6, 9, 29.99,
        )))];

        let html = ResultsTemplate { results }.render().unwrap();
        assert!(html.contains("STN → BGY"));
        assert!(html.contains("29.99 EUR"));

        assert!(IndexTemplate.render().is_ok());
        assert!(
            ErrorTemplate {
                message: "boom".to_string()
            }
            .render()
            .unwrap()
            .contains("boom")
        );
    }
}

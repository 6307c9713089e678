//! Price-based ranking for search results.
//!
//! Sorting is by total price ascending. Equal prices are ordered by total
//! duration, then by first-leg departure time, so repeated searches over
//! identical fare data produce identically-ordered output.

use std::cmp::Ordering;

use crate::domain::Itinerary;

use super::orchestrator::SearchOutcome;

/// Compare two itineraries: price, then duration, then departure time.
fn cmp_itineraries(a: &Itinerary, b: &Itinerary) -> Ordering {
    let price_cmp = a
        .total_price()
        .amount
        .total_cmp(&b.total_price().amount);
    if price_cmp != Ordering::Equal {
        return price_cmp;
    }

    let duration_cmp = a.duration_mins().cmp(&b.duration_mins());
    if duration_cmp != Ordering::Equal {
        return duration_cmp;
    }

    a.departure_time().cmp(&b.departure_time())
}

/// Sort itineraries cheapest-first with deterministic tie-breaks.
pub fn rank_itineraries(mut itineraries: Vec<Itinerary>) -> Vec<Itinerary> {
    itineraries.sort_by(cmp_itineraries);
    itineraries
}

/// Sort search outcomes cheapest-first by combined price, with the same
/// tie-breaks applied to the outbound itinerary.
pub fn rank_outcomes(mut outcomes: Vec<SearchOutcome>) -> Vec<SearchOutcome> {
    outcomes.sort_by(|a, b| {
        let price_cmp = a.total_price().amount.total_cmp(&b.total_price().amount);
        if price_cmp != Ordering::Equal {
            return price_cmp;
        }
        cmp_itineraries(a.outbound(), b.outbound())
    });
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AirportCode, FareLeg, Price, RoundTripItinerary};
    use chrono::{NaiveDate, NaiveDateTime};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn dt(h: u32, m: u32) -> NaiveDateTime {
        date().and_hms_opt(h, m, 0).unwrap()
    }

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn direct(dep: NaiveDateTime, arr: NaiveDateTime, amount: f64) -> Itinerary {
        let leg = FareLeg::new(dep, arr, "FR 1", Price::new(amount, "EUR")).unwrap();
        Itinerary::direct(code("AAA"), code("BBB"), leg, date())
    }

    #[test]
    fn sorts_by_price() {
        let ranked = rank_itineraries(vec![
            direct(dt(10, 0), dt(12, 0), 80.0),
            direct(dt(11, 0), dt(13, 0), 20.0),
            direct(dt(12, 0), dt(14, 0), 50.0),
        ]);

        let prices: Vec<f64> = ranked.iter().map(|i| i.total_price().amount).collect();
        assert_eq!(prices, vec![20.0, 50.0, 80.0]);
    }

    #[test]
    fn equal_price_breaks_on_duration() {
        let ranked = rank_itineraries(vec![
            direct(dt(10, 0), dt(14, 0), 50.0), // 4h
            direct(dt(10, 0), dt(12, 0), 50.0), // 2h
        ]);

        assert_eq!(ranked[0].duration_mins(), 120);
        assert_eq!(ranked[1].duration_mins(), 240);
    }

    #[test]
    fn equal_price_and_duration_breaks_on_departure() {
        let ranked = rank_itineraries(vec![
            direct(dt(15, 0), dt(17, 0), 50.0),
            direct(dt(9, 0), dt(11, 0), 50.0),
        ]);

        assert_eq!(ranked[0].departure_time(), dt(9, 0));
        assert_eq!(ranked[1].departure_time(), dt(15, 0));
    }

    #[test]
    fn outcomes_sorted_by_combined_price() {
        // Cheap outbound with an expensive return must rank after an
        // expensive outbound with no return.
        let with_return = SearchOutcome::RoundTrip(RoundTripItinerary::new(
            direct(dt(10, 0), dt(12, 0), 30.0),
            vec![direct(dt(18, 0), dt(20, 0), 60.0)],
        ));
        let without_return = SearchOutcome::RoundTrip(RoundTripItinerary::new(
            direct(dt(11, 0), dt(13, 0), 70.0),
            vec![],
        ));

        let ranked = rank_outcomes(vec![with_return, without_return]);

        assert_eq!(ranked[0].total_price().amount, 70.0);
        assert_eq!(ranked[1].total_price().amount, 90.0);
    }

    #[test]
    fn ranking_is_idempotent() {
        let items = vec![
            direct(dt(10, 0), dt(12, 0), 50.0),
            direct(dt(9, 0), dt(11, 0), 50.0),
            direct(dt(8, 0), dt(10, 0), 20.0),
        ];

        let once = rank_itineraries(items.clone());
        let twice = rank_itineraries(once.clone());
        assert_eq!(once, twice);
    }
}

//! Round-trip composition.
//!
//! Pairs an outbound itinerary with feasible return itineraries found by
//! running the pair finder in the reverse direction over the requested
//! return dates.

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{AirportCode, Itinerary, RoundTripItinerary};

use super::pair::{FareSource, PairRouteFinder};
use super::rank::rank_itineraries;

/// Composes round trips from outbound itineraries and a return-candidate
/// pool.
pub struct RoundTripComposer<'a, S: FareSource> {
    finder: PairRouteFinder<'a, S>,
}

impl<'a, S: FareSource> RoundTripComposer<'a, S> {
    /// Create a new composer backed by the given pair finder.
    pub fn new(finder: PairRouteFinder<'a, S>) -> Self {
        Self { finder }
    }

    /// Search every return date and pool the results.
    ///
    /// The pool is unfiltered: feasibility depends on the outbound option
    /// it is later paired with (see [`compose`](Self::compose)).
    pub async fn return_pool(
        &self,
        destination: AirportCode,
        origin: AirportCode,
        return_dates: &[NaiveDate],
    ) -> Vec<Itinerary> {
        let mut pool = Vec::new();
        for &return_date in return_dates {
            let mut found = self.finder.find(destination, origin, return_date).await;
            pool.append(&mut found);
        }
        debug!(
            destination = %destination,
            origin = %origin,
            dates = return_dates.len(),
            candidates = pool.len(),
            "pooled return candidates"
        );
        pool
    }

    /// Pair one outbound itinerary with its eligible returns.
    ///
    /// A return is eligible only if it departs strictly after the outbound
    /// arrives. Eligible returns are attached cheapest-first; the combined
    /// price uses the cheapest one. Zero eligible returns still produce a
    /// round-trip result (marked incomplete via an empty option list), not
    /// an error.
    pub fn compose(&self, outbound: Itinerary, pool: &[Itinerary]) -> RoundTripItinerary {
        let eligible: Vec<Itinerary> = pool
            .iter()
            .filter(|ret| ret.departure_time() > outbound.arrival_time())
            .cloned()
            .collect();

        let eligible = rank_itineraries(eligible);
        RoundTripItinerary::new(outbound, eligible)
    }
}

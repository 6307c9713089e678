//! Direct and one-stop route discovery for a single (origin, destination,
//! date) triple.
//!
//! Probes the provider for the cheapest direct fare, then synthesizes
//! layover itineraries through candidate hubs, probing hubs in bounded
//! batches to keep concurrent provider requests in check.

use std::collections::HashSet;

use chrono::NaiveDate;
use futures::future::join_all;
use tracing::{debug, warn};

use crate::domain::{AirportCode, FareLeg, Itinerary};

use super::config::SearchConfig;
use super::rank::rank_itineraries;

/// Error from fare search.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// A provider lookup failed
    #[error("fare provider request failed: {0}")]
    Fetch(String),

    /// Invalid search criteria
    #[error("invalid search criteria: {0}")]
    InvalidCriteria(String),
}

/// The search engine's view of the fare provider.
///
/// This abstraction allows the engine to be tested with stub fare data.
/// Implementations must never invent fares: "no fare for that day" is
/// `Ok(None)`, not an error.
#[allow(async_fn_in_trait)]
pub trait FareSource {
    /// Get the provider's cheapest one-way fare for a route on a date, if
    /// any is advertised.
    async fn one_way_fare(
        &self,
        origin: &AirportCode,
        destination: &AirportCode,
        date: NaiveDate,
    ) -> Result<Option<FareLeg>, SearchError>;

    /// Get the set of airports reachable nonstop from `airport`.
    async fn nonstop_destinations(
        &self,
        airport: &AirportCode,
    ) -> Result<Vec<AirportCode>, SearchError>;
}

/// Discovers priced itineraries for one origin/destination pair on one date.
pub struct PairRouteFinder<'a, S: FareSource> {
    source: &'a S,
    config: &'a SearchConfig,
}

impl<'a, S: FareSource> PairRouteFinder<'a, S> {
    /// Create a new finder.
    pub fn new(source: &'a S, config: &'a SearchConfig) -> Self {
        Self { source, config }
    }

    /// Find the cheapest direct fare and all feasible one-stop layovers,
    /// sorted cheapest-first.
    ///
    /// Best-effort: any single provider failure is logged and degrades to
    /// "that option unavailable". A partial layover (only one leg priced)
    /// is never emitted.
    pub async fn find(
        &self,
        origin: AirportCode,
        destination: AirportCode,
        date: NaiveDate,
    ) -> Vec<Itinerary> {
        let mut results = Vec::new();

        match self.source.one_way_fare(&origin, &destination, date).await {
            Ok(Some(leg)) => results.push(Itinerary::direct(origin, destination, leg, date)),
            Ok(None) => {}
            Err(e) => warn!(
                origin = %origin,
                destination = %destination,
                date = %date,
                error = %e,
                "direct fare lookup failed"
            ),
        }

        let hubs = self.candidate_hubs(origin, destination).await;
        debug!(
            origin = %origin,
            destination = %destination,
            hubs = hubs.len(),
            "probing candidate hubs"
        );

        // Probe hubs in fixed-size batches: each batch fully resolves before
        // the next begins; within a batch, both legs of a hub are fetched
        // concurrently.
        for batch in hubs.chunks(self.config.hub_batch_size) {
            let futures: Vec<_> = batch
                .iter()
                .map(|hub| async move {
                    let (first, second) = tokio::join!(
                        self.source.one_way_fare(&origin, hub, date),
                        self.source.one_way_fare(hub, &destination, date),
                    );
                    (*hub, first, second)
                })
                .collect();

            for (hub, first, second) in join_all(futures).await {
                let first = leg_or_absent(first, origin, hub);
                let second = leg_or_absent(second, hub, destination);

                let (Some(first), Some(second)) = (first, second) else {
                    continue;
                };

                let wait_mins = second
                    .departure()
                    .signed_duration_since(first.arrival())
                    .num_minutes();

                if wait_mins < self.config.min_connection_mins
                    || wait_mins > self.config.max_connection_mins
                {
                    debug!(
                        hub = %hub,
                        wait_mins,
                        "connection outside feasible window"
                    );
                    continue;
                }

                match Itinerary::layover(origin, destination, hub, first, second, date) {
                    Ok(itinerary) => results.push(itinerary),
                    Err(e) => warn!(hub = %hub, error = %e, "rejected layover combination"),
                }
            }
        }

        rank_itineraries(results)
    }

    /// Compute the candidate hub set: airports advertised as nonstop
    /// destinations of both endpoints, minus the endpoints themselves.
    ///
    /// The provider only lists routes origin → destinations, so hub →
    /// destination service is inferred from the destination's own listing
    /// (assumed route symmetry). A false-positive hub costs one fare probe
    /// that returns no fare. Route-listing failures degrade to an empty
    /// hub set.
    ///
    /// The result is sorted so probing order and output are deterministic.
    async fn candidate_hubs(
        &self,
        origin: AirportCode,
        destination: AirportCode,
    ) -> Vec<AirportCode> {
        let (from_origin, from_destination) = tokio::join!(
            self.source.nonstop_destinations(&origin),
            self.source.nonstop_destinations(&destination),
        );

        let from_origin = from_origin.unwrap_or_else(|e| {
            warn!(airport = %origin, error = %e, "route listing failed");
            Vec::new()
        });
        let from_destination = from_destination.unwrap_or_else(|e| {
            warn!(airport = %destination, error = %e, "route listing failed");
            Vec::new()
        });

        let reachable_from_destination: HashSet<AirportCode> =
            from_destination.into_iter().collect();

        let mut hubs: Vec<AirportCode> = from_origin
            .into_iter()
            .filter(|hub| reachable_from_destination.contains(hub))
            .filter(|hub| *hub != origin && *hub != destination)
            .collect();
        hubs.sort();
        hubs.dedup();
        hubs
    }
}

/// Unwrap a fare lookup, logging failures as "option unavailable".
fn leg_or_absent(
    result: Result<Option<FareLeg>, SearchError>,
    from: AirportCode,
    to: AirportCode,
) -> Option<FareLeg> {
    match result {
        Ok(leg) => leg,
        Err(e) => {
            warn!(origin = %from, destination = %to, error = %e, "fare lookup failed");
            None
        }
    }
}

//! Top-level search orchestration.
//!
//! Expands multi-airport and flexible-date criteria into the full cross
//! product of (date, origin, destination) combinations, runs the pair
//! finder for each with a bounded amount of parallelism, wires in
//! round-trip composition when a return date is requested, and ranks the
//! flattened result set.

use chrono::NaiveDate;
use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::{AirportCode, Itinerary, Price, RoundTripItinerary};

use super::config::SearchConfig;
use super::dates::DateWindow;
use super::pair::{FareSource, PairRouteFinder, SearchError};
use super::rank::rank_outcomes;
use super::round_trip::RoundTripComposer;

/// What to search for.
#[derive(Debug, Clone)]
pub struct SearchCriteria {
    /// Origin airports; each is searched independently.
    pub origins: Vec<AirportCode>,

    /// Destination airports; each is searched independently.
    pub destinations: Vec<AirportCode>,

    /// Outbound departure date.
    pub departure_date: NaiveDate,

    /// Return date; absence means a one-way search.
    pub return_date: Option<NaiveDate>,

    /// Flexible-date window around the departure date.
    pub departure_window: Option<DateWindow>,

    /// Flexible-date window around the return date.
    pub return_window: Option<DateWindow>,
}

impl SearchCriteria {
    /// Create one-way criteria with no date flexibility.
    pub fn new(
        origins: Vec<AirportCode>,
        destinations: Vec<AirportCode>,
        departure_date: NaiveDate,
    ) -> Self {
        Self {
            origins,
            destinations,
            departure_date,
            return_date: None,
            departure_window: None,
            return_window: None,
        }
    }

    /// Request a round trip returning on `date`.
    pub fn with_return_date(mut self, date: NaiveDate) -> Self {
        self.return_date = Some(date);
        self
    }

    /// Add a flexible-date window around the departure date.
    pub fn with_departure_window(mut self, window: DateWindow) -> Self {
        self.departure_window = Some(window);
        self
    }

    /// Add a flexible-date window around the return date.
    pub fn with_return_window(mut self, window: DateWindow) -> Self {
        self.return_window = Some(window);
        self
    }

    /// Validate the criteria.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.origins.is_empty() {
            return Err(SearchError::InvalidCriteria(
                "at least one origin airport is required".to_string(),
            ));
        }

        if self.destinations.is_empty() {
            return Err(SearchError::InvalidCriteria(
                "at least one destination airport is required".to_string(),
            ));
        }

        if self.return_window.is_some() && self.return_date.is_none() {
            return Err(SearchError::InvalidCriteria(
                "a return date window requires a return date".to_string(),
            ));
        }

        Ok(())
    }
}

/// One ranked search result: a one-way itinerary, or an outbound paired
/// with its return options.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    OneWay(Itinerary),
    RoundTrip(RoundTripItinerary),
}

impl SearchOutcome {
    /// Returns the price used for ranking: the itinerary total, or the
    /// combined round-trip total.
    pub fn total_price(&self) -> Price {
        match self {
            SearchOutcome::OneWay(itinerary) => itinerary.total_price(),
            SearchOutcome::RoundTrip(rt) => rt.total_price(),
        }
    }

    /// Returns the outbound itinerary.
    pub fn outbound(&self) -> &Itinerary {
        match self {
            SearchOutcome::OneWay(itinerary) => itinerary,
            SearchOutcome::RoundTrip(rt) => rt.outbound(),
        }
    }
}

/// The single public entry point of the search engine.
pub struct SearchOrchestrator<'a, S: FareSource> {
    source: &'a S,
    config: &'a SearchConfig,
}

impl<'a, S: FareSource> SearchOrchestrator<'a, S> {
    /// Create a new orchestrator.
    pub fn new(source: &'a S, config: &'a SearchConfig) -> Self {
        Self { source, config }
    }

    /// Run the full search: expand criteria, fan out, flatten, rank.
    ///
    /// An empty result list is a valid outcome meaning "no itinerary found
    /// under the given criteria". Provider failures inside a combination
    /// never affect any other combination.
    pub async fn search(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<SearchOutcome>, SearchError> {
        criteria.validate()?;

        let departure_dates = match &criteria.departure_window {
            Some(window) => window.expand(criteria.departure_date),
            None => vec![criteria.departure_date],
        };

        let return_dates: Option<Vec<NaiveDate>> =
            criteria.return_date.map(|date| match &criteria.return_window {
                Some(window) => window.expand(date),
                None => vec![date],
            });

        debug!(
            origins = criteria.origins.len(),
            destinations = criteria.destinations.len(),
            departure_dates = departure_dates.len(),
            return_dates = return_dates.as_ref().map(Vec::len).unwrap_or(0),
            "expanded search criteria"
        );

        // One bound for the whole fan-out: combinations queue on the
        // semaphore while earlier ones run; hub probing inside the pair
        // finder keeps its own batch bound.
        let semaphore = Semaphore::new(self.config.max_concurrent_searches);

        let mut combinations = Vec::new();
        for &search_date in &departure_dates {
            for &origin in &criteria.origins {
                for &destination in &criteria.destinations {
                    let semaphore = &semaphore;
                    let return_dates = return_dates.as_deref();
                    combinations.push(async move {
                        let Ok(_permit) = semaphore.acquire().await else {
                            return Vec::new();
                        };
                        self.search_combination(origin, destination, search_date, return_dates)
                            .await
                    });
                }
            }
        }

        let flat: Vec<SearchOutcome> =
            join_all(combinations).await.into_iter().flatten().collect();

        Ok(rank_outcomes(flat))
    }

    /// Search one (origin, destination, date) combination, including its
    /// return wiring when the search is a round trip.
    async fn search_combination(
        &self,
        origin: AirportCode,
        destination: AirportCode,
        search_date: NaiveDate,
        return_dates: Option<&[NaiveDate]>,
    ) -> Vec<SearchOutcome> {
        let finder = PairRouteFinder::new(self.source, self.config);
        let outbound = finder.find(origin, destination, search_date).await;
        debug!(
            origin = %origin,
            destination = %destination,
            date = %search_date,
            outbound = outbound.len(),
            "combination searched"
        );

        match return_dates {
            None => outbound.into_iter().map(SearchOutcome::OneWay).collect(),
            Some(dates) => {
                let composer =
                    RoundTripComposer::new(PairRouteFinder::new(self.source, self.config));
                let pool = composer.return_pool(destination, origin, dates).await;
                outbound
                    .into_iter()
                    .map(|itinerary| SearchOutcome::RoundTrip(composer.compose(itinerary, &pool)))
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::dates::DateDirection;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn criteria_builders() {
        let criteria = SearchCriteria::new(vec![code("AAA")], vec![code("BBB")], date())
            .with_return_date(NaiveDate::from_ymd_opt(2025, 6, 8).unwrap())
            .with_departure_window(DateWindow::new(2, DateDirection::Both))
            .with_return_window(DateWindow::new(1, DateDirection::After));

        assert!(criteria.validate().is_ok());
        assert_eq!(criteria.departure_window.unwrap().days, 2);
        assert_eq!(criteria.return_window.unwrap().days, 1);
    }

    #[test]
    fn criteria_requires_origins() {
        let criteria = SearchCriteria::new(vec![], vec![code("BBB")], date());
        assert!(matches!(
            criteria.validate(),
            Err(SearchError::InvalidCriteria(_))
        ));
    }

    #[test]
    fn criteria_requires_destinations() {
        let criteria = SearchCriteria::new(vec![code("AAA")], vec![], date());
        assert!(matches!(
            criteria.validate(),
            Err(SearchError::InvalidCriteria(_))
        ));
    }

    #[test]
    fn return_window_without_return_date_rejected() {
        let criteria = SearchCriteria::new(vec![code("AAA")], vec![code("BBB")], date())
            .with_return_window(DateWindow::new(2, DateDirection::Both));
        assert!(matches!(
            criteria.validate(),
            Err(SearchError::InvalidCriteria(_))
        ));
    }
}

//! Fare search engine.
//!
//! This module implements the itinerary discovery and combination engine:
//! date-window expansion, multi-airport fan-out, direct/layover route
//! synthesis with bounded-concurrency hub probing, round-trip pairing,
//! and price-based ranking.

mod config;
mod dates;
mod orchestrator;
mod pair;
mod rank;
mod round_trip;


pub use config::SearchConfig;
pub use dates::{DateDirection, DateWindow};
pub use orchestrator::{SearchCriteria, SearchOrchestrator, SearchOutcome};
pub use pair::{FareSource, PairRouteFinder, SearchError};
pub use rank::rank_itineraries;
pub use round_trip::RoundTripComposer;

//! Domain types for the fare search engine.
//!
//! This module contains the core domain model types that represent
//! validated fare data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod airport;
mod error;
mod itinerary;
mod leg;
mod money;

pub use airport::{AirportCode, InvalidAirportCode};
pub use error::DomainError;
pub use itinerary::{Itinerary, ItineraryKind, RoundTripItinerary};
pub use leg::FareLeg;
pub use money::Price;

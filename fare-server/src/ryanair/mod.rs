//! Ryanair fare-finder client.
//!
//! This module provides an HTTP client for Ryanair's public fare-finder
//! and route-listing endpoints.
//!
//! Key characteristics of the API:
//! - `oneWayFares` returns **at most one** fare per (route, day): the
//!   provider's cheapest. An empty `fares` array means "no fare that day".
//! - Route listings are origin → destinations only; directed reachability
//!   from an arbitrary hub is not exposed.
//! - Timestamps are airport-local ISO 8601 without UTC offsets.
//! - Requests need a browser-style `User-Agent` header.

mod client;
mod error;
mod mock;
mod types;

pub use client::{RyanairClient, RyanairConfig};
pub use error::RyanairError;
pub use mock::MockFareClient;
pub use types::{FareEntry, OneWayFaresResponse, OutboundFare, PriceDto, RouteAirport, RouteEntry};

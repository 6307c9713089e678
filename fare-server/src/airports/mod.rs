//! Airport directory.
//!
//! Provides the static list of served airports (code, name, country, city),
//! fetched at startup and refreshed daily. Used only for UI lookups; the
//! search algorithm never consults it.

mod client;
mod directory;
mod error;

pub use client::{AirportClient, AirportClientConfig, AirportDto, RegionDto};
pub use directory::{Airport, AirportDirectory};
pub use error::AirportError;

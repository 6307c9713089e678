//! Web layer for the fare search server.
//!
//! Provides HTTP endpoints for airport lookups and fare searches.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;

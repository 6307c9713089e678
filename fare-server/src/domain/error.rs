//! Domain error types.
//!
//! These errors represent validation failures and data inconsistencies
//! in the domain layer. They are distinct from API/IO errors.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Invalid leg construction (e.g., arrival not after departure)
    #[error("invalid leg: {0}")]
    InvalidLeg(&'static str),

    /// Consecutive legs are not in chronological order
    #[error("legs out of order: connecting leg departs at {departs} before the first leg arrives at {arrives}")]
    LegsOutOfOrder {
        arrives: chrono::NaiveDateTime,
        departs: chrono::NaiveDateTime,
    },

    /// Legs of one itinerary are priced in different currencies
    #[error("currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch { expected: String, found: String },
}

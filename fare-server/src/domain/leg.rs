//! Fare leg type.
//!
//! A `FareLeg` is one scheduled flight segment as priced by the provider.
//! Times are validated at construction so `duration_mins()` is always
//! non-negative and accessors never fail.

use chrono::NaiveDateTime;

use super::{DomainError, Price};

/// One scheduled flight segment with its cheapest one-way fare.
///
/// Timestamps are airport-local (the provider reports no UTC offsets).
/// Immutable once constructed.
///
/// # Invariants
///
/// - `arrival` is strictly after `departure`
#[derive(Debug, Clone, PartialEq)]
pub struct FareLeg {
    departure: NaiveDateTime,
    arrival: NaiveDateTime,
    flight_number: String,
    price: Price,
}

impl FareLeg {
    /// Construct a leg, validating that the arrival follows the departure.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `arrival <= departure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fare_server::domain::{FareLeg, Price};
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    /// let leg = FareLeg::new(
    ///     date.and_hms_opt(6, 25, 0).unwrap(),
    ///     date.and_hms_opt(9, 40, 0).unwrap(),
    ///     "FR 1885",
    ///     Price::new(29.99, "EUR"),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(leg.duration_mins(), 195);
    /// ```
    pub fn new(
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
        flight_number: impl Into<String>,
        price: Price,
    ) -> Result<Self, DomainError> {
        if arrival <= departure {
            return Err(DomainError::InvalidLeg(
                "arrival must be after departure",
            ));
        }

        Ok(FareLeg {
            departure,
            arrival,
            flight_number: flight_number.into(),
            price,
        })
    }

    /// Returns the scheduled departure timestamp.
    pub fn departure(&self) -> NaiveDateTime {
        self.departure
    }

    /// Returns the scheduled arrival timestamp.
    pub fn arrival(&self) -> NaiveDateTime {
        self.arrival
    }

    /// Returns the flight number.
    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    /// Returns the fare price for this leg.
    pub fn price(&self) -> &Price {
        &self.price
    }

    /// Returns the flight duration in minutes (always positive).
    pub fn duration_mins(&self) -> i64 {
        self.arrival
            .signed_duration_since(self.departure)
            .num_minutes()
    }
}

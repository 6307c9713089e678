//! Price type.

use std::fmt;

/// A fare price as reported by the provider: an amount and a currency code.
///
/// Prices are never converted between currencies; an itinerary's total is
/// only ever a sum of same-currency leg prices (enforced by
/// [`Itinerary::layover`](super::Itinerary::layover)).
#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    /// Fare amount in the provider's reported currency.
    pub amount: f64,

    /// ISO 4217 currency code as reported by the provider (e.g. "EUR").
    pub currency: String,
}

impl Price {
    /// Create a new price.
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency)
    }
}

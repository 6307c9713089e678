//! Itinerary types.
//!
//! An `Itinerary` is one priced way to travel origin → destination on a
//! search date: either a single direct leg or two legs connecting through
//! a hub. A `RoundTripItinerary` pairs an outbound itinerary with its
//! feasible return options.

use chrono::{NaiveDate, NaiveDateTime};

use super::{AirportCode, DomainError, FareLeg, Price};

/// Whether an itinerary is a nonstop flight or a one-stop connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItineraryKind {
    /// A single nonstop leg.
    Direct,
    /// Two legs connecting through a hub airport.
    Layover,
}

impl ItineraryKind {
    /// Returns the lowercase label used in API responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItineraryKind::Direct => "direct",
            ItineraryKind::Layover => "layover",
        }
    }
}

/// One priced way to travel origin → destination on a specific search date.
///
/// # Invariants
///
/// - A direct itinerary has exactly one leg and no hub.
/// - A layover itinerary has exactly two legs and a hub; the second leg
///   departs strictly after the first arrives.
/// - All legs are priced in the same currency.
/// - The total price is the arithmetic sum of the leg prices; it is never
///   fetched independently.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    kind: ItineraryKind,
    origin: AirportCode,
    destination: AirportCode,
    via: Option<AirportCode>,
    legs: Vec<FareLeg>,
    search_date: NaiveDate,
}

impl Itinerary {
    /// Construct a direct itinerary from a single leg.
    pub fn direct(
        origin: AirportCode,
        destination: AirportCode,
        leg: FareLeg,
        search_date: NaiveDate,
    ) -> Self {
        Itinerary {
            kind: ItineraryKind::Direct,
            origin,
            destination,
            via: None,
            legs: vec![leg],
            search_date,
        }
    }

    /// Construct a layover itinerary from two legs connecting at `via`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - the second leg does not depart strictly after the first arrives
    /// - the legs are priced in different currencies
    ///
    /// Connection-time policy (minimum and maximum wait) is the search
    /// layer's concern; this constructor only enforces chronology.
    pub fn layover(
        origin: AirportCode,
        destination: AirportCode,
        via: AirportCode,
        first: FareLeg,
        second: FareLeg,
        search_date: NaiveDate,
    ) -> Result<Self, DomainError> {
        if second.departure() <= first.arrival() {
            return Err(DomainError::LegsOutOfOrder {
                arrives: first.arrival(),
                departs: second.departure(),
            });
        }

        if first.price().currency != second.price().currency {
            return Err(DomainError::CurrencyMismatch {
                expected: first.price().currency.clone(),
                found: second.price().currency.clone(),
            });
        }

        Ok(Itinerary {
            kind: ItineraryKind::Layover,
            origin,
            destination,
            via: Some(via),
            legs: vec![first, second],
            search_date,
        })
    }

    /// Returns the itinerary kind.
    pub fn kind(&self) -> ItineraryKind {
        self.kind
    }

    /// Returns the origin airport.
    pub fn origin(&self) -> AirportCode {
        self.origin
    }

    /// Returns the destination airport.
    pub fn destination(&self) -> AirportCode {
        self.destination
    }

    /// Returns the hub airport (present only for layovers).
    pub fn via(&self) -> Option<AirportCode> {
        self.via
    }

    /// Returns the legs in travel order.
    pub fn legs(&self) -> &[FareLeg] {
        &self.legs
    }

    /// Returns the search date that produced this itinerary.
    pub fn search_date(&self) -> NaiveDate {
        self.search_date
    }

    /// Returns the departure timestamp of the first leg.
    pub fn departure_time(&self) -> NaiveDateTime {
        // Non-empty by construction
        self.legs[0].departure()
    }

    /// Returns the arrival timestamp of the last leg.
    pub fn arrival_time(&self) -> NaiveDateTime {
        self.legs[self.legs.len() - 1].arrival()
    }

    /// Returns the total price: the sum of leg amounts, labeled with the
    /// first leg's currency (all legs share it by construction).
    pub fn total_price(&self) -> Price {
        let amount = self.legs.iter().map(|l| l.price().amount).sum();
        Price::new(amount, self.legs[0].price().currency.clone())
    }

    /// Returns the total duration in minutes: first departure → last arrival,
    /// including any wait at the hub.
    pub fn duration_mins(&self) -> i64 {
        self.arrival_time()
            .signed_duration_since(self.departure_time())
            .num_minutes()
    }

    /// Returns the wait at the hub in minutes, or `None` for direct
    /// itineraries.
    pub fn connection_mins(&self) -> Option<i64> {
        match self.legs.as_slice() {
            [first, second] => Some(
                second
                    .departure()
                    .signed_duration_since(first.arrival())
                    .num_minutes(),
            ),
            _ => None,
        }
    }
}

/// An outbound itinerary paired with its feasible return options.
///
/// Composition only attaches data to the outbound: the outbound itinerary
/// itself is stored unmodified. `return_options` holds every feasible
/// return, cheapest first, so callers can present alternates. An empty list
/// is a valid "no return available" result, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTripItinerary {
    outbound: Itinerary,
    return_options: Vec<Itinerary>,
}

impl RoundTripItinerary {
    /// Pair an outbound itinerary with its eligible returns.
    ///
    /// `return_options` must already be filtered for feasibility and sorted
    /// cheapest-first (see `search::RoundTripComposer`).
    pub fn new(outbound: Itinerary, return_options: Vec<Itinerary>) -> Self {
        Self {
            outbound,
            return_options,
        }
    }

    /// Returns the outbound itinerary.
    pub fn outbound(&self) -> &Itinerary {
        &self.outbound
    }

    /// Returns the feasible return options, cheapest first.
    pub fn return_options(&self) -> &[Itinerary] {
        &self.return_options
    }

    /// Returns true if at least one feasible return was found.
    pub fn has_return(&self) -> bool {
        !self.return_options.is_empty()
    }

    /// Returns the combined price: outbound total plus the cheapest return's
    /// total, or the outbound-only total when no return is available.
    pub fn total_price(&self) -> Price {
        let outbound = self.outbound.total_price();
        match self.return_options.first() {
            Some(ret) => Price::new(outbound.amount + ret.total_price().amount, outbound.currency),
            None => outbound,
        }
    }
}

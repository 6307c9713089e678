//! Airport code types.

use std::fmt;

/// Error returned when parsing an invalid IATA airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirportCode {
    reason: &'static str,
}

/// A valid 3-letter IATA airport code.
///
/// IATA codes are always 3 uppercase ASCII letters. This type guarantees
/// that any `AirportCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use fare_server::domain::AirportCode;
///
/// let stn = AirportCode::parse("STN").unwrap();
/// assert_eq!(stn.as_str(), "STN");
///
/// // Lowercase is rejected by the strict parser
/// assert!(AirportCode::parse("stn").is_err());
///
/// // Wrong length is rejected
/// assert!(AirportCode::parse("ST").is_err());
/// assert!(AirportCode::parse("STNN").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AirportCode([u8; 3]);

impl AirportCode {
    /// Parse an airport code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidAirportCode {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidAirportCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(AirportCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Parse an airport code from user input, trimming whitespace and
    /// accepting lowercase letters.
    ///
    /// ```
    /// use fare_server::domain::AirportCode;
    ///
    /// let code = AirportCode::parse_normalized(" bgy ").unwrap();
    /// assert_eq!(code.as_str(), "BGY");
    /// ```
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidAirportCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the airport code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating valid airport codes: 3 uppercase ASCII letters
    fn valid_code_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Z]{3}")
            .unwrap()
            .prop_filter("must be 3 chars", |s| s.len() == 3)
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in valid_code_string()) {
            let code = AirportCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Any valid code can be parsed
        #[test]
        fn valid_always_parses(s in valid_code_string()) {
            prop_assert!(AirportCode::parse(&s).is_ok());
        }

        /// parse_normalized agrees with parse on already-normal input
        #[test]
        fn normalized_agrees_with_strict(s in valid_code_string()) {
            prop_assert_eq!(
                AirportCode::parse(&s).unwrap(),
                AirportCode::parse_normalized(&s).unwrap()
            );
        }

        /// Lowercase input parses to the uppercase code
        #[test]
        fn normalized_uppercases(s in "[a-z]{3}") {
            let code = AirportCode::parse_normalized(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.to_ascii_uppercase().as_str());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,2}|[A-Z]{4,10}") {
            prop_assert!(AirportCode::parse(&s).is_err());
        }

        /// Strings with digits are rejected
        #[test]
        fn digits_rejected(s in "[A-Z0-9]{3}".prop_filter("has digit", |s| s.chars().any(|c| c.is_ascii_digit()))) {
            prop_assert!(AirportCode::parse(&s).is_err());
        }
    }
}

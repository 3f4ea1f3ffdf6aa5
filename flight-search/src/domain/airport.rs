//! Airport types.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirportCode {
    reason: &'static str,
}

/// A valid 3-letter IATA airport code.
///
/// Airport codes are always 3 uppercase ASCII letters. This type guarantees
/// that any `AirportCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use flight_search::domain::AirportCode;
///
/// let jfk = AirportCode::parse("JFK").unwrap();
/// assert_eq!(jfk.as_str(), "JFK");
///
/// // Lowercase is rejected
/// assert!(AirportCode::parse("jfk").is_err());
///
/// // Wrong length is rejected
/// assert!(AirportCode::parse("JF").is_err());
/// assert!(AirportCode::parse("JFKX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
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

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl FromStr for AirportCode {
    type Err = InvalidAirportCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
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

/// Static description of an airport: a node in the flight network.
///
/// Identity is the `code`; the remaining fields are metadata carried through
/// to results. Build with [`Airport::new`] and the `with_*` setters.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    /// IATA code, unique within a network.
    pub code: AirportCode,
    /// Full airport name.
    pub name: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// IANA timezone name (e.g. "America/Toronto").
    pub timezone: String,
    /// Longest runway length in metres.
    pub runway_length: u32,
    /// City served.
    pub city: String,
    /// Country the airport is in.
    pub country: String,
}

impl Airport {
    /// Create an airport with a location; other metadata starts empty.
    pub fn new(code: AirportCode, name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            code,
            name: name.into(),
            latitude,
            longitude,
            timezone: String::new(),
            runway_length: 0,
            city: String::new(),
            country: String::new(),
        }
    }

    /// Set the timezone.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Set the longest runway length in metres.
    pub fn with_runway_length(mut self, runway_length: u32) -> Self {
        self.runway_length = runway_length;
        self
    }

    /// Set the city and country.
    pub fn with_city(mut self, city: impl Into<String>, country: impl Into<String>) -> Self {
        self.city = city.into();
        self.country = country.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_code() {
        assert!(AirportCode::parse("JFK").is_ok());
        assert!(AirportCode::parse("LHR").is_ok());
        assert!(AirportCode::parse("YYZ").is_ok());
        assert!(AirportCode::parse("AAA").is_ok());
        assert!(AirportCode::parse("ZZZ").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(AirportCode::parse("jfk").is_err());
        assert!(AirportCode::parse("Jfk").is_err());
        assert!(AirportCode::parse("JFk").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(AirportCode::parse("").is_err());
        assert!(AirportCode::parse("J").is_err());
        assert!(AirportCode::parse("JF").is_err());
        assert!(AirportCode::parse("JFKX").is_err());
        assert!(AirportCode::parse("KENNEDY").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(AirportCode::parse("J1K").is_err());
        assert!(AirportCode::parse("J-K").is_err());
        assert!(AirportCode::parse("J K").is_err());
        assert!(AirportCode::parse("JÖK").is_err());
    }

    #[test]
    fn from_str_matches_parse() {
        let code: AirportCode = "LAX".parse().unwrap();
        assert_eq!(code, AirportCode::parse("LAX").unwrap());
        assert!("lax".parse::<AirportCode>().is_err());
    }

    #[test]
    fn display_and_debug() {
        let code = AirportCode::parse("YYZ").unwrap();
        assert_eq!(format!("{}", code), "YYZ");
        assert_eq!(format!("{:?}", code), "AirportCode(YYZ)");
    }

    #[test]
    fn ordering_is_alphabetical() {
        let mut codes = vec![
            AirportCode::parse("LAX").unwrap(),
            AirportCode::parse("ATL").unwrap(),
            AirportCode::parse("JFK").unwrap(),
        ];
        codes.sort();
        let sorted: Vec<_> = codes.iter().map(|c| c.as_str()).collect();
        assert_eq!(sorted, vec!["ATL", "JFK", "LAX"]);
    }

    #[test]
    fn airport_builder_sets_metadata() {
        let yyz = Airport::new(
            AirportCode::parse("YYZ").unwrap(),
            "Toronto Pearson",
            43.67,
            -79.63,
        )
        .with_timezone("America/Toronto")
        .with_runway_length(3389)
        .with_city("Toronto", "Canada");

        assert_eq!(yyz.code.as_str(), "YYZ");
        assert_eq!(yyz.name, "Toronto Pearson");
        assert_eq!(yyz.timezone, "America/Toronto");
        assert_eq!(yyz.runway_length, 3389);
        assert_eq!(yyz.city, "Toronto");
        assert_eq!(yyz.country, "Canada");
    }
}

//! Travel dates and running days.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};

use super::error::DomainError;

/// Format the booking service uses for `date_of_journey`.
const WIRE_FORMAT: &str = "%d-%b-%Y";

/// A date of journey, written `DD-Mon-YYYY` on the wire.
///
/// # Examples
///
/// ```
/// use fare_matrix::domain::TravelDate;
/// use chrono::Weekday;
///
/// let date = TravelDate::parse("19-Nov-2024").unwrap();
/// assert_eq!(date.weekday(), Weekday::Tue);
/// assert_eq!(date.to_string(), "19-Nov-2024");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TravelDate(NaiveDate);

impl TravelDate {
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        NaiveDate::parse_from_str(s.trim(), WIRE_FORMAT)
            .map(TravelDate)
            .map_err(|_| DomainError::InvalidDate(s.to_string()))
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// The date as the booking service expects it.
    pub fn to_wire(&self) -> String {
        self.0.format(WIRE_FORMAT).to_string()
    }
}

impl FromStr for TravelDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TravelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

/// Parse a weekday abbreviation from a schedule document (`Mon`, `Tue`, ...).
pub fn parse_weekday(s: &str) -> Result<Weekday, DomainError> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| DomainError::InvalidWeekday(s.to_string()))
}

/// Three-letter abbreviation, matching the schedule documents.
pub fn weekday_abbrev(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

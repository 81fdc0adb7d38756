//! Train identifier type.

use std::fmt;
use std::str::FromStr;

use super::error::DomainError;

/// A train identifier as used by the booking service (e.g. `707`).
///
/// Guaranteed non-empty and made of ASCII letters and digits.
///
/// # Examples
///
/// ```
/// use fare_matrix::domain::TrainModel;
///
/// let model = TrainModel::parse("707").unwrap();
/// assert_eq!(model.as_str(), "707");
///
/// assert!(TrainModel::parse("").is_err());
/// assert!(TrainModel::parse("70 7").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrainModel(String);

impl TrainModel {
    /// Parse a train identifier. Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let trimmed = s.trim();

        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(DomainError::InvalidTrainModel(s.to_string()));
        }

        Ok(TrainModel(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compare against an identifier taken from a response body.
    pub fn matches(&self, raw: &str) -> bool {
        self.0 == raw.trim()
    }
}

impl FromStr for TrainModel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for TrainModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrainModel({})", self.0)
    }
}

impl fmt::Display for TrainModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any alphanumeric identifier parses and round-trips
        #[test]
        fn roundtrip(s in "[A-Za-z0-9]{1,8}") {
            let model = TrainModel::parse(&s).unwrap();
            prop_assert_eq!(model.as_str(), s.as_str());
            prop_assert!(model.matches(&s));
        }

        /// Identifiers containing punctuation are rejected
        #[test]
        fn punctuation_rejected(s in "[0-9]{1,3}[-_/.][0-9]{1,3}") {
            prop_assert!(TrainModel::parse(&s).is_err());
        }
    }
}

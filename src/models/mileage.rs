//! Mileage record model
//!
//! Splits the miles driven in a company car between business and personal use.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Purpose of a trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    Business,
    Personal,
}

impl TripType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Personal => "personal",
        }
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for anything other than "business" or "personal"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTripType(pub String);

impl fmt::Display for UnknownTripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trip type must be 'business' or 'personal'.")
    }
}

impl std::error::Error for UnknownTripType {}

impl FromStr for TripType {
    type Err = UnknownTripType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "business" => Ok(Self::Business),
            "personal" => Ok(Self::Personal),
            other => Err(UnknownTripType(other.to_string())),
        }
    }
}

/// Error returned when a record already holds a negative or non-finite total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMileageRecord;

impl fmt::Display for InvalidMileageRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mileage totals must be non-negative numbers.")
    }
}

impl std::error::Error for InvalidMileageRecord {}

/// Accumulated miles by trip type
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MileageRecord {
    #[serde(default)]
    pub business_miles: f64,
    #[serde(default)]
    pub personal_miles: f64,
}

impl MileageRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that both totals are finite and non-negative
    pub fn validate(&self) -> Result<(), InvalidMileageRecord> {
        let totals = [self.business_miles, self.personal_miles];
        if totals.iter().any(|m| !m.is_finite() || *m < 0.0) {
            return Err(InvalidMileageRecord);
        }
        Ok(())
    }

    /// Combined business and personal miles
    pub fn total_miles(&self) -> f64 {
        self.business_miles + self.personal_miles
    }

    pub(crate) fn accumulator_mut(&mut self, trip_type: TripType) -> &mut f64 {
        match trip_type {
            TripType::Business => &mut self.business_miles,
            TripType::Personal => &mut self.personal_miles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trip_type() {
        assert_eq!("business".parse::<TripType>(), Ok(TripType::Business));
        assert_eq!("personal".parse::<TripType>(), Ok(TripType::Personal));
        assert!("party".parse::<TripType>().is_err());
        assert!("Business".parse::<TripType>().is_err());
    }

    #[test]
    fn test_total_miles() {
        let record = MileageRecord {
            business_miles: 15.5,
            personal_miles: 7.5,
        };
        assert_eq!(record.total_miles(), 23.0);
    }

    #[test]
    fn test_validate() {
        assert!(MileageRecord::new().validate().is_ok());

        let negative = MileageRecord {
            business_miles: -10.0,
            personal_miles: 0.0,
        };
        assert_eq!(negative.validate(), Err(InvalidMileageRecord));

        let infinite = MileageRecord {
            business_miles: 0.0,
            personal_miles: f64::INFINITY,
        };
        assert!(infinite.validate().is_err());
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let record: MileageRecord = serde_json::from_str(r#"{"business_miles": 12}"#).unwrap();
        assert_eq!(record.business_miles, 12.0);
        assert_eq!(record.personal_miles, 0.0);
    }
}

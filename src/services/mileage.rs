//! Mileage tracking service

use tracing::{debug, warn};

use crate::error::{HomefinError, HomefinResult};
use crate::models::{MileageRecord, TripType};

/// Add the miles of one trip to the business or personal total
///
/// # Errors
///
/// Returns [`HomefinError::InvalidArgument`] if `miles` is negative or
/// `trip_type` is not `"business"` or `"personal"`, or if the record already
/// holds a negative or non-finite total. The record is left untouched.
pub fn update_mileage(
    mileage_record: &mut MileageRecord,
    miles: f64,
    trip_type: &str,
) -> HomefinResult<()> {
    if miles < 0.0 || !miles.is_finite() {
        warn!(miles, "rejected trip");
        return Err(HomefinError::invalid("Miles cannot be negative."));
    }

    let trip_type = trip_type.parse::<TripType>().map_err(|e| {
        warn!(trip_type = %e.0, "rejected trip type");
        HomefinError::invalid(e.to_string())
    })?;

    mileage_record.validate().map_err(|e| {
        warn!(
            business_miles = mileage_record.business_miles,
            personal_miles = mileage_record.personal_miles,
            "rejected mileage record"
        );
        HomefinError::invalid(e.to_string())
    })?;

    *mileage_record.accumulator_mut(trip_type) += miles;
    debug!(%trip_type, miles, "recorded trip");
    Ok(())
}

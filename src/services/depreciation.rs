//! Straight-line depreciation
//!
//! An asset loses the same amount of value every year of its useful life.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{HomefinError, HomefinResult};

/// One year of a depreciation schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DepreciationYear {
    /// 1-based year of the asset's life
    pub year: u32,
    pub depreciation: f64,
    /// Value remaining at the end of the year
    pub book_value: f64,
}

fn validate(asset_value: f64, lifespan: i32) -> HomefinResult<()> {
    if asset_value <= 0.0 || !asset_value.is_finite() || lifespan < 1 {
        warn!(asset_value, lifespan, "rejected depreciation input");
        return Err(HomefinError::invalid(
            "Asset value must be greater than 0 and lifespan must be at least 1 year.",
        ));
    }
    Ok(())
}

/// Annual depreciation of an asset using the straight-line method
///
/// # Errors
///
/// Returns [`HomefinError::InvalidArgument`] if `asset_value` is not positive
/// or `lifespan` is less than one year.
pub fn calculate_depreciation(asset_value: f64, lifespan: i32) -> HomefinResult<f64> {
    validate(asset_value, lifespan)?;

    let annual_depreciation = asset_value / f64::from(lifespan);
    debug!(asset_value, lifespan, annual_depreciation, "calculated depreciation");
    Ok(annual_depreciation)
}

/// Longest lifespan, in years, a schedule is built for
pub const MAX_SCHEDULE_YEARS: i32 = 1000;

/// Year-by-year schedule for the whole lifespan
///
/// The book value of the final year is exactly zero.
///
/// # Errors
///
/// Same as [`calculate_depreciation`], and also when `lifespan` exceeds
/// [`MAX_SCHEDULE_YEARS`].
pub fn depreciation_schedule(
    asset_value: f64,
    lifespan: i32,
) -> HomefinResult<Vec<DepreciationYear>> {
    if lifespan > MAX_SCHEDULE_YEARS {
        warn!(lifespan, "rejected depreciation schedule length");
        return Err(HomefinError::invalid(format!(
            "Schedule lifespan cannot exceed {} years.",
            MAX_SCHEDULE_YEARS
        )));
    }

    let annual = calculate_depreciation(asset_value, lifespan)?;
    let years = lifespan.unsigned_abs();

    Ok((1..=years)
        .map(|year| {
            let book_value = if year == years {
                0.0
            } else {
                asset_value - annual * f64::from(year)
            };
            DepreciationYear {
                year,
                depreciation: annual,
                book_value,
            }
        })
        .collect())
}

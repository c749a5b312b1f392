//! Imperial to SI conversions for player measurements.

use crate::error::ConversionError;

pub const LBS_PER_KG: f64 = 2.205;
pub const CM_PER_INCH: f64 = 2.54;
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Pounds to whole kilograms, rounding half to even.
///
/// ```rust
/// use bdl_stats::stats::units::pounds_to_kg;
///
/// assert_eq!(pounds_to_kg(220.5).unwrap(), 100);
/// ```
pub fn pounds_to_kg(pounds: f64) -> Result<i64, ConversionError> {
    check_measurement(pounds)?;
    Ok((pounds / LBS_PER_KG).round_ties_even() as i64)
}

/// Feet and inches to meters, rounded to two decimals.
///
/// Both components are required; a height recorded with feet but no inches
/// cannot be converted.
///
/// ```rust
/// use bdl_stats::stats::units::feet_inches_to_meters;
///
/// assert_eq!(feet_inches_to_meters(Some(6.0), Some(0.0)).unwrap(), 1.83);
/// ```
pub fn feet_inches_to_meters(
    feet: Option<f64>,
    inches: Option<f64>,
) -> Result<f64, ConversionError> {
    let feet = feet.ok_or(ConversionError::MissingComponent {
        component: "height_feet",
    })?;
    let inches = inches.ok_or(ConversionError::MissingComponent {
        component: "height_inches",
    })?;
    check_measurement(feet)?;
    check_measurement(inches)?;

    let meters = (feet * INCHES_PER_FOOT + inches) * CM_PER_INCH / 100.0;
    round_to_hundredths(meters)
}

/// Round the exact binary value to two decimals. Scaling by 100 first would
/// push values such as 1.905 (stored slightly above) onto an exact tie.
fn round_to_hundredths(value: f64) -> Result<f64, ConversionError> {
    format!("{value:.2}")
        .parse()
        .map_err(|_| ConversionError::InvalidMeasurement { value })
}

fn check_measurement(value: f64) -> Result<(), ConversionError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConversionError::InvalidMeasurement { value })
    }
}

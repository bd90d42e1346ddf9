//! Validation for geographic coordinates, geohash codes and precisions.

use crate::error::{GeoError, Result};
use crate::hash::{MAX_PRECISION, decode_digit};
use geocircle_types::Point;

/// Validates a point has finite, in-range longitude and latitude.
///
/// Longitude: [-180.0, 180.0], Latitude: [-90.0, 90.0]
///
/// # Examples
///
/// ```
/// use geocircle::compute::validation::validate_geographic_point;
/// use geocircle::Point;
///
/// let boston = Point::new(-71.047656, 42.350072);
/// assert!(validate_geographic_point(&boston).is_ok());
///
/// // Invalid longitude
/// let invalid = Point::new(200.0, 40.0);
/// assert!(validate_geographic_point(&invalid).is_err());
///
/// // Invalid latitude
/// let invalid = Point::new(-74.0, 95.0);
/// assert!(validate_geographic_point(&invalid).is_err());
/// ```
pub fn validate_geographic_point(point: &Point) -> Result<()> {
    let (x, y) = (point.lon(), point.lat());

    if !x.is_finite() {
        return Err(GeoError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            x
        )));
    }

    if !y.is_finite() {
        return Err(GeoError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            y
        )));
    }

    if !(-180.0..=180.0).contains(&x) {
        return Err(GeoError::InvalidInput(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            x
        )));
    }

    if !(-90.0..=90.0).contains(&y) {
        return Err(GeoError::InvalidInput(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            y
        )));
    }

    Ok(())
}

/// Validates an encoding precision is within `1..=MAX_PRECISION`.
pub fn validate_precision(precision: usize) -> Result<()> {
    if !(1..=MAX_PRECISION).contains(&precision) {
        return Err(GeoError::InvalidPrecision {
            precision,
            max: MAX_PRECISION,
        });
    }
    Ok(())
}

/// Validates a non-empty geohash made only of alphabet characters.
///
/// # Examples
///
/// ```
/// use geocircle::compute::validation::validate_geohash;
///
/// assert!(validate_geohash("drt2zm8ej9eg").is_ok());
/// assert!(validate_geohash("").is_err());
/// assert!(validate_geohash("dra").is_err()); // 'a' is not a geohash digit
/// ```
pub fn validate_geohash(hash: &str) -> Result<()> {
    if hash.is_empty() {
        return Err(GeoError::InvalidInput("Geohash must not be empty".to_string()));
    }

    for c in hash.chars() {
        decode_digit(c)?;
    }

    Ok(())
}

//! Point ↔ geohash conversion and digit arithmetic.
//!
//! A geohash fills the longitude/latitude plane with a Z-order (Morton)
//! curve starting at (-180, -90). Every character carries five bits that
//! alternately halve the longitude and latitude ranges, longitude first, so
//! dropping characters from the end yields ever larger ancestor regions.

use crate::compute::validation::{validate_geographic_point, validate_geohash, validate_precision};
use crate::error::{GeoError, Result};
use geocircle_types::{GeoBox, Point};

/// The base-32 geohash alphabet; `a`, `i`, `l` and `o` are skipped.
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Precision used when callers have no preference.
pub const DEFAULT_PRECISION: usize = 8;

/// Longest geohash the encoder produces, 30 bits per axis or a few
/// centimeters. Decoding accepts longer hashes.
pub const MAX_PRECISION: usize = 12;

pub(crate) const BITS_PER_DIGIT: usize = 5;

/// Digit character for a value already known to be below 32.
#[inline]
pub(crate) fn digit_char(value: u8) -> char {
    ALPHABET[(value & 0x1f) as usize] as char
}

/// Returns the geohash digit for a number between 0 and 31.
///
/// ```rust
/// use geocircle::hash::encode_digit;
///
/// assert_eq!(encode_digit(10)?, 'b');
/// assert!(encode_digit(32).is_err());
/// # Ok::<(), geocircle::GeoError>(())
/// ```
pub fn encode_digit(value: u8) -> Result<char> {
    if usize::from(value) >= ALPHABET.len() {
        return Err(GeoError::InvalidInput(format!(
            "Geohash digit value must be below 32, got: {}",
            value
        )));
    }
    Ok(digit_char(value))
}

/// Returns the number between 0 and 31 for a geohash digit.
pub fn decode_digit(digit: char) -> Result<u8> {
    ALPHABET
        .iter()
        .position(|&c| char::from(c) == digit)
        .map(|idx| idx as u8)
        .ok_or(GeoError::InvalidDigit(digit))
}

/// Narrow `[min, max]` to the half holding `value`, returning the chosen bit.
#[inline]
fn bisect(value: f64, min: &mut f64, max: &mut f64) -> u8 {
    let mid = (*min + *max) / 2.0;
    if value >= mid {
        *min = mid;
        1
    } else {
        *max = mid;
        0
    }
}

/// Calculate the geohash of a point to `precision` characters.
///
/// # Errors
///
/// Returns [`GeoError::InvalidInput`] for non-finite or out of range
/// coordinates and [`GeoError::InvalidPrecision`] outside `1..=12`.
///
/// # Examples
///
/// ```rust
/// use geocircle::{Point, hash};
///
/// let boston = Point::new(-71.047656, 42.350072);
/// assert_eq!(hash::encode(&boston, 12)?, "drt2zm8ej9eg");
/// assert_eq!(hash::encode(&Point::new(0.0, 0.0), 12)?, "s00000000000");
/// # Ok::<(), geocircle::GeoError>(())
/// ```
pub fn encode(point: &Point, precision: usize) -> Result<String> {
    validate_geographic_point(point)?;
    validate_precision(precision)?;

    let (mut min_lon, mut max_lon) = (-180.0_f64, 180.0_f64);
    let (mut min_lat, mut max_lat) = (-90.0_f64, 90.0_f64);

    let mut hash = String::with_capacity(precision);
    let mut longitude_bit = true;

    for _ in 0..precision {
        let mut digit = 0u8;

        for _ in 0..BITS_PER_DIGIT {
            let bit = if longitude_bit {
                bisect(point.lon(), &mut min_lon, &mut max_lon)
            } else {
                bisect(point.lat(), &mut min_lat, &mut max_lat)
            };

            digit = (digit << 1) | bit;
            longitude_bit = !longitude_bit;
        }

        hash.push(digit_char(digit));
    }

    Ok(hash)
}

/// [`encode`] at [`DEFAULT_PRECISION`].
pub fn encode_default(point: &Point) -> Result<String> {
    encode(point, DEFAULT_PRECISION)
}

/// Calculate the bounding box of a geohash.
///
/// The empty string is the root of the curve and decodes to the globe.
pub fn decode_box(hash: &str) -> Result<GeoBox> {
    let (mut min_lon, mut max_lon) = (-180.0_f64, 180.0_f64);
    let (mut min_lat, mut max_lat) = (-90.0_f64, 90.0_f64);
    let mut longitude_bit = true;

    for c in hash.chars() {
        let digit = decode_digit(c)?;

        for shift in (0..BITS_PER_DIGIT).rev() {
            let bit = (digit >> shift) & 1 == 1;

            let (min, max) = if longitude_bit {
                (&mut min_lon, &mut max_lon)
            } else {
                (&mut min_lat, &mut max_lat)
            };
            let mid = (*min + *max) / 2.0;
            if bit {
                *min = mid;
            } else {
                *max = mid;
            }

            longitude_bit = !longitude_bit;
        }
    }

    Ok(GeoBox::from_edges(max_lat, min_lat, max_lon, min_lon))
}

/// Returns the point at the center of the geohash box.
pub fn decode(hash: &str) -> Result<Point> {
    Ok(decode_box(hash)?.center())
}

/// Returns the geohash immediately following this one at the same length,
/// or `None` if `hash` is the last one (all `z`).
///
/// ```rust
/// use geocircle::hash::increment;
///
/// assert_eq!(increment("38z")?.as_deref(), Some("390"));
/// assert_eq!(increment("z")?, None);
/// # Ok::<(), geocircle::GeoError>(())
/// ```
pub fn increment(hash: &str) -> Result<Option<String>> {
    validate_geohash(hash)?;
    increment_digits(hash)
}

fn increment_digits(hash: &str) -> Result<Option<String>> {
    let (base, last) = hash.split_at(hash.len() - 1);
    let value = decode_digit(char::from(last.as_bytes()[0]))?;

    if value < 31 {
        let mut next = String::with_capacity(hash.len());
        next.push_str(base);
        next.push(digit_char(value + 1));
        return Ok(Some(next));
    }

    if base.is_empty() {
        return Ok(None);
    }

    // carry into the preceding character
    Ok(increment_digits(base)?.map(|mut carried| {
        carried.push('0');
        carried
    }))
}

/// Returns true if the point lies within the geohash box, edges included.
pub fn contains(hash: &str, point: &Point) -> Result<bool> {
    Ok(decode_box(hash)?.contains_point(point))
}

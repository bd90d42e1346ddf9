//! Widening search regions around a geohash.
//!
//! A [`HashCircle`] starts as a single cell and grows by dropping characters
//! from its center hash. Each step covers the coarser cell plus the half of
//! the adjacent cells (and a quarter of the diagonal one) on the side the
//! full-precision center leans towards, so the center stays well inside the
//! region. After every step [`HashCircle::max_radius`] is a lower bound on
//! the distance from the center to anything outside the region: a proximity
//! query of radius `r` can scan the region's keys once `max_radius >= r`.
//!
//! The bound is unreliable near the poles, where meridians converge.

use crate::compute::validation::validate_geohash;
use crate::config::Config;
use crate::error::{GeoError, Result};
use crate::hash::{self, Direction, Quadrant};
use crate::set::GeohashSet;
use geocircle_types::{GeoBox, Point};

/// An expanding, approximately circular set of geohashes.
#[derive(Debug, Clone, PartialEq)]
pub struct HashCircle {
    center_geohash: String,
    precision: usize,
    geobox: GeoBox,
    center: Point,
    region: GeohashSet,
    max_radius: f64,
}

impl HashCircle {
    /// Create a circle covering exactly the cell of `center_geohash`.
    ///
    /// ```rust
    /// use geocircle::HashCircle;
    ///
    /// let circle = HashCircle::new("drt2zm8e")?;
    /// assert_eq!(circle.precision(), 8);
    /// assert_eq!(circle.region().len(), 1);
    /// assert!(circle.max_radius() > 0.0);
    /// # Ok::<(), geocircle::GeoError>(())
    /// ```
    pub fn new(center_geohash: impl Into<String>) -> Result<Self> {
        let center_geohash = center_geohash.into();
        validate_geohash(&center_geohash)?;

        let geobox = hash::decode_box(&center_geohash)?;
        let center = geobox.center();
        let max_radius = center.distance_to_longitude(geobox.east());

        let mut region = GeohashSet::new();
        region.add(center_geohash.clone());

        Ok(Self {
            precision: center_geohash.len(),
            center_geohash,
            geobox,
            center,
            region,
            max_radius,
        })
    }

    /// Smallest circle around `point` whose `max_radius` reaches
    /// `radius_km`, starting at `config.precision` and dropping
    /// `config.expand_step` characters per step.
    ///
    /// If the circle cannot grow any further before reaching the radius the
    /// largest circle is returned; check [`HashCircle::max_radius`].
    ///
    /// ```rust
    /// use geocircle::{Config, HashCircle, Point};
    ///
    /// let boston = Point::new(-71.047656, 42.350072);
    /// let circle = HashCircle::covering(&boston, 5.0, &Config::default())?;
    /// assert!(circle.max_radius() >= 5.0);
    /// assert!(circle.contains(&boston)?);
    /// # Ok::<(), geocircle::GeoError>(())
    /// ```
    pub fn covering(point: &Point, radius_km: f64, config: &Config) -> Result<Self> {
        config.validate().map_err(GeoError::Config)?;

        if !radius_km.is_finite() || radius_km < 0.0 {
            return Err(GeoError::InvalidInput(format!(
                "Radius must be finite and non-negative, got: {}",
                radius_km
            )));
        }

        let mut circle = Self::new(hash::encode(point, config.precision)?)?;

        while circle.max_radius < radius_km {
            if !circle.expand(config.expand_step)? {
                log::debug!(
                    "Circle around {} cannot grow past {:.3} km, requested {:.3} km",
                    circle.center_geohash,
                    circle.max_radius,
                    radius_km
                );
                break;
            }
        }

        log::debug!(
            "Covering {:.3} km around {} with {} entries at precision {}",
            radius_km,
            circle.center_geohash,
            circle.region.len(),
            circle.precision
        );

        Ok(circle)
    }

    /// Grow the circle by dropping `amount` characters from the center hash.
    ///
    /// Returns `Ok(false)` without changing anything once the circle is at
    /// precision 1; it never wraps to the whole globe.
    pub fn expand(&mut self, amount: usize) -> Result<bool> {
        if amount == 0 {
            return Err(GeoError::InvalidInput(
                "Expansion amount must be greater than zero".to_string(),
            ));
        }

        if self.precision == 1 {
            return Ok(false);
        }

        let precision = self.precision.saturating_sub(amount).max(1);
        let center = &self.center_geohash[..precision];
        let geobox = hash::decode_box(center)?;
        let quadrant = hash::quadrant(&self.center_geohash, precision)?.ok_or_else(|| {
            GeoError::InvalidInput(format!(
                "No quadrant for {} at precision {}",
                self.center_geohash, precision
            ))
        })?;

        let (region, covered) = grow_region(center, &geobox, quadrant)?;
        let max_radius = conservative_radius(&self.center, &covered);

        log::debug!(
            "Expanded circle around {} to precision {} ({}), max radius {:.3} km -> {:.3} km",
            self.center_geohash,
            precision,
            quadrant,
            self.max_radius,
            max_radius
        );

        self.precision = precision;
        self.geobox = geobox;
        self.region = region;
        self.max_radius = max_radius;

        Ok(true)
    }

    pub fn expand_once(&mut self) -> Result<bool> {
        self.expand(1)
    }

    /// Returns true if any geohash of the region contains the point.
    pub fn contains(&self, point: &Point) -> Result<bool> {
        self.region.contains(point)
    }

    /// Great-circle distance in kilometers from the circle's center.
    pub fn distance_to_point(&self, point: &Point) -> f64 {
        self.center.distance_to_point(point)
    }

    /// Kilometers from the center guaranteed to lie inside the region.
    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn center(&self) -> &Point {
        &self.center
    }

    pub fn center_geohash(&self) -> &str {
        &self.center_geohash
    }

    /// Decoded box of the center hash at the current precision.
    pub fn geobox(&self) -> &GeoBox {
        &self.geobox
    }

    pub fn region(&self) -> &GeohashSet {
        &self.region
    }

    pub fn into_region(self) -> GeohashSet {
        self.region
    }
}

/// Region around `center` leaning towards `quadrant`, and the box it is
/// guaranteed to cover.
fn grow_region(
    center: &str,
    geobox: &GeoBox,
    quadrant: Quadrant,
) -> Result<(GeohashSet, GeoBox)> {
    let lat_side = quadrant.latitude_side();
    let lon_side = quadrant.longitude_side();

    let mut region = GeohashSet::new();
    region.add(center);

    let mut grow_lat = 0.0;
    match hash::neighbor(center, lat_side)? {
        Some(adjacent) => {
            region.add_set(hash::halve(&adjacent, lat_side.opposite())?);
            if let Some(diagonal) = hash::neighbor(&adjacent, lon_side)? {
                region.add_set(hash::quarter(&diagonal, quadrant.opposite())?);
            }
            grow_lat = geobox.lat_span() / 2.0;
        }
        None => log::warn!(
            "{} has no {} neighbor; region is clipped at the pole",
            center,
            lat_side
        ),
    }

    let mut grow_lon = 0.0;
    if let Some(adjacent) = hash::neighbor(center, lon_side)? {
        region.add_set(hash::halve(&adjacent, lon_side.opposite())?);
        grow_lon = geobox.lon_span() / 2.0;
    }

    let (north, south) = match lat_side {
        Direction::North => (grow_lat, 0.0),
        _ => (0.0, grow_lat),
    };
    let (east, west) = match lon_side {
        Direction::East => (grow_lon, 0.0),
        _ => (0.0, grow_lon),
    };

    Ok((region, geobox.extend(north, south, east, west)))
}

/// Shortest distance from `center` to an edge of `covered`. Edges on a pole
/// are not edges at all and are skipped.
fn conservative_radius(center: &Point, covered: &GeoBox) -> f64 {
    let mut radius = center
        .distance_to_longitude(covered.east())
        .min(center.distance_to_longitude(covered.west()));

    if covered.north() < 90.0 {
        radius = radius.min(center.distance_to_latitude(covered.north().min(90.0)));
    }
    if covered.south() > -90.0 {
        radius = radius.min(center.distance_to_latitude(covered.south().max(-90.0)));
    }

    radius
}

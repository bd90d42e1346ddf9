//! Wrapped geometric point type from the `geo` crate with great-circle distance math.
//!
//! Distances in this module are measured on a sphere of radius
//! [`EARTH_RADIUS_KM`] and returned in kilometers, except for
//! [`Point::haversine_distance`] which defers to `geo` and returns meters.

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Angular tolerance (radians) for the meridian and pole degeneracies.
const DEGENERACY_EPSILON: f64 = 1e-12;

/// Cosines closer to 1 than this lose the angle to rounding in `acos`.
const SMALL_ANGLE_COSINE: f64 = 1.0 - 1e-10;

/// Error type for GeoJSON conversions.
#[derive(Debug)]
pub enum GeoJsonError {
    /// Serialization failed
    Serialization(String),
    /// Deserialization failed
    Deserialization(String),
    /// Invalid geometry type
    InvalidGeometry(String),
    /// Invalid coordinates
    InvalidCoordinates(String),
}

impl std::fmt::Display for GeoJsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialization(msg) => write!(f, "GeoJSON serialization error: {}", msg),
            Self::Deserialization(msg) => write!(f, "GeoJSON deserialization error: {}", msg),
            Self::InvalidGeometry(msg) => write!(f, "Invalid GeoJSON geometry: {}", msg),
            Self::InvalidCoordinates(msg) => write!(f, "Invalid GeoJSON coordinates: {}", msg),
        }
    }
}

impl std::error::Error for GeoJsonError {}

/// A location on the earth denoted by longitude and latitude in degrees.
///
/// Latitude runs from -90 (south pole) through 0 (equator) to 90 (north
/// pole). Longitude runs from -180 to 180 with 0 at the prime meridian; both
/// ends meet at the antimeridian.
///
/// Coordinates follow the `geo` convention: `x` is longitude, `y` is latitude.
///
/// # Examples
///
/// ```
/// use geocircle_types::geo::Point;
///
/// let boston = Point::new(-71.047656, 42.350072);
/// assert_eq!(boston.lon(), -71.047656);
/// assert_eq!(boston.lat(), 42.350072);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    inner: geo::Point<f64>,
}

impl Point {
    /// Create a new point from x (longitude) and y (latitude) coordinates.
    ///
    /// # Arguments
    ///
    /// * `x` - Longitude in degrees (-180 to 180)
    /// * `y` - Latitude in degrees (-90 to 90)
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            inner: geo::Point::new(x, y),
        }
    }

    /// Get the x coordinate (longitude).
    #[inline]
    pub fn x(&self) -> f64 {
        self.inner.x()
    }

    /// Get the y coordinate (latitude).
    #[inline]
    pub fn y(&self) -> f64 {
        self.inner.y()
    }

    /// Get the longitude (alias for x).
    #[inline]
    pub fn lon(&self) -> f64 {
        self.x()
    }

    /// Get the latitude (alias for y).
    #[inline]
    pub fn lat(&self) -> f64 {
        self.y()
    }

    /// Access the inner `geo::Point`.
    #[inline]
    pub fn inner(&self) -> &geo::Point<f64> {
        &self.inner
    }

    /// Convert into the inner `geo::Point`.
    #[inline]
    pub fn into_inner(self) -> geo::Point<f64> {
        self.inner
    }

    /// Great-circle distance to another point in kilometers.
    ///
    /// Uses the spherical law of cosines. Below roughly a hundred meters the
    /// haversine form takes over, since `acos` resolves angles near zero to
    /// only about 0.1 m. Identical points yield exactly 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use geocircle_types::geo::Point;
    ///
    /// let nyc = Point::new(-74.0060, 40.7128);
    /// let la = Point::new(-118.2437, 34.0522);
    /// let km = nyc.distance_to_point(&la);
    /// assert!(km > 3_900.0 && km < 4_000.0);
    /// assert_eq!(nyc.distance_to_point(&nyc), 0.0);
    /// ```
    pub fn distance_to_point(&self, other: &Point) -> f64 {
        if self.inner == other.inner {
            return 0.0;
        }

        let lat1 = self.lat().to_radians();
        let lon1 = self.lon().to_radians();
        let lat2 = other.lat().to_radians();
        let lon2 = other.lon().to_radians();

        let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * (lon1 - lon2).cos();

        if cos_angle > SMALL_ANGLE_COSINE {
            let half_dlat = ((lat2 - lat1) / 2.0).sin();
            let half_dlon = ((lon2 - lon1) / 2.0).sin();
            let h = half_dlat * half_dlat + lat1.cos() * lat2.cos() * half_dlon * half_dlon;
            return 2.0 * h.sqrt().min(1.0).asin() * EARTH_RADIUS_KM;
        }

        // rounding can push the argument just past -1.0 for antipodal points
        cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_KM
    }

    /// Distance in kilometers to the parallel at `latitude`, measured along
    /// this point's meridian.
    pub fn distance_to_latitude(&self, latitude: f64) -> f64 {
        self.distance_to_point(&Point::new(self.lon(), latitude))
    }

    /// Shortest distance in kilometers from this point to the meridian at
    /// `longitude`.
    ///
    /// The nearest point on the meridian is found through the equatorial
    /// point perpendicular to the meridian's great circle. Two cases are
    /// resolved without the general formula:
    ///
    /// - the point lies a quarter turn away from the meridian, where the
    ///   formula divides by zero: the result is `±EARTH_RADIUS_KM * π/2`
    ///   signed by the point's hemisphere;
    /// - the point sits on a pole, which is 0 from every meridian.
    pub fn distance_to_longitude(&self, longitude: f64) -> f64 {
        let lon3 = longitude.to_radians();
        let lat1 = self.lat().to_radians();
        let lon1 = self.lon().to_radians();

        // equatorial point perpendicular to the meridian's great circle
        let lat2 = 0.0_f64;
        let lon2 = lon3 + FRAC_PI_2;

        if (lon1 - lon2).sin().abs() < DEGENERACY_EPSILON {
            let hemisphere = if lat1 >= 0.0 { 1.0 } else { -1.0 };
            return hemisphere * EARTH_RADIUS_KM * FRAC_PI_2;
        }

        if FRAC_PI_2 - lat1.abs() < DEGENERACY_EPSILON {
            return 0.0;
        }

        let lat3 = ((lat1.sin() * lat2.cos() * (lon3 - lon2).sin()
            - lat2.sin() * lat1.cos() * (lon3 - lon1).sin())
            / (lat1.cos() * lat2.cos() * (lon1 - lon2).sin()))
        .atan();

        self.distance_to_point(&Point::new(lon3.to_degrees(), lat3.to_degrees()))
    }

    /// Calculate haversine distance to another point in meters.
    ///
    /// # Examples
    ///
    /// ```
    /// use geocircle_types::geo::Point;
    ///
    /// let nyc = Point::new(-74.0060, 40.7128);
    /// let la = Point::new(-118.2437, 34.0522);
    /// let distance = nyc.haversine_distance(&la);
    /// assert!(distance > 3_900_000.0); // ~3,944 km
    /// ```
    #[inline]
    pub fn haversine_distance(&self, other: &Point) -> f64 {
        use geo::Distance;
        geo::Haversine.distance(self.inner, other.inner)
    }

    /// Convert to GeoJSON string representation.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "geojson")]
    /// # {
    /// use geocircle_types::geo::Point;
    ///
    /// let point = Point::new(-74.0060, 40.7128);
    /// let json = point.to_geojson().unwrap();
    /// assert!(json.contains("Point"));
    /// # }
    /// ```
    #[cfg(feature = "geojson")]
    pub fn to_geojson(&self) -> Result<String, GeoJsonError> {
        use geojson::{Geometry, Value};

        let geom = Geometry::new(Value::Point(vec![self.x(), self.y()]));
        serde_json::to_string(&geom)
            .map_err(|e| GeoJsonError::Serialization(format!("Failed to serialize point: {}", e)))
    }

    /// Parse from GeoJSON string.
    #[cfg(feature = "geojson")]
    pub fn from_geojson(geojson: &str) -> Result<Self, GeoJsonError> {
        use geojson::{Geometry, Value};

        let geom: Geometry = serde_json::from_str(geojson).map_err(|e| {
            GeoJsonError::Deserialization(format!("Failed to parse GeoJSON: {}", e))
        })?;

        match geom.value {
            Value::Point(coords) => {
                if coords.len() < 2 {
                    return Err(GeoJsonError::InvalidCoordinates(
                        "Point must have at least 2 coordinates".to_string(),
                    ));
                }
                Ok(Point::new(coords[0], coords[1]))
            }
            _ => Err(GeoJsonError::InvalidGeometry(
                "GeoJSON geometry is not a Point".to_string(),
            )),
        }
    }
}

impl From<geo::Point<f64>> for Point {
    fn from(point: geo::Point<f64>) -> Self {
        Self { inner: point }
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(point: Point) -> Self {
        point.inner
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x(), point.y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creation() {
        let point = Point::new(-71.047656, 42.350072);
        assert_eq!(point.x(), -71.047656);
        assert_eq!(point.y(), 42.350072);
        assert_eq!(point.lon(), -71.047656);
        assert_eq!(point.lat(), 42.350072);
    }

    #[test]
    fn test_point_tuple_conversions() {
        let point: Point = (14.550072, 47.516231).into();
        assert_eq!(point.lon(), 14.550072);
        let (x, y): (f64, f64) = point.into();
        assert_eq!((x, y), (14.550072, 47.516231));
    }

    #[test]
    fn test_distance_to_identical_point_is_zero() {
        for point in [
            Point::new(0.0, 0.0),
            Point::new(-71.047656, 42.350072),
            Point::new(102.495496, 19.856270),
            Point::new(180.0, 90.0),
        ] {
            let d = point.distance_to_point(&point);
            assert!(!d.is_nan());
            assert_eq!(d, 0.0);
        }
    }

    #[test]
    fn test_distance_one_degree_along_equator() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let expected = EARTH_RADIUS_KM * 1.0_f64.to_radians();
        assert!((a.distance_to_point(&b) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_distance_agrees_with_haversine() {
        let nyc = Point::new(-74.0060, 40.7128);
        let la = Point::new(-118.2437, 34.0522);
        let km = nyc.distance_to_point(&la);
        let haversine_km = nyc.haversine_distance(&la) / 1000.0;
        // geo uses a slightly different mean radius
        assert!((km - haversine_km).abs() < 5.0);
    }

    #[test]
    fn test_distance_to_latitude() {
        let point = Point::new(10.0, 40.0);
        let expected = EARTH_RADIUS_KM * 5.0_f64.to_radians();
        assert!((point.distance_to_latitude(45.0) - expected).abs() < 1e-6);
        assert!((point.distance_to_latitude(35.0) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_distance_to_own_meridian_is_zero() {
        let point = Point::new(-71.0, 42.0);
        assert!(point.distance_to_longitude(-71.0).abs() < 1e-6);
        assert!(point.distance_to_longitude(-70.9) > 5.0);
    }

    #[test]
    fn test_distance_between_centimeter_neighbors() {
        // a few centimeters apart, where acos alone collapses to 0
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3e-7, 0.0);
        let expected = EARTH_RADIUS_KM * 3e-7_f64.to_radians();
        let d = a.distance_to_point(&b);
        assert!(d > 0.0);
        assert!((d - expected).abs() < expected * 1e-6);

        let north = Point::new(-71.047656, 42.350072);
        let south = Point::new(-71.047656, 42.350071);
        let expected = EARTH_RADIUS_KM * 1e-6_f64.to_radians();
        assert!((north.distance_to_point(&south) - expected).abs() < expected * 1e-6);
    }

    #[test]
    fn test_distance_to_longitude_on_equator() {
        let point = Point::new(10.0, 0.0);
        let expected = EARTH_RADIUS_KM * 10.0_f64.to_radians();
        assert!((point.distance_to_longitude(0.0) - expected).abs() < 1e-6);
        assert!((point.distance_to_longitude(20.0) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_distance_to_longitude_shrinks_with_latitude() {
        let low = Point::new(0.0, 10.0);
        let high = Point::new(0.0, 60.0);
        assert!(high.distance_to_longitude(5.0) < low.distance_to_longitude(5.0));
        // never further than the distance along the parallel
        let along_parallel = high.distance_to_point(&Point::new(5.0, 60.0));
        assert!(high.distance_to_longitude(5.0) <= along_parallel);
    }

    #[test]
    fn test_distance_to_longitude_quarter_turn() {
        let north = Point::new(90.0, 30.0);
        let south = Point::new(90.0, -30.0);
        let quarter = EARTH_RADIUS_KM * FRAC_PI_2;
        assert!((north.distance_to_longitude(0.0) - quarter).abs() < 1e-9);
        assert!((south.distance_to_longitude(0.0) + quarter).abs() < 1e-9);
    }

    #[test]
    fn test_distance_to_longitude_from_pole() {
        let pole = Point::new(12.0, 90.0);
        assert_eq!(pole.distance_to_longitude(-100.0), 0.0);
    }

    #[cfg(feature = "geojson")]
    #[test]
    fn test_point_geojson_roundtrip() {
        let original = Point::new(-74.0060, 40.7128);
        let json = original.to_geojson().unwrap();
        let parsed = Point::from_geojson(&json).unwrap();

        assert!((original.x() - parsed.x()).abs() < 1e-10);
        assert!((original.y() - parsed.y()).abs() < 1e-10);
    }
}

use crate::geo::Point;
use geo::Rect;
use serde::{Deserialize, Serialize};

/// A latitude/longitude aligned box circumscribing an area of the earth.
///
/// The edges are the north and south parallels and the east and west
/// meridians. This is a wrapper around `geo::Rect` (x = longitude,
/// y = latitude), so `north >= south` and `east >= west` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBox {
    /// The underlying geometric rectangle
    pub rect: Rect,
}

impl GeoBox {
    /// Create a box spanning two arbitrary corner points.
    ///
    /// # Examples
    ///
    /// ```
    /// use geocircle_types::bbox::GeoBox;
    /// use geocircle_types::geo::Point;
    ///
    /// let bbox = GeoBox::new(Point::new(10.0, -5.0), Point::new(-20.0, 15.0));
    /// assert_eq!(bbox.north(), 15.0);
    /// assert_eq!(bbox.south(), -5.0);
    /// assert_eq!(bbox.east(), 10.0);
    /// assert_eq!(bbox.west(), -20.0);
    /// ```
    pub fn new(p1: Point, p2: Point) -> Self {
        Self {
            rect: Rect::new(
                geo::coord! { x: p1.lon(), y: p1.lat() },
                geo::coord! { x: p2.lon(), y: p2.lat() },
            ),
        }
    }

    /// Create a box from its four edges.
    pub fn from_edges(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self::new(Point::new(east, north), Point::new(west, south))
    }

    /// The whole globe, `[-90, 90]` by `[-180, 180]`.
    pub fn globe() -> Self {
        Self::from_edges(90.0, -90.0, 180.0, -180.0)
    }

    /// Create a box from a `geo::Rect`.
    pub fn from_rect(rect: Rect) -> Self {
        Self { rect }
    }

    /// Northern edge (maximum latitude).
    pub fn north(&self) -> f64 {
        self.rect.max().y
    }

    /// Southern edge (minimum latitude).
    pub fn south(&self) -> f64 {
        self.rect.min().y
    }

    /// Eastern edge (maximum longitude).
    pub fn east(&self) -> f64 {
        self.rect.max().x
    }

    /// Western edge (minimum longitude).
    pub fn west(&self) -> f64 {
        self.rect.min().x
    }

    /// Latitude extent in degrees.
    pub fn lat_span(&self) -> f64 {
        self.north() - self.south()
    }

    /// Longitude extent in degrees.
    pub fn lon_span(&self) -> f64 {
        self.east() - self.west()
    }

    /// The point at the middle of both axes.
    pub fn center(&self) -> Point {
        Point::new(
            (self.east() + self.west()) / 2.0,
            (self.north() + self.south()) / 2.0,
        )
    }

    pub fn northeast(&self) -> Point {
        Point::new(self.east(), self.north())
    }

    pub fn northwest(&self) -> Point {
        Point::new(self.west(), self.north())
    }

    pub fn southeast(&self) -> Point {
        Point::new(self.east(), self.south())
    }

    pub fn southwest(&self) -> Point {
        Point::new(self.west(), self.south())
    }

    /// Check if a point is contained within this box, edges included.
    pub fn contains_point(&self, point: &Point) -> bool {
        self.south() <= point.lat()
            && point.lat() <= self.north()
            && self.west() <= point.lon()
            && point.lon() <= self.east()
    }

    /// Return a copy of this box pushed outward by the given number of
    /// degrees on each side. Deltas are expected to be non-negative.
    ///
    /// No clamping is applied: an eastern edge may pass 180 when the box is
    /// widened across the antimeridian.
    pub fn extend(&self, north: f64, south: f64, east: f64, west: f64) -> Self {
        Self::from_edges(
            self.north() + north,
            self.south() - south,
            self.east() + east,
            self.west() - west,
        )
    }

    /// Convert to a GeoJSON Polygon string (closed counter-clockwise ring).
    #[cfg(feature = "geojson")]
    pub fn to_geojson(&self) -> Result<String, crate::geo::GeoJsonError> {
        use geojson::{Geometry, Value};

        let ring = vec![
            vec![self.west(), self.south()],
            vec![self.east(), self.south()],
            vec![self.east(), self.north()],
            vec![self.west(), self.north()],
            vec![self.west(), self.south()],
        ];
        let geom = Geometry::new(Value::Polygon(vec![ring]));
        serde_json::to_string(&geom).map_err(|e| {
            crate::geo::GeoJsonError::Serialization(format!("Failed to serialize box: {}", e))
        })
    }
}

impl From<Rect> for GeoBox {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

//! # geocircle-types
//!
//! Value types shared by the geocircle geohash library:
//!
//! - **Point**: a longitude/latitude pair with great-circle distance math
//! - **GeoBox**: a latitude/longitude aligned bounding box
//!
//! Both types are serializable with Serde and built on top of the `geo`
//! crate's primitives.
//!
//! ## Examples
//!
//! ```rust
//! use geocircle_types::bbox::GeoBox;
//! use geocircle_types::geo::Point;
//!
//! let boston = Point::new(-71.047656, 42.350072);
//! let new_england = GeoBox::from_edges(47.5, 41.0, -67.0, -73.7);
//! assert!(new_england.contains_point(&boston));
//! ```

pub mod bbox;
pub mod geo;

pub use crate::bbox::GeoBox;
pub use crate::geo::{EARTH_RADIUS_KM, Point};

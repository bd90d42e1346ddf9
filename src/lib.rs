//! Geohash encoding, grid navigation and widening search circles.
//!
//! ```rust
//! use geocircle::{Config, HashCircle, Point, hash};
//!
//! let boston = Point::new(-71.047656, 42.350072);
//! assert_eq!(hash::encode(&boston, 12)?, "drt2zm8ej9eg");
//!
//! // geohash keys and ranges to scan for everything within 10 km
//! let circle = HashCircle::covering(&boston, 10.0, &Config::default())?;
//! let keys = circle.region().to_json()?;
//! # assert!(keys.starts_with('['));
//! # Ok::<(), geocircle::GeoError>(())
//! ```

pub mod circle;
pub mod compute;
pub mod config;
pub mod error;
pub mod hash;
pub mod set;

pub use circle::HashCircle;
pub use config::Config;
pub use error::{GeoError, Result};
pub use hash::{Direction, Neighbors, Quadrant};
pub use set::{GeohashSet, HashEntry};

pub use geocircle_types::{EARTH_RADIUS_KM, GeoBox, Point};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{GeoError, Result};

    pub use crate::{GeoBox, Point};

    pub use crate::hash::{Direction, Quadrant, decode, decode_box, encode, neighbor};

    pub use crate::{Config, GeohashSet, HashCircle, HashEntry};
}

//! Sub-regions of a geohash: halves, quarters and which quadrant a
//! descendant occupies.
//!
//! Child digits of a cell form a 4×8 grid when the cell length is odd
//! (four rows, eight columns) and an 8×4 grid when it is even. Any half
//! or quarter of the cell is therefore one or two contiguous digit ranges,
//! which is what [`GeohashSet`] ranges are built for.

use crate::compute::validation::validate_geohash;
use crate::error::{GeoError, Result};
use crate::hash::codec::{decode_digit, digit_char};
use crate::hash::neighbor::Direction;
use crate::set::GeohashSet;
use smallvec::{SmallVec, smallvec};
use std::fmt;
use std::str::FromStr;

/// Digit ranges selecting part of a cell's children.
type DigitRanges = SmallVec<[(u8, u8); 2]>;

/// One quarter of a geohash cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::NorthWest,
        Quadrant::SouthEast,
        Quadrant::SouthWest,
    ];

    /// The diagonally opposite quadrant.
    pub fn opposite(self) -> Self {
        match self {
            Quadrant::NorthEast => Quadrant::SouthWest,
            Quadrant::NorthWest => Quadrant::SouthEast,
            Quadrant::SouthEast => Quadrant::NorthWest,
            Quadrant::SouthWest => Quadrant::NorthEast,
        }
    }

    /// The north/south side of the quadrant.
    pub fn latitude_side(&self) -> Direction {
        match self {
            Quadrant::NorthEast | Quadrant::NorthWest => Direction::North,
            Quadrant::SouthEast | Quadrant::SouthWest => Direction::South,
        }
    }

    /// The east/west side of the quadrant.
    pub fn longitude_side(&self) -> Direction {
        match self {
            Quadrant::NorthEast | Quadrant::SouthEast => Direction::East,
            Quadrant::NorthWest | Quadrant::SouthWest => Direction::West,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Quadrant::NorthEast => "ne",
            Quadrant::NorthWest => "nw",
            Quadrant::SouthEast => "se",
            Quadrant::SouthWest => "sw",
        }
    }
}

impl FromStr for Quadrant {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ne" | "northeast" => Ok(Quadrant::NorthEast),
            "nw" | "northwest" => Ok(Quadrant::NorthWest),
            "se" | "southeast" => Ok(Quadrant::SouthEast),
            "sw" | "southwest" => Ok(Quadrant::SouthWest),
            _ => Err(GeoError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns which quadrant of the length-`precision` prefix of `hash` the
/// rest of `hash` falls into, or `None` when `hash` has no characters
/// beyond `precision`.
///
/// ```rust
/// use geocircle::hash::{Quadrant, quadrant};
///
/// assert_eq!(quadrant("dqcjqcr8", 4)?, Some(Quadrant::SouthEast));
/// assert_eq!(quadrant("dqcj", 4)?, None);
/// # Ok::<(), geocircle::GeoError>(())
/// ```
pub fn quadrant(hash: &str, precision: usize) -> Result<Option<Quadrant>> {
    validate_geohash(hash)?;
    if precision >= hash.len() {
        return Ok(None);
    }

    let odd = precision % 2 == 1;
    let digit = decode_digit(char::from(hash.as_bytes()[precision]))?;

    // top two bits of the next digit pick the quadrant; which of them is
    // latitude depends on the prefix parity
    let quadrant = match digit / 8 {
        0 => Quadrant::SouthWest,
        1 if odd => Quadrant::SouthEast,
        1 => Quadrant::NorthWest,
        2 if odd => Quadrant::NorthWest,
        2 => Quadrant::SouthEast,
        _ => Quadrant::NorthEast,
    };

    Ok(Some(quadrant))
}

/// Quadrant a hash's last character occupies within its parent.
pub fn parent_quadrant(hash: &str) -> Result<Option<Quadrant>> {
    validate_geohash(hash)?;
    quadrant(hash, hash.len() - 1)
}

fn half_ranges(direction: Direction, odd: bool) -> DigitRanges {
    match (direction, odd) {
        (Direction::North, true) => smallvec![(16, 31)],
        (Direction::North, false) => smallvec![(8, 15), (24, 31)],
        (Direction::South, true) => smallvec![(0, 15)],
        (Direction::South, false) => smallvec![(0, 7), (16, 23)],
        (Direction::East, true) => smallvec![(8, 15), (24, 31)],
        (Direction::East, false) => smallvec![(16, 31)],
        (Direction::West, true) => smallvec![(0, 7), (16, 23)],
        (Direction::West, false) => smallvec![(0, 15)],
    }
}

fn quarter_range(quadrant: Quadrant, odd: bool) -> (u8, u8) {
    match (quadrant, odd) {
        (Quadrant::NorthEast, _) => (24, 31),
        (Quadrant::NorthWest, true) => (16, 23),
        (Quadrant::NorthWest, false) => (8, 15),
        (Quadrant::SouthEast, true) => (8, 15),
        (Quadrant::SouthEast, false) => (16, 23),
        (Quadrant::SouthWest, _) => (0, 7),
    }
}

fn child_set(hash: &str, ranges: &[(u8, u8)]) -> GeohashSet {
    let mut set = GeohashSet::new();
    for &(first, last) in ranges {
        let mut lo = String::with_capacity(hash.len() + 1);
        lo.push_str(hash);
        let mut hi = lo.clone();
        lo.push(digit_char(first));
        hi.push(digit_char(last));
        set.add_range(lo, hi);
    }
    set
}

/// Returns the half of `hash` on the `direction` side, expressed as
/// one-character-longer geohash ranges.
///
/// ```rust
/// use geocircle::HashEntry;
/// use geocircle::hash::{Direction, halve};
///
/// let north = halve("dqcjq", Direction::North)?;
/// assert_eq!(north.export(), &[HashEntry::range("dqcjqh", "dqcjqz")]);
/// # Ok::<(), geocircle::GeoError>(())
/// ```
pub fn halve(hash: &str, direction: Direction) -> Result<GeohashSet> {
    validate_geohash(hash)?;
    Ok(child_set(hash, &half_ranges(direction, hash.len() % 2 == 1)))
}

/// Returns the `quadrant` quarter of `hash` as a single
/// one-character-longer geohash range.
pub fn quarter(hash: &str, quadrant: Quadrant) -> Result<GeohashSet> {
    validate_geohash(hash)?;
    let range = quarter_range(quadrant, hash.len() % 2 == 1);
    Ok(child_set(hash, &[range]))
}

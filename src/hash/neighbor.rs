//! Adjacent geohashes in the four cardinal directions.
//!
//! Neighbors are found by table lookup on the last character. When that
//! character sits on the border of its parent cell the parent is stepped
//! first, so the walk carries towards the root exactly like an addition.
//! Even-length hashes swap the roles of latitude and longitude, which is
//! why the odd tables are reused with their directions rotated.

use crate::compute::validation::validate_geohash;
use crate::error::{GeoError, Result};
use crate::hash::codec::decode_digit;
use std::fmt;
use std::str::FromStr;

const ODD_NORTH_NEIGHBOR: &[u8; 32] = b"238967debc01fg45kmstqrwxuvhjyznp";
const ODD_SOUTH_NEIGHBOR: &[u8; 32] = b"bc01fg45238967deuvhjyznpkmstqrwx";
const ODD_EAST_NEIGHBOR: &[u8; 32] = b"14365h7k9dcfesgujnmqp0r2twvyx8zb";
const ODD_WEST_NEIGHBOR: &[u8; 32] = b"p0r21436x8zb9dcf5h7kjnmqesgutwvy";

const ODD_NORTH_BORDER: &[u8] = b"bcfguvyz";
const ODD_SOUTH_BORDER: &[u8] = b"0145hjnp";
const ODD_EAST_BORDER: &[u8] = b"prxz";
const ODD_WEST_BORDER: &[u8] = b"028b";

/// A cardinal direction on the geohash grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Single-letter form, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "n",
            Direction::South => "s",
            Direction::East => "e",
            Direction::West => "w",
        }
    }

    pub fn is_latitudinal(&self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    /// Neighbor table and border digits for a hash of the given parity.
    fn tables(self, odd: bool) -> (&'static [u8; 32], &'static [u8]) {
        match (self, odd) {
            (Direction::North, true) => (ODD_NORTH_NEIGHBOR, ODD_NORTH_BORDER),
            (Direction::South, true) => (ODD_SOUTH_NEIGHBOR, ODD_SOUTH_BORDER),
            (Direction::East, true) => (ODD_EAST_NEIGHBOR, ODD_EAST_BORDER),
            (Direction::West, true) => (ODD_WEST_NEIGHBOR, ODD_WEST_BORDER),
            (Direction::North, false) => (ODD_EAST_NEIGHBOR, ODD_EAST_BORDER),
            (Direction::South, false) => (ODD_WEST_NEIGHBOR, ODD_WEST_BORDER),
            (Direction::East, false) => (ODD_NORTH_NEIGHBOR, ODD_NORTH_BORDER),
            (Direction::West, false) => (ODD_SOUTH_NEIGHBOR, ODD_SOUTH_BORDER),
        }
    }
}

impl FromStr for Direction {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Direction::North),
            "s" | "south" => Ok(Direction::South),
            "e" | "east" => Ok(Direction::East),
            "w" | "west" => Ok(Direction::West),
            _ => Err(GeoError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the adjacent geohash of the same length in `direction`.
///
/// East and west wrap around the antimeridian. North of the top row and
/// south of the bottom row there is nothing, which yields `None`.
///
/// ```rust
/// use geocircle::hash::{Direction, neighbor};
///
/// assert_eq!(neighbor("dqcjq", Direction::North)?.as_deref(), Some("dqcjw"));
/// assert_eq!(neighbor("b", Direction::North)?, None);
/// assert_eq!(neighbor("b", Direction::West)?.as_deref(), Some("z"));
/// # Ok::<(), geocircle::GeoError>(())
/// ```
pub fn neighbor(hash: &str, direction: Direction) -> Result<Option<String>> {
    validate_geohash(hash)?;
    step(hash, direction)
}

fn step(hash: &str, direction: Direction) -> Result<Option<String>> {
    let precision = hash.len();
    let (table, border) = direction.tables(precision % 2 == 1);
    let (base, last) = hash.split_at(precision - 1);
    let last = last.as_bytes()[0];

    let mut next = if border.contains(&last) {
        if precision > 1 {
            match step(base, direction)? {
                Some(parent) => parent,
                None => return Ok(None),
            }
        } else if direction.is_latitudinal() {
            return Ok(None);
        } else {
            String::with_capacity(precision)
        }
    } else {
        let mut prefix = String::with_capacity(precision);
        prefix.push_str(base);
        prefix
    };

    let value = decode_digit(char::from(last))?;
    next.push(char::from(table[usize::from(value)]));
    Ok(Some(next))
}

/// The four cardinal neighbors of a geohash.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Neighbors {
    pub north: Option<String>,
    pub south: Option<String>,
    /// Always present; longitude wraps.
    pub east: Option<String>,
    /// Always present; longitude wraps.
    pub west: Option<String>,
}

impl Neighbors {
    pub fn get(&self, direction: Direction) -> Option<&str> {
        match direction {
            Direction::North => self.north.as_deref(),
            Direction::South => self.south.as_deref(),
            Direction::East => self.east.as_deref(),
            Direction::West => self.west.as_deref(),
        }
    }

    /// Neighbors that exist, in north, south, east, west order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &str)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.get(direction).map(|hash| (direction, hash)))
    }
}

/// Returns every cardinal neighbor of `hash` at once.
pub fn neighbors(hash: &str) -> Result<Neighbors> {
    validate_geohash(hash)?;
    Ok(Neighbors {
        north: step(hash, Direction::North)?,
        south: step(hash, Direction::South)?,
        east: step(hash, Direction::East)?,
        west: step(hash, Direction::West)?,
    })
}

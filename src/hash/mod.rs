//! Geohash codec and grid navigation.

pub mod codec;
pub mod neighbor;
pub mod region;

pub use codec::{
    ALPHABET, DEFAULT_PRECISION, MAX_PRECISION, contains, decode, decode_box, decode_digit,
    encode, encode_default, encode_digit, increment,
};
pub use neighbor::{Direction, Neighbors, neighbor, neighbors};
pub use region::{Quadrant, halve, parent_quadrant, quadrant, quarter};

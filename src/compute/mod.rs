//! Input validation shared by the codec, sets and circles.

pub mod validation;

//! Error types for geohash encoding, region building and configuration.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeoError>;

#[derive(Debug, Error)]
pub enum GeoError {
    /// A character outside the geohash alphabet.
    #[error("Invalid geohash digit '{0}'")]
    InvalidDigit(char),

    /// An unknown cardinal or quadrant direction.
    #[error("Unsupported geohash direction \"{0}\"")]
    InvalidDirection(String),

    #[error("Invalid geohash precision {precision}: expected 1..={max}")]
    InvalidPrecision { precision: usize, max: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

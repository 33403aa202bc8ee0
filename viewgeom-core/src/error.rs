//! Error types for viewgeom

use thiserror::Error;

/// Main error type for viewgeom operations
///
/// The query kernel itself is total and never produces these; they come from
/// fallible constructors and parsers at the edges of the API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Invalid bounds: min exceeds max on axis {axis}")]
    InvalidBounds { axis: usize },

    #[error("Unknown ease type: {0}")]
    UnknownEaseType(String),
}

/// Result type alias for viewgeom operations
pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

/// Top-level error type for polyedge.
#[derive(Debug, Error)]
pub enum PolyedgeError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    PointFormat(#[from] PointFormatError),
}

/// The raw text could not be interpreted as a point sequence.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("could not parse input as JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error("could not parse input at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
}

/// The parsed value is not a usable point sequence.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("input must be an array of points")]
    NotASequence,

    #[error("at least 2 points are needed to form a polygon, got {count}")]
    TooFewPoints { count: usize },
}

/// A single element of the point sequence is malformed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PointFormatError {
    /// `index` is 1-based.
    #[error("point {index} is invalid: each point needs numeric x and y")]
    InvalidPoint { index: usize },
}

/// Convenience type alias for results using [`PolyedgeError`].
pub type Result<T> = std::result::Result<T, PolyedgeError>;

//! Error taxonomy for board construction and move application.

use thiserror::Error;

use crate::geometry::Coordinate;

/// Errors returned by the rules core.
///
/// Every error is produced before any new board exists, so a failed call
/// never leaves partial state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GoError {
    /// A construction argument was malformed (e.g. a negative board size).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A coordinate fell outside `[0, size)` on either axis.
    #[error("Error Illegal move: {coord} is off a {size}x{size} board")]
    OutOfBounds { coord: Coordinate, size: i32 },
    /// The target intersection already holds a stone.
    #[error("Error Illegal move: point {0} not EMPTY")]
    OccupiedIntersection(Coordinate),
    /// Vertex text such as `D4` could not be parsed.
    #[error("invalid vertex: {0}")]
    InvalidVertex(String),
    /// A board diagram could not be parsed.
    #[error("invalid diagram: {0}")]
    InvalidDiagram(String),
}

pub type Result<T> = std::result::Result<T, GoError>;

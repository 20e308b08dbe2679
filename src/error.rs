use thiserror::Error;

use crate::maze::Coord;

/// Errors raised when a maze invariant is broken or a configuration is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze dimensions {width}x{height} are below the minimum of {min}")]
    InvalidDimensions { width: u8, height: u8, min: u8 },

    #[error("vertex {coord:?} is not part of the {width}x{height} grid")]
    VertexNotFound { coord: Coord, width: u8, height: u8 },

    #[error("representative chain starting at {0:?} never reaches a fixed point")]
    RepresentativeCycle(Coord),

    #[error("candidate edges ran out after {accepted} of {required} tree edges")]
    Disconnected { accepted: usize, required: usize },

    #[error("no predecessor recorded for {0:?} while rebuilding the path")]
    BrokenPredecessorChain(Coord),

    #[error("goal {goal:?} is unreachable from {start:?}")]
    GoalUnreachable { start: Coord, goal: Coord },
}

pub type Result<T> = std::result::Result<T, MazeError>;

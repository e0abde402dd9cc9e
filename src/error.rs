use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graphs::{Capacity, VertexId};

/// Reasons a trip request cannot be answered.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GuideError {
    /// The search ran out of roads before reaching `end`.
    #[error("no path found from {start} to {end}")]
    NoPathFound { start: VertexId, end: VertexId },

    /// The request names a city that is not part of the graph.
    #[error("city {vertex} is not part of the graph")]
    UnknownVertex { vertex: VertexId },

    /// Every vehicle on the widest path only has room for the guide.
    #[error("bottleneck capacity {bottleneck} leaves no seat for tourists")]
    NoSeatsAvailable { bottleneck: Capacity },
}

/// Errors raised while reading a scenario batch. Line numbers start at 1.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read scenarios")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected {expected}, found end of input")]
    UnexpectedEof { line: usize, expected: &'static str },

    #[error("line {line}: `{token}` is not a non-negative integer")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: expected {expected} values, found {found}")]
    WrongTokenCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: city {vertex} is outside 1..={number_of_vertices}")]
    VertexOutOfRange {
        line: usize,
        vertex: VertexId,
        number_of_vertices: u32,
    },

    #[error("line {line}: road capacity must be positive")]
    ZeroCapacity { line: usize },

    #[error("line {line}: scenario declares {number_of_edges} roads but no cities")]
    MissingVertices { line: usize, number_of_edges: u32 },
}

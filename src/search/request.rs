use serde::{Deserialize, Serialize};

use crate::graphs::VertexId;

/// Move `tourists` people from city `start` to city `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    pub start: VertexId,
    pub end: VertexId,
    pub tourists: u32,
}

impl TripRequest {
    pub fn new(start: VertexId, end: VertexId, tourists: u32) -> TripRequest {
        TripRequest {
            start,
            end,
            tourists,
        }
    }
}

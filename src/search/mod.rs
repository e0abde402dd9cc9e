use collections::widest_path_data::WidestPath;
use request::TripRequest;

use crate::{
    error::GuideError,
    graphs::{adjacency_graph::AdjacencyGraph, Capacity, Graph, VertexId},
};

pub mod collections;
pub mod request;
pub mod trips;
pub mod widest_path;

/// Minimum number of trips the guide needs to bring `tourists` people from
/// `start` to `end`.
pub fn solve(
    graph: &dyn Graph,
    start: VertexId,
    end: VertexId,
    tourists: u32,
) -> Result<u32, GuideError> {
    if start == end || tourists == 0 {
        return Ok(0);
    }

    let bottleneck = widest_path::bottleneck(graph, start, end)?;
    trips::minimum_trips(bottleneck, tourists)
}

pub trait WidestPathFinding: Send + Sync {
    fn widest_path(&self, request: &TripRequest) -> Result<WidestPath, GuideError>;

    fn bottleneck(&self, request: &TripRequest) -> Result<Capacity, GuideError>;

    fn minimum_trips(&self, request: &TripRequest) -> Result<u32, GuideError>;
}

impl WidestPathFinding for AdjacencyGraph {
    fn widest_path(&self, request: &TripRequest) -> Result<WidestPath, GuideError> {
        widest_path::widest_path(self, request.start, request.end)
    }

    fn bottleneck(&self, request: &TripRequest) -> Result<Capacity, GuideError> {
        widest_path::bottleneck(self, request.start, request.end)
    }

    fn minimum_trips(&self, request: &TripRequest) -> Result<u32, GuideError> {
        solve(self, request.start, request.end, request.tourists)
    }
}

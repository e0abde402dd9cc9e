use log::{debug, trace};

use super::collections::{
    frontier_queue::{FrontierEntry, FrontierQueue, FrontierQueueBinaryHeap},
    visited_edges::{VisitedEdges, VisitedEdgesHashSet},
    widest_path_data::{WidestPath, WidestPathData, WidestPathDataVec},
};
use crate::{
    error::GuideError,
    graphs::{edge::CanonicalEdge, Capacity, Graph, VertexId},
};

/// Searches the path from `start` to `end` whose narrowest road is as wide
/// as possible and returns that narrowest capacity.
///
/// Works like Dijkstra's algorithm with `min` in place of `+` and the widest
/// frontier entry expanded first, so the first time `end` leaves the
/// frontier its bottleneck is maximal. Every city that leaves the frontier
/// offers all its not yet visited roads; a road is visited at most once,
/// which bounds the frontier to one entry per road.
///
/// The start city starts without any constraint, i.e. `Capacity::MAX`.
/// `data`, `visited` and `queue` are cleared first, so they can be reused
/// across searches on the same graph.
pub fn widest_path_single_pair(
    graph: &dyn Graph,
    data: &mut dyn WidestPathData,
    visited: &mut dyn VisitedEdges,
    queue: &mut dyn FrontierQueue,
    start: VertexId,
    end: VertexId,
) -> Result<Capacity, GuideError> {
    for vertex in [start, end] {
        if !graph.contains(vertex) {
            return Err(GuideError::UnknownVertex { vertex });
        }
    }

    data.clear();
    visited.clear();
    queue.clear();

    data.settle(start, Capacity::MAX, None);
    if start == end {
        return Ok(Capacity::MAX);
    }

    let mut current = FrontierEntry {
        bottleneck: Capacity::MAX,
        vertex: start,
        predecessor: start,
    };
    let mut number_of_pops = 0;

    loop {
        for neighbor in graph.neighbors(current.vertex) {
            let Some(edge) = CanonicalEdge::new(current.vertex, neighbor.vertex()) else {
                continue;
            };
            if visited.visit(edge) {
                continue;
            }

            queue.push(FrontierEntry {
                bottleneck: current.bottleneck.min(neighbor.capacity()),
                vertex: neighbor.vertex(),
                predecessor: current.vertex,
            });
        }

        current = queue.pop().ok_or(GuideError::NoPathFound { start, end })?;
        number_of_pops += 1;
        trace!(
            "popped city {} with bottleneck {}",
            current.vertex,
            current.bottleneck
        );

        data.settle(current.vertex, current.bottleneck, Some(current.predecessor));
        if current.vertex == end {
            debug!(
                "widest path {} -> {} has bottleneck {} after {} pops, {} entries left",
                start,
                end,
                current.bottleneck,
                number_of_pops,
                queue.len()
            );
            return Ok(current.bottleneck);
        }
    }
}

/// Maximum bottleneck capacity over all paths from `start` to `end`.
pub fn bottleneck(graph: &dyn Graph, start: VertexId, end: VertexId) -> Result<Capacity, GuideError> {
    let mut data = WidestPathDataVec::new(graph);
    let mut visited = VisitedEdgesHashSet::new();
    let mut queue = FrontierQueueBinaryHeap::new();

    widest_path_single_pair(graph, &mut data, &mut visited, &mut queue, start, end)
}

/// A path from `start` to `end` realising the maximum bottleneck.
pub fn widest_path(graph: &dyn Graph, start: VertexId, end: VertexId) -> Result<WidestPath, GuideError> {
    let mut data = WidestPathDataVec::new(graph);
    let mut visited = VisitedEdgesHashSet::new();
    let mut queue = FrontierQueueBinaryHeap::new();

    widest_path_single_pair(graph, &mut data, &mut visited, &mut queue, start, end)?;

    data.get_path(end)
        .ok_or(GuideError::NoPathFound { start, end })
}

#[cfg(test)]
mod tests {
    use super::{bottleneck, widest_path, widest_path_single_pair};
    use crate::{
        error::GuideError,
        graphs::{adjacency_graph::AdjacencyGraph, edge::WeightedEdge, path_bottleneck},
        search::collections::{
            frontier_queue::FrontierQueueBinaryHeap, visited_edges::VisitedEdgesHashSet,
            widest_path_data::{WidestPathData, WidestPathDataVec},
        },
    };

    fn graph(number_of_vertices: u32, edges: &[(u32, u32, u32)]) -> AdjacencyGraph {
        let edges: Vec<_> = edges
            .iter()
            .map(|&(tail, head, capacity)| WeightedEdge::new(tail, head, capacity).unwrap())
            .collect();
        AdjacencyGraph::from_edges(number_of_vertices, &edges)
    }

    #[test]
    fn prefers_wider_detour() {
        let graph = graph(4, &[(1, 2, 10), (1, 3, 5), (2, 4, 8), (3, 4, 20)]);

        let path = widest_path(&graph, 1, 4).unwrap();
        assert_eq!(path.bottleneck, 8);
        assert_eq!(path.vertices, vec![1, 2, 4]);
    }

    #[test]
    fn cycle_reaches_city_again_over_better_road() {
        // 3 is first reached over the narrow road 1-3 and later over 1-2-3
        let graph = graph(4, &[(1, 3, 2), (1, 2, 50), (2, 3, 40), (3, 4, 60)]);

        let path = widest_path(&graph, 1, 4).unwrap();
        assert_eq!(path.bottleneck, 40);
        assert_eq!(path.vertices, vec![1, 2, 3, 4]);
        assert_eq!(path_bottleneck(&graph, &path.vertices), Some(40));
    }

    #[test]
    fn unreachable_end_is_reported() {
        let graph = graph(3, &[(1, 2, 5)]);

        assert_eq!(
            bottleneck(&graph, 1, 3),
            Err(GuideError::NoPathFound { start: 1, end: 3 })
        );
    }

    #[test]
    fn unknown_cities_are_reported() {
        let graph = graph(3, &[(1, 2, 5)]);

        assert_eq!(
            bottleneck(&graph, 1, 9),
            Err(GuideError::UnknownVertex { vertex: 9 })
        );
        assert_eq!(
            bottleneck(&graph, 0, 1),
            Err(GuideError::UnknownVertex { vertex: 0 })
        );
    }

    #[test]
    fn start_is_end() {
        let graph = graph(2, &[(1, 2, 5)]);

        let path = widest_path(&graph, 2, 2).unwrap();
        assert_eq!(path.vertices, vec![2]);
        assert_eq!(path.bottleneck, u32::MAX);
    }

    #[test]
    fn each_road_feeds_frontier_once() {
        let graph = graph(
            5,
            &[(1, 2, 3), (2, 3, 3), (3, 1, 3), (3, 4, 3), (4, 2, 3), (4, 5, 1)],
        );
        let mut data = WidestPathDataVec::new(&graph);
        let mut visited = VisitedEdgesHashSet::new();
        let mut queue = FrontierQueueBinaryHeap::new();

        let bottleneck =
            widest_path_single_pair(&graph, &mut data, &mut visited, &mut queue, 1, 5).unwrap();
        assert_eq!(bottleneck, 1);
        assert_eq!(visited.len(), 6);
    }

    #[test]
    fn collections_are_reused_between_searches() {
        let graph = graph(4, &[(1, 2, 10), (1, 3, 5), (2, 4, 8), (3, 4, 20)]);
        let mut data = WidestPathDataVec::new(&graph);
        let mut visited = VisitedEdgesHashSet::new();
        let mut queue = FrontierQueueBinaryHeap::new();

        let first =
            widest_path_single_pair(&graph, &mut data, &mut visited, &mut queue, 1, 4).unwrap();
        assert_eq!(first, 8);

        let second =
            widest_path_single_pair(&graph, &mut data, &mut visited, &mut queue, 3, 2).unwrap();
        assert_eq!(second, 8);
        assert_eq!(data.get_path(2).unwrap().vertices, vec![3, 4, 2]);
        assert_eq!(data.get_bottleneck(1), None);
    }
}

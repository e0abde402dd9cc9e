use serde::{Deserialize, Serialize};

use super::{
    edge::{CanonicalEdge, Neighbor, WeightedEdge},
    Capacity, Graph, VertexId,
};

/// Undirected road network stored as one sorted adjacency list per city.
///
/// City `v` lives at index `v - 1`. Every road is stored at both endpoints.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdjacencyGraph {
    neighbors: Vec<Vec<Neighbor>>,
}

impl AdjacencyGraph {
    pub fn with_vertices(number_of_vertices: u32) -> AdjacencyGraph {
        AdjacencyGraph {
            neighbors: vec![Vec::new(); number_of_vertices as usize],
        }
    }

    pub fn from_edges(number_of_vertices: u32, edges: &[WeightedEdge]) -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::with_vertices(number_of_vertices);
        edges.iter().for_each(|edge| graph.add_edge(edge));
        graph
    }

    /// Adds the road in both directions, growing the graph if an endpoint is
    /// beyond the current vertex count. Roads touching city 0 are dropped.
    ///
    /// Of several roads between the same two cities only the one with the
    /// highest capacity is kept, as no widest path would use the others.
    pub fn add_edge(&mut self, edge: &WeightedEdge) {
        if edge.tail() == 0 || edge.head() == 0 {
            log::warn!("ignoring road {:?}, cities are numbered from 1", edge);
            return;
        }

        let max_endpoint = std::cmp::max(edge.tail(), edge.head()) as usize;
        if max_endpoint > self.neighbors.len() {
            self.neighbors.resize(max_endpoint, Vec::new());
        }

        self.set_directed(edge);
        self.set_directed(&edge.reversed());
    }

    fn set_directed(&mut self, edge: &WeightedEdge) {
        let neighbors = &mut self.neighbors[edge.tail() as usize - 1];

        match neighbors.binary_search_by_key(&edge.head(), |neighbor| neighbor.vertex()) {
            Ok(index) => {
                if edge.capacity() > neighbors[index].capacity() {
                    neighbors[index].set_capacity(edge.capacity());
                }
            }
            Err(index) => neighbors.insert(index, edge.tailless()),
        }
    }

    fn index(&self, vertex: VertexId) -> Option<usize> {
        let index = (vertex as usize).checked_sub(1)?;
        (index < self.neighbors.len()).then_some(index)
    }

    /// Returns a copy of the graph with every capacity mapped through
    /// `scale`.
    pub fn map_capacities(&self, scale: impl Fn(Capacity) -> Capacity) -> AdjacencyGraph {
        AdjacencyGraph {
            neighbors: self
                .neighbors
                .iter()
                .map(|neighbors| {
                    neighbors
                        .iter()
                        .map(|neighbor| Neighbor::new(neighbor.vertex(), scale(neighbor.capacity())))
                        .collect()
                })
                .collect(),
        }
    }

    /// All roads, each listed once with `tail < head`.
    pub fn edges(&self) -> Vec<WeightedEdge> {
        self.vertices()
            .flat_map(|tail| {
                self.neighbors(tail)
                    .iter()
                    .filter(move |neighbor| tail < neighbor.vertex())
                    .filter_map(move |neighbor| neighbor.set_tail(tail))
            })
            .collect()
    }
}

impl Graph for AdjacencyGraph {
    fn number_of_vertices(&self) -> u32 {
        self.neighbors.len() as u32
    }

    fn neighbors(&self, vertex: VertexId) -> &[Neighbor] {
        match self.index(vertex) {
            Some(index) => &self.neighbors[index],
            None => &[],
        }
    }

    fn get_capacity(&self, edge: &CanonicalEdge) -> Option<Capacity> {
        let neighbors = &self.neighbors[self.index(edge.smaller())?];

        let index = neighbors
            .binary_search_by_key(&edge.larger(), |neighbor| neighbor.vertex())
            .ok()?;

        Some(neighbors[index].capacity())
    }
}

#[cfg(test)]
mod tests {
    use super::AdjacencyGraph;
    use crate::graphs::{
        edge::{CanonicalEdge, WeightedEdge},
        is_symmetric, Graph,
    };

    #[test]
    fn roads_are_stored_at_both_endpoints() {
        let mut graph = AdjacencyGraph::with_vertices(3);
        graph.add_edge(&WeightedEdge::new(1, 2, 30).unwrap());
        graph.add_edge(&WeightedEdge::new(3, 2, 20).unwrap());

        assert!(is_symmetric(&graph));
        assert_eq!(graph.number_of_vertices(), 3);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.get_capacity(&CanonicalEdge::new(2, 3).unwrap()), Some(20));
        assert_eq!(graph.get_capacity(&CanonicalEdge::new(1, 3).unwrap()), None);
    }

    #[test]
    fn parallel_roads_keep_highest_capacity() {
        let mut graph = AdjacencyGraph::with_vertices(2);
        graph.add_edge(&WeightedEdge::new(1, 2, 5).unwrap());
        graph.add_edge(&WeightedEdge::new(2, 1, 50).unwrap());
        graph.add_edge(&WeightedEdge::new(1, 2, 10).unwrap());

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.neighbors(1).len(), 1);
        assert_eq!(graph.get_capacity(&CanonicalEdge::new(1, 2).unwrap()), Some(50));
    }

    #[test]
    fn unknown_vertices_have_no_neighbors() {
        let graph = AdjacencyGraph::with_vertices(2);

        assert!(graph.neighbors(0).is_empty());
        assert!(graph.neighbors(3).is_empty());
        assert!(!graph.contains(0));
        assert!(graph.contains(2));
        assert_eq!(graph.get_capacity(&CanonicalEdge::new(0, 1).unwrap()), None);
    }

    #[test]
    fn edges_lists_each_road_once() {
        let edges = vec![
            WeightedEdge::new(1, 2, 10).unwrap(),
            WeightedEdge::new(3, 1, 5).unwrap(),
        ];
        let graph = AdjacencyGraph::from_edges(3, &edges);

        let listed = graph.edges();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|edge| edge.tail() < edge.head()));
        assert_eq!(AdjacencyGraph::from_edges(3, &listed), graph);
    }
}

use edge::{CanonicalEdge, Neighbor};

pub mod adjacency_graph;
pub mod edge;

/// Cities are numbered starting at 1.
pub type VertexId = u32;
pub type Capacity = u32;

pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    /// Number of undirected edges, each road counted once.
    fn number_of_edges(&self) -> u32 {
        self.vertices()
            .map(|vertex| self.neighbors(vertex).len() as u32)
            .sum::<u32>()
            / 2
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(1..=self.number_of_vertices())
    }

    fn contains(&self, vertex: VertexId) -> bool {
        (1..=self.number_of_vertices()).contains(&vertex)
    }

    /// Neighbors of `vertex`. Unknown vertices have no neighbors.
    fn neighbors(&self, vertex: VertexId) -> &[Neighbor];

    fn get_capacity(&self, edge: &CanonicalEdge) -> Option<Capacity>;
}

/// Checks that every road is listed at both of its endpoints with the same
/// capacity.
pub fn is_symmetric(graph: &dyn Graph) -> bool {
    graph.vertices().all(|vertex| {
        graph.neighbors(vertex).iter().all(|neighbor| {
            graph
                .neighbors(neighbor.vertex())
                .iter()
                .any(|back| back.vertex() == vertex && back.capacity() == neighbor.capacity())
        })
    })
}

/// Smallest capacity along `vertices`, or `None` if two consecutive vertices
/// are not connected or the path has fewer than two vertices.
pub fn path_bottleneck(graph: &dyn Graph, vertices: &[VertexId]) -> Option<Capacity> {
    vertices
        .windows(2)
        .map(|pair| graph.get_capacity(&CanonicalEdge::new(pair[0], pair[1])?))
        .try_fold(None, |bottleneck: Option<Capacity>, capacity| {
            let capacity = capacity?;
            Some(Some(bottleneck.map_or(capacity, |b| b.min(capacity))))
        })?
}

use serde::{Deserialize, Serialize};

use crate::graphs::{Capacity, Graph, VertexId};

/// A maximum-bottleneck path between two cities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidestPath {
    pub vertices: Vec<VertexId>,
    pub bottleneck: Capacity,
}

/// Per city state of a widest path search.
pub trait WidestPathData {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    /// Records the first time `vertex` leaves the frontier. Later calls for
    /// the same vertex are ignored and return `false`.
    fn settle(&mut self, vertex: VertexId, bottleneck: Capacity, predecessor: Option<VertexId>)
        -> bool;

    fn get_bottleneck(&self, vertex: VertexId) -> Option<Capacity>;

    fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId>;

    /// Traces predecessors back from `target`. Returns `None` if `target`
    /// was never settled.
    fn get_path(&self, target: VertexId) -> Option<WidestPath> {
        let bottleneck = self.get_bottleneck(target)?;

        let mut vertices = vec![target];
        let mut predecessor = target;
        while let Some(new_predecessor) = self.get_predecessor(predecessor) {
            predecessor = new_predecessor;
            vertices.push(predecessor);
        }
        vertices.reverse();

        Some(WidestPath {
            vertices,
            bottleneck,
        })
    }
}

pub struct WidestPathDataVec {
    predecessors: Vec<VertexId>,
    bottlenecks: Vec<Option<Capacity>>,
}

impl WidestPathDataVec {
    pub fn new(graph: &dyn Graph) -> Self {
        // index 0 stays unused as cities are numbered from 1
        let size = graph.number_of_vertices() as usize + 1;
        WidestPathDataVec {
            predecessors: vec![VertexId::MAX; size],
            bottlenecks: vec![None; size],
        }
    }
}

impl WidestPathData for WidestPathDataVec {
    fn clear(&mut self) {
        self.predecessors.fill(VertexId::MAX);
        self.bottlenecks.fill(None);
    }

    fn settle(
        &mut self,
        vertex: VertexId,
        bottleneck: Capacity,
        predecessor: Option<VertexId>,
    ) -> bool {
        let index = vertex as usize;
        if self.bottlenecks[index].is_some() {
            return false;
        }

        self.bottlenecks[index] = Some(bottleneck);
        self.predecessors[index] = predecessor.unwrap_or(VertexId::MAX);
        true
    }

    fn get_bottleneck(&self, vertex: VertexId) -> Option<Capacity> {
        *self.bottlenecks.get(vertex as usize)?
    }

    fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        let predecessor = *self.predecessors.get(vertex as usize)?;

        if predecessor == VertexId::MAX {
            return None;
        }

        Some(predecessor)
    }
}

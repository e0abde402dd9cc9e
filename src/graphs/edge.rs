use serde::{Deserialize, Serialize};

use super::{Capacity, VertexId};

/// A road between two cities together with the capacity of the vehicles
/// driving it.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct WeightedEdge {
    tail: VertexId,
    head: VertexId,
    capacity: Capacity,
}

impl WeightedEdge {
    pub fn new(tail: VertexId, head: VertexId, capacity: Capacity) -> Option<WeightedEdge> {
        if tail == head {
            return None;
        }

        Some(WeightedEdge {
            tail,
            head,
            capacity,
        })
    }

    pub fn tail(&self) -> VertexId {
        self.tail
    }

    pub fn head(&self) -> VertexId {
        self.head
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn reversed(&self) -> WeightedEdge {
        WeightedEdge {
            tail: self.head,
            head: self.tail,
            capacity: self.capacity,
        }
    }

    pub fn canonical(&self) -> CanonicalEdge {
        CanonicalEdge {
            smaller: self.tail.min(self.head),
            larger: self.tail.max(self.head),
        }
    }

    pub fn tailless(&self) -> Neighbor {
        Neighbor {
            vertex: self.head,
            capacity: self.capacity,
        }
    }
}

/// An adjacency list entry: the city on the other end of a road and the
/// road's capacity.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Neighbor {
    vertex: VertexId,
    capacity: Capacity,
}

impl Neighbor {
    pub fn new(vertex: VertexId, capacity: Capacity) -> Neighbor {
        Neighbor { vertex, capacity }
    }

    pub fn vertex(&self) -> VertexId {
        self.vertex
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn set_capacity(&mut self, capacity: Capacity) {
        self.capacity = capacity;
    }

    pub fn set_tail(&self, tail: VertexId) -> Option<WeightedEdge> {
        WeightedEdge::new(tail, self.vertex, self.capacity)
    }
}

/// Direction independent identity of a road, stored as (smaller, larger).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CanonicalEdge {
    smaller: VertexId,
    larger: VertexId,
}

impl CanonicalEdge {
    pub fn new(a: VertexId, b: VertexId) -> Option<CanonicalEdge> {
        if a == b {
            return None;
        }

        Some(CanonicalEdge {
            smaller: a.min(b),
            larger: a.max(b),
        })
    }

    pub fn smaller(&self) -> VertexId {
        self.smaller
    }

    pub fn larger(&self) -> VertexId {
        self.larger
    }
}

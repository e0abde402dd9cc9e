use std::{cmp::Ordering, collections::BinaryHeap};

use crate::graphs::{Capacity, VertexId};

/// A city reached over some path, together with the path's bottleneck and
/// the city it was reached from.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FrontierEntry {
    pub bottleneck: Capacity,
    pub vertex: VertexId,
    pub predecessor: VertexId,
}

// `BinaryHeap` is a max-heap, so ordering by bottleneck pops the widest entry
// first. Ties fall back to the vertices to keep `Ord` consistent with `Eq`.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bottleneck
            .cmp(&other.bottleneck)
            .then_with(|| other.vertex.cmp(&self.vertex))
            .then_with(|| other.predecessor.cmp(&self.predecessor))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue over frontier entries that always yields the entry with
/// the largest bottleneck.
pub trait FrontierQueue {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    fn push(&mut self, entry: FrontierEntry);

    /// Removes the widest entry, or returns `None` once the frontier is
    /// exhausted.
    fn pop(&mut self) -> Option<FrontierEntry>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Default)]
pub struct FrontierQueueBinaryHeap {
    heap: BinaryHeap<FrontierEntry>,
}

impl FrontierQueueBinaryHeap {
    pub fn new() -> Self {
        FrontierQueueBinaryHeap {
            heap: BinaryHeap::new(),
        }
    }
}

impl FrontierQueue for FrontierQueueBinaryHeap {
    fn clear(&mut self) {
        self.heap.clear();
    }

    fn push(&mut self, entry: FrontierEntry) {
        self.heap.push(entry);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

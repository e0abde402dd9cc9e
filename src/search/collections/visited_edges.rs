use ahash::{HashSet, HashSetExt};

use crate::graphs::edge::CanonicalEdge;

/// Remembers which roads already fed the frontier.
///
/// Tracking roads rather than cities lets a city reached over several paths
/// still hand each of its roads to the frontier exactly once.
pub trait VisitedEdges {
    /// Marks `edge` as visited and returns whether it was visited before.
    fn visit(&mut self, edge: CanonicalEdge) -> bool;

    fn clear(&mut self);
}

#[derive(Clone, Default)]
pub struct VisitedEdgesHashSet {
    visited: HashSet<CanonicalEdge>,
}

impl VisitedEdgesHashSet {
    pub fn new() -> Self {
        VisitedEdgesHashSet {
            visited: HashSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}

impl VisitedEdges for VisitedEdgesHashSet {
    fn visit(&mut self, edge: CanonicalEdge) -> bool {
        !self.visited.insert(edge)
    }

    fn clear(&mut self) {
        self.visited.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{VisitedEdges, VisitedEdgesHashSet};
    use crate::graphs::edge::CanonicalEdge;

    #[test]
    fn both_directions_share_one_mark() {
        let mut visited = VisitedEdgesHashSet::new();

        assert!(!visited.visit(CanonicalEdge::new(1, 2).unwrap()));
        assert!(visited.visit(CanonicalEdge::new(2, 1).unwrap()));
        assert_eq!(visited.len(), 1);
        assert!(!visited.visit(CanonicalEdge::new(1, 3).unwrap()));
        assert_eq!(visited.len(), 2);

        visited.clear();
        assert!(visited.is_empty());
        assert!(!visited.visit(CanonicalEdge::new(1, 2).unwrap()));
    }
}

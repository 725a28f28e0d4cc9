//! Tunables for [`UndirectedGraph`](super::UndirectedGraph).

use serde::{Deserialize, Serialize};

/// How a sweep keeps track of the vertices it has already reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitedStrategy {
    /// Per-vertex flags set during the sweep, then cleared by a second,
    /// mirrored sweep. No auxiliary memory proportional to the vertex count.
    #[default]
    TwoPass,
    /// A bitset owned by the sweep and discarded when it returns.
    /// One pass, at the cost of one bit per registry slot.
    ScopedSet,
}

/// Traversal order used to locate vertices for insertion and deletion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOrder {
    /// Queue-driven, nearest vertices first.
    #[default]
    BreadthFirst,
    /// Stack-driven, one branch to exhaustion before the next.
    DepthFirst,
}

/// Graph configuration, fixed at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Visited bookkeeping used by every search and traversal.
    pub visited: VisitedStrategy,
    /// Lookup order for duplicate detection, adjacency resolution and deletion.
    pub lookup: SearchOrder,
    /// Number of vertex slots reserved up front.
    pub capacity: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_behaviour() {
        let config = GraphConfig::default();
        assert_eq!(config.visited, VisitedStrategy::TwoPass);
        assert_eq!(config.lookup, SearchOrder::BreadthFirst);
        assert_eq!(config.capacity, 0);
    }
}

//! Reachability result types.

use serde::{Deserialize, Serialize};

use plexus_core::types::collections::FxHashSet;
use plexus_core::types::EdgeId;

/// The nodes and edges reachable from a focus node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSet {
    /// Ids of reachable nodes, including the focus node itself.
    pub nodes: FxHashSet<String>,
    /// Ids of every edge traversed from a visited node.
    pub edges: FxHashSet<EdgeId>,
}

impl HighlightSet {
    /// Whether nothing is highlighted.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

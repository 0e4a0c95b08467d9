//! Directed breadth-first reachability from a focus node.

use std::collections::VecDeque;

use plexus_core::types::collections::FxHashSet;

use crate::graph::NetworkGraph;

use super::types::HighlightSet;

/// Collect every node and edge reachable from `start` along edge direction
/// (source to target only).
///
/// The start node is always included, even with no outgoing edges. An edge
/// is recorded the first time it is seen leaving a visited node; targets
/// already visited are not re-expanded, but the edge into them still lands
/// in the result. Each node is dequeued at most once, so traversal
/// terminates on cyclic graphs. Returns `None` when `start` is not in the
/// graph.
pub fn reachable_from(graph: &NetworkGraph, start: &str) -> Option<HighlightSet> {
    let start_idx = graph.node(start)?;

    let mut result = HighlightSet::default();
    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::new();
    queue.push_back(start_idx);

    while let Some(node) = queue.pop_front() {
        if !visited.insert(node) {
            continue;
        }
        if let Some(record) = graph.node_record(node) {
            result.nodes.insert(record.id.clone());
        }
        for (edge, target) in graph.outgoing(node) {
            result.edges.insert(edge.id);
            if !visited.contains(&target) {
                queue.push_back(target);
            }
        }
    }

    Some(result)
}

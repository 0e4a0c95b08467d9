//! Network graph types: nodes, directed edges, id index.

use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::stable_graph::StableGraph;
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};
use serde::{Deserialize, Serialize};

use plexus_core::types::collections::FxHashMap;
use plexus_core::types::EdgeId;

/// A graph vertex identified by an externally supplied string id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
}

/// A directed connection between two nodes.
///
/// Identity is the synthetic sequential `EdgeId`, never the (source, target)
/// pair, so parallel edges between the same pair stay distinct entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub id: EdgeId,
    pub source: String,
    pub target: String,
}

/// The node/edge universe for one loaded graph.
///
/// Nodes are never removed individually; a new edge-bearing load replaces
/// the whole value. That keeps petgraph indexes dense, so node iteration
/// order is first-seen order and `EdgeId` n lives at edge index n.
#[derive(Debug)]
pub struct NetworkGraph {
    /// The underlying petgraph StableGraph.
    pub graph: StableGraph<NodeRecord, EdgeRecord, Directed>,
    /// Map from node id to NodeIndex for O(1) lookup.
    node_index: FxHashMap<String, NodeIndex>,
    /// Next sequential edge index.
    next_edge: u32,
}

impl NetworkGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: FxHashMap::default(),
            next_edge: 0,
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    /// Whether a node id is present.
    pub fn contains_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Fetch-or-create a node, preserving first-seen order.
    pub fn ensure_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(NodeRecord { id: id.to_string() });
        self.node_index.insert(id.to_string(), idx);
        idx
    }

    /// Append a directed edge, creating missing endpoints and allocating the
    /// next sequential edge id.
    pub fn add_edge(&mut self, source: &str, target: &str) -> EdgeId {
        let s = self.ensure_node(source);
        let t = self.ensure_node(target);
        let id = EdgeId::new(self.next_edge);
        self.next_edge += 1;
        self.graph.add_edge(
            s,
            t,
            EdgeRecord {
                id,
                source: source.to_string(),
                target: target.to_string(),
            },
        );
        id
    }

    /// Node record behind an index.
    pub fn node_record(&self, idx: NodeIndex) -> Option<&NodeRecord> {
        self.graph.node_weight(idx)
    }

    /// Node ids in first-seen order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.graph.node_indices().filter_map(|idx| {
            self.graph.node_weight(idx).map(|record| record.id.as_str())
        })
    }

    /// Edge records in insertion (id) order.
    pub fn edges(&self) -> impl Iterator<Item = &EdgeRecord> {
        self.graph.edge_indices().filter_map(|idx| self.graph.edge_weight(idx))
    }

    /// Edge record behind an id.
    pub fn edge_by_id(&self, id: EdgeId) -> Option<&EdgeRecord> {
        let record = self.graph.edge_weight(EdgeIndex::new(id.index() as usize))?;
        (record.id == id).then_some(record)
    }

    /// Outgoing edges of a node as (record, target index) pairs.
    pub fn outgoing(&self, node: NodeIndex) -> impl Iterator<Item = (&EdgeRecord, NodeIndex)> {
        self.graph
            .edges_directed(node, Direction::Outgoing)
            .map(|edge| (edge.weight(), edge.target()))
    }

    /// Number of edges leaving a node.
    pub fn out_degree(&self, node: NodeIndex) -> usize {
        self.graph.edges_directed(node, Direction::Outgoing).count()
    }

    /// Number of edges arriving at a node.
    pub fn in_degree(&self, node: NodeIndex) -> usize {
        self.graph.edges_directed(node, Direction::Incoming).count()
    }
}

impl Default for NetworkGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_are_deduplicated_and_ordered() {
        let mut g = NetworkGraph::new();
        g.add_edge("A", "B");
        g.add_edge("B", "C");
        g.add_edge("A", "C");
        assert_eq!(g.node_count(), 3);
        let ids: Vec<&str> = g.node_ids().collect();
        assert_eq!(ids, ["A", "B", "C"]);
    }

    #[test]
    fn parallel_edges_get_distinct_ids() {
        let mut g = NetworkGraph::new();
        let first = g.add_edge("A", "B");
        let second = g.add_edge("A", "B");
        assert_ne!(first, second);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(first.to_string(), "edge_0");
        assert_eq!(second.to_string(), "edge_1");
    }

    #[test]
    fn edge_lookup_by_id() {
        let mut g = NetworkGraph::new();
        let id = g.add_edge("A", "B");
        let record = g.edge_by_id(id).unwrap();
        assert_eq!(record.source, "A");
        assert_eq!(record.target, "B");
        assert!(g.edge_by_id(EdgeId::new(99)).is_none());
    }

    #[test]
    fn degrees_follow_edge_direction() {
        let mut g = NetworkGraph::new();
        g.add_edge("A", "B");
        g.add_edge("A", "C");
        g.add_edge("B", "C");
        let a = g.node("A").unwrap();
        let c = g.node("C").unwrap();
        assert_eq!(g.out_degree(a), 2);
        assert_eq!(g.in_degree(a), 0);
        assert_eq!(g.out_degree(c), 0);
        assert_eq!(g.in_degree(c), 2);
    }
}

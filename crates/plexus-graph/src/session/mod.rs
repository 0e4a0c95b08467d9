//! Owned session state for the viewer.
//!
//! One `GraphSession` per viewer holds the node/edge universe and the
//! metadata maps. Edge-bearing loads fully replace the graph and the edge
//! metadata; node attributes and the category palette are merged and never
//! cleared (see DESIGN.md for this asymmetry).

use serde::{Deserialize, Serialize};

use plexus_core::constants::DEFAULT_EDGE_WEIGHT;
use plexus_core::types::collections::{FxHashMap, SmallVec4};
use plexus_core::types::EdgeId;

use crate::color::CategoryPalette;
use crate::graph::NetworkGraph;

/// Per-edge metadata captured at ingestion time, keyed by edge id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeMetadata {
    /// Numeric weight. `None` when the column was absent or the field empty;
    /// a present but unparseable field lands as the default of 1.
    pub weight: Option<f64>,
    pub papers: SmallVec4<String>,
    pub organizations: SmallVec4<String>,
    pub organization_names: SmallVec4<String>,
}

impl EdgeMetadata {
    /// Effective numeric weight, defaulting to 1.
    pub fn effective_weight(&self) -> f64 {
        self.weight.unwrap_or(DEFAULT_EDGE_WEIGHT)
    }
}

/// Merged per-node attributes. Each field is first-write-wins across loads,
/// so reloading the same attribute file is idempotent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeAttributes {
    /// Category label (NodeType) used for coloring.
    pub category: Option<String>,
    /// Free-form numeric-or-string weight.
    pub weight: Option<String>,
    pub papers: SmallVec4<String>,
    pub organizations: SmallVec4<String>,
    pub organization_names: SmallVec4<String>,
}

impl NodeAttributes {
    /// Set the category if unset. Empty values never count as a write.
    pub fn set_category_if_unset(&mut self, value: &str) {
        if self.category.is_none() && !value.is_empty() {
            self.category = Some(value.to_string());
        }
    }

    /// Set the weight if unset. Empty values never count as a write.
    pub fn set_weight_if_unset(&mut self, value: &str) {
        if self.weight.is_none() && !value.is_empty() {
            self.weight = Some(value.to_string());
        }
    }

    /// Set the papers list if currently empty.
    pub fn set_papers_if_unset(&mut self, values: SmallVec4<String>) {
        if self.papers.is_empty() && !values.is_empty() {
            self.papers = values;
        }
    }

    /// Set the organizations list if currently empty.
    pub fn set_organizations_if_unset(&mut self, values: SmallVec4<String>) {
        if self.organizations.is_empty() && !values.is_empty() {
            self.organizations = values;
        }
    }

    /// Set the organization-names list if currently empty.
    pub fn set_organization_names_if_unset(&mut self, values: SmallVec4<String>) {
        if self.organization_names.is_empty() && !values.is_empty() {
            self.organization_names = values;
        }
    }
}

/// Process-wide session state: the node/edge universe plus metadata maps.
pub struct GraphSession {
    graph: NetworkGraph,
    edge_meta: FxHashMap<EdgeId, EdgeMetadata>,
    node_meta: FxHashMap<String, NodeAttributes>,
    palette: CategoryPalette,
    data_loaded: bool,
}

impl GraphSession {
    /// Create an empty session over the given palette.
    pub fn new(palette: CategoryPalette) -> Self {
        Self {
            graph: NetworkGraph::new(),
            edge_meta: FxHashMap::default(),
            node_meta: FxHashMap::default(),
            palette,
            data_loaded: false,
        }
    }

    /// The active node/edge universe.
    pub fn graph(&self) -> &NetworkGraph {
        &self.graph
    }

    /// Metadata for an edge, if any was captured.
    pub fn edge_metadata(&self, id: EdgeId) -> Option<&EdgeMetadata> {
        self.edge_meta.get(&id)
    }

    /// Merged attributes for a node id, if any.
    pub fn node_attributes(&self, id: &str) -> Option<&NodeAttributes> {
        self.node_meta.get(id)
    }

    /// Ids with merged attributes (not necessarily present in the graph).
    pub fn attributed_node_ids(&self) -> impl Iterator<Item = &str> {
        self.node_meta.keys().map(String::as_str)
    }

    /// The session's category palette.
    pub fn palette(&self) -> &CategoryPalette {
        &self.palette
    }

    /// Mutable access for category allocation during node ingestion.
    pub fn palette_mut(&mut self) -> &mut CategoryPalette {
        &mut self.palette
    }

    /// Whether an edge-bearing load has completed this session.
    pub fn is_data_loaded(&self) -> bool {
        self.data_loaded
    }

    /// Full replace: install a freshly built universe, discarding the old
    /// graph and edge metadata. Node attributes and the palette survive.
    pub fn replace_graph(
        &mut self,
        graph: NetworkGraph,
        edge_meta: FxHashMap<EdgeId, EdgeMetadata>,
    ) {
        self.graph = graph;
        self.edge_meta = edge_meta;
        self.data_loaded = true;
    }

    /// Fetch-or-create the attribute record for a node id. The node does not
    /// need to exist in the graph.
    pub fn node_attributes_mut(&mut self, id: &str) -> &mut NodeAttributes {
        self.node_meta.entry(id.to_string()).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_clears_edge_meta_but_keeps_node_meta() {
        let mut session = GraphSession::new(CategoryPalette::default());

        let mut graph = NetworkGraph::new();
        let edge = graph.add_edge("A", "B");
        let mut edge_meta = FxHashMap::default();
        edge_meta.insert(edge, EdgeMetadata::default());
        session.replace_graph(graph, edge_meta);
        session
            .node_attributes_mut("A")
            .set_category_if_unset("university");

        let mut fresh = NetworkGraph::new();
        fresh.add_edge("X", "Y");
        session.replace_graph(fresh, FxHashMap::default());

        assert!(session.edge_metadata(edge).is_none());
        assert_eq!(
            session.node_attributes("A").unwrap().category.as_deref(),
            Some("university")
        );
        assert!(session.is_data_loaded());
    }

    #[test]
    fn attribute_fields_are_first_write_wins() {
        let mut attrs = NodeAttributes::default();
        attrs.set_category_if_unset("university");
        attrs.set_category_if_unset("company");
        assert_eq!(attrs.category.as_deref(), Some("university"));

        attrs.set_weight_if_unset("");
        assert_eq!(attrs.weight, None);
        attrs.set_weight_if_unset("3.5");
        attrs.set_weight_if_unset("9");
        assert_eq!(attrs.weight.as_deref(), Some("3.5"));

        attrs.set_papers_if_unset(SmallVec4::from_iter(["p1".to_string()]));
        attrs.set_papers_if_unset(SmallVec4::from_iter(["p2".to_string()]));
        assert_eq!(attrs.papers.as_slice(), ["p1"]);
    }

    #[test]
    fn effective_weight_defaults_to_one() {
        assert_eq!(EdgeMetadata::default().effective_weight(), 1.0);
        let meta = EdgeMetadata {
            weight: Some(2.5),
            ..Default::default()
        };
        assert_eq!(meta.effective_weight(), 2.5);
    }
}

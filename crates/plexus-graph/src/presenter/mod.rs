//! Selection detail panels.
//!
//! Pure formatting: the shell renders the labeled fields however it likes,
//! or serializes the panel to JSON across the UI boundary.

use serde::{Deserialize, Serialize};

use plexus_core::errors::ViewerError;
use plexus_core::types::EdgeId;

use crate::session::GraphSession;

/// One labeled field in a detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailField {
    pub label: String,
    pub value: String,
}

/// A formatted detail panel for a selected node or edge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailPanel {
    pub fields: Vec<DetailField>,
}

impl DetailPanel {
    fn push(&mut self, label: &str, value: impl Into<String>) {
        self.fields.push(DetailField {
            label: label.to_string(),
            value: value.into(),
        });
    }

    /// Value of a labeled field, if present.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
    }

    /// Serialize for the UI shell.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Detail panel for a node: id and degrees, then any merged attributes that
/// are non-empty.
pub fn node_details(session: &GraphSession, node_id: &str) -> Result<DetailPanel, ViewerError> {
    let graph = session.graph();
    let idx = graph
        .node(node_id)
        .ok_or_else(|| ViewerError::UnknownNode(node_id.to_string()))?;

    let mut panel = DetailPanel::default();
    panel.push("Node ID", node_id);
    panel.push("Out-degree", graph.out_degree(idx).to_string());
    panel.push("In-degree", graph.in_degree(idx).to_string());

    if let Some(attrs) = session.node_attributes(node_id) {
        if let Some(category) = &attrs.category {
            panel.push("Node type", category.as_str());
        }
        if let Some(weight) = &attrs.weight {
            panel.push("Node weight", weight.as_str());
        }
        if !attrs.papers.is_empty() {
            panel.push("Affiliated papers", attrs.papers.join(", "));
        }
        if !attrs.organizations.is_empty() {
            panel.push("Affiliated organizations", attrs.organizations.join(", "));
        }
        if !attrs.organization_names.is_empty() {
            panel.push("Organization names", attrs.organization_names.join(", "));
        }
    }
    Ok(panel)
}

/// Detail panel for an edge: id and endpoints, then only the metadata
/// fields that are non-empty.
pub fn edge_details(session: &GraphSession, edge_id: EdgeId) -> Result<DetailPanel, ViewerError> {
    let record = session
        .graph()
        .edge_by_id(edge_id)
        .ok_or_else(|| ViewerError::UnknownEdge(edge_id.to_string()))?;

    let mut panel = DetailPanel::default();
    panel.push("Edge ID", edge_id.to_string());
    panel.push("Source", record.source.as_str());
    panel.push("Target", record.target.as_str());

    if let Some(meta) = session.edge_metadata(edge_id) {
        if let Some(weight) = meta.weight {
            panel.push("Edge weight", weight.to_string());
        }
        if !meta.papers.is_empty() {
            panel.push("Affiliated papers", meta.papers.join(", "));
        }
        if !meta.organizations.is_empty() {
            panel.push("Affiliated organizations", meta.organizations.join(", "));
        }
        if !meta.organization_names.is_empty() {
            panel.push("Organization names", meta.organization_names.join(", "));
        }
    }
    Ok(panel)
}

#[cfg(test)]
mod tests {
    use plexus_core::types::collections::FxHashMap;

    use super::*;
    use crate::color::CategoryPalette;
    use crate::graph::NetworkGraph;
    use crate::session::EdgeMetadata;

    fn session_with_triangle() -> (GraphSession, EdgeId) {
        let mut graph = NetworkGraph::new();
        let first = graph.add_edge("A", "B");
        graph.add_edge("A", "C");
        let mut edge_meta = FxHashMap::default();
        edge_meta.insert(
            first,
            EdgeMetadata {
                weight: Some(2.0),
                papers: ["p1".to_string()].into_iter().collect(),
                ..Default::default()
            },
        );
        let mut session = GraphSession::new(CategoryPalette::default());
        session.replace_graph(graph, edge_meta);
        (session, first)
    }

    #[test]
    fn node_panel_has_id_and_degrees() {
        let (session, _) = session_with_triangle();
        let panel = node_details(&session, "A").unwrap();
        assert_eq!(panel.get("Node ID"), Some("A"));
        assert_eq!(panel.get("Out-degree"), Some("2"));
        assert_eq!(panel.get("In-degree"), Some("0"));
    }

    #[test]
    fn edge_panel_omits_empty_metadata() {
        let (session, first) = session_with_triangle();
        let panel = edge_details(&session, first).unwrap();
        assert_eq!(panel.get("Edge ID"), Some("edge_0"));
        assert_eq!(panel.get("Source"), Some("A"));
        assert_eq!(panel.get("Edge weight"), Some("2"));
        assert_eq!(panel.get("Affiliated papers"), Some("p1"));
        assert_eq!(panel.get("Affiliated organizations"), None);
    }

    #[test]
    fn unknown_ids_are_errors() {
        let (session, _) = session_with_triangle();
        assert!(matches!(
            node_details(&session, "Z"),
            Err(ViewerError::UnknownNode(_))
        ));
        assert!(matches!(
            edge_details(&session, EdgeId::new(99)),
            Err(ViewerError::UnknownEdge(_))
        ));
    }

    #[test]
    fn panel_serializes_to_json() {
        let (session, _) = session_with_triangle();
        let json = node_details(&session, "B").unwrap().to_json().unwrap();
        assert!(json.contains("\"Node ID\""));
        assert!(json.contains("\"B\""));
    }
}

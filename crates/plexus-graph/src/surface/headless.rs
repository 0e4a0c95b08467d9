//! In-memory render surface for tests and headless use.

use plexus_core::types::collections::{FxHashMap, FxHashSet};
use plexus_core::types::EdgeId;

use super::{EdgeDrawAttributes, RenderSurface};

/// An edge as recorded by the headless surface.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessEdge {
    pub id: EdgeId,
    pub source: String,
    pub target: String,
    pub attributes: EdgeDrawAttributes,
}

/// A render surface that records every command in memory.
#[derive(Default)]
pub struct HeadlessSurface {
    nodes: Vec<String>,
    edges: Vec<HeadlessEdge>,
    positions: FxHashMap<String, (f64, f64)>,
    colors: FxHashMap<String, String>,
    highlights: FxHashSet<String>,
}

impl HeadlessSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Node ids in the order they were added.
    pub fn node_ids(&self) -> &[String] {
        &self.nodes
    }

    /// Edges in the order they were added.
    pub fn edges(&self) -> &[HeadlessEdge] {
        &self.edges
    }

    /// Number of nodes on the surface.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges on the surface.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Position of an element, if one was set.
    pub fn position(&self, id: &str) -> Option<(f64, f64)> {
        self.positions.get(id).copied()
    }

    /// Category color of a node, if one is set.
    pub fn color(&self, id: &str) -> Option<&str> {
        self.colors.get(id).map(String::as_str)
    }

    /// Currently highlighted element ids.
    pub fn highlighted(&self) -> &FxHashSet<String> {
        &self.highlights
    }
}

impl RenderSurface for HeadlessSurface {
    fn add_node(&mut self, id: &str) {
        self.nodes.push(id.to_string());
    }

    fn add_edge(
        &mut self,
        id: EdgeId,
        source: &str,
        target: &str,
        attributes: EdgeDrawAttributes,
    ) {
        self.edges.push(HeadlessEdge {
            id,
            source: source.to_string(),
            target: target.to_string(),
            attributes,
        });
    }

    fn remove_all(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.positions.clear();
        self.colors.clear();
        self.highlights.clear();
    }

    fn set_position(&mut self, id: &str, x: f64, y: f64) {
        self.positions.insert(id.to_string(), (x, y));
    }

    fn set_node_color(&mut self, id: &str, color: Option<&str>) {
        match color {
            Some(color) => {
                self.colors.insert(id.to_string(), color.to_string());
            }
            None => {
                self.colors.remove(id);
            }
        }
    }

    fn add_highlight_mark(&mut self, id: &str) {
        self.highlights.insert(id.to_string());
    }

    fn remove_highlight_mark(&mut self, id: &str) {
        self.highlights.remove(id);
    }

    fn outgoing_edges(&self, node_id: &str) -> Vec<(EdgeId, String)> {
        self.edges
            .iter()
            .filter(|edge| edge.source == node_id)
            .map(|edge| (edge.id, edge.target.clone()))
            .collect()
    }

    fn in_degree(&self, node_id: &str) -> usize {
        self.edges.iter().filter(|edge| edge.target == node_id).count()
    }

    fn out_degree(&self, node_id: &str) -> usize {
        self.edges.iter().filter(|edge| edge.source == node_id).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_are_idempotent() {
        let mut surface = HeadlessSurface::new();
        surface.add_node("A");
        surface.add_highlight_mark("A");
        surface.add_highlight_mark("A");
        assert_eq!(surface.highlighted().len(), 1);
        surface.remove_highlight_mark("A");
        surface.remove_highlight_mark("A");
        assert!(surface.highlighted().is_empty());
    }

    #[test]
    fn remove_all_clears_everything() {
        let mut surface = HeadlessSurface::new();
        surface.add_node("A");
        surface.add_edge(EdgeId::new(0), "A", "B", EdgeDrawAttributes::default());
        surface.set_position("A", 1.0, 2.0);
        surface.set_node_color("A", Some("#ff0000"));
        surface.add_highlight_mark("A");

        surface.remove_all();
        assert_eq!(surface.node_count(), 0);
        assert_eq!(surface.edge_count(), 0);
        assert!(surface.position("A").is_none());
        assert!(surface.color("A").is_none());
        assert!(surface.highlighted().is_empty());
    }

    #[test]
    fn degree_queries_follow_direction() {
        let mut surface = HeadlessSurface::new();
        surface.add_edge(EdgeId::new(0), "A", "B", EdgeDrawAttributes::default());
        surface.add_edge(EdgeId::new(1), "A", "C", EdgeDrawAttributes::default());
        assert_eq!(surface.out_degree("A"), 2);
        assert_eq!(surface.in_degree("A"), 0);
        assert_eq!(surface.in_degree("B"), 1);
        let outgoing = surface.outgoing_edges("A");
        assert_eq!(outgoing.len(), 2);
        assert_eq!(outgoing[0], (EdgeId::new(0), "B".to_string()));
    }
}

//! Render-surface contract and the headless implementation.
//!
//! The drawing library behind the viewer (canvas, DOM, whatever the shell
//! embeds) is modeled as a narrow collaborator: element and mark commands
//! in, simple topology queries out. No error crosses this boundary.

mod headless;

use serde::{Deserialize, Serialize};

use plexus_core::types::EdgeId;

pub use headless::{HeadlessEdge, HeadlessSurface};

/// Attributes attached to an edge when it is added to the surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeDrawAttributes {
    /// Display weight, when the source data carried one.
    pub weight: Option<f64>,
}

/// The external drawing collaborator.
pub trait RenderSurface {
    fn add_node(&mut self, id: &str);
    fn add_edge(&mut self, id: EdgeId, source: &str, target: &str, attributes: EdgeDrawAttributes);
    /// Remove every node, edge, and mark from the surface.
    fn remove_all(&mut self);
    fn set_position(&mut self, id: &str, x: f64, y: f64);
    /// Set a category color for a node; `None` resets to the default style.
    fn set_node_color(&mut self, id: &str, color: Option<&str>);
    fn add_highlight_mark(&mut self, id: &str);
    fn remove_highlight_mark(&mut self, id: &str);

    /// Outgoing edges of a node as (edge id, target id) pairs.
    fn outgoing_edges(&self, node_id: &str) -> Vec<(EdgeId, String)>;
    fn in_degree(&self, node_id: &str) -> usize;
    fn out_degree(&self, node_id: &str) -> usize;
}

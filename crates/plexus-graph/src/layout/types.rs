//! Layout hand-off types.

use serde::{Deserialize, Serialize};

use plexus_core::errors::LayoutError;

/// A node handed to the layout engine, with nominal dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode {
    pub id: String,
    pub width: f64,
    pub height: f64,
}

/// A (source, target) pair handed to the layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutEdge {
    pub source: String,
    pub target: String,
}

/// A computed node position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

/// External layout collaborator. No layout algorithm lives in this
/// repository; engines wrap whatever library the shell embeds.
pub trait LayoutEngine {
    /// Engine name for logs and messages.
    fn name(&self) -> &'static str;

    /// Compute a position for every node.
    fn compute(
        &self,
        nodes: &[LayoutNode],
        edges: &[LayoutEdge],
    ) -> Result<Vec<NodePosition>, LayoutError>;
}

/// Which engine ended up positioning the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutOutcome {
    Primary,
    Fallback,
    /// Both engines failed; positions were left as they were.
    Unchanged,
}

//! Layout-engine contract and fallback policy.

mod apply;
mod types;

pub use apply::apply_with_fallback;
pub use types::{LayoutEdge, LayoutEngine, LayoutNode, LayoutOutcome, NodePosition};

//! Graph data ingestion.
//!
//! One configurable routine covers both edge-bearing file shapes (combined
//! and split edge files differ only in required columns); node-attribute
//! files merge instead of replacing. Ingestion stages its result and commits
//! nothing on failure.

mod engine;
mod node_attrs;
mod schema;

pub use engine::{build_edge_graph, GraphBuild, IngestStats};
pub use node_attrs::{merge_node_attributes, NodeMergeStats};
pub use schema::IngestMode;

//! plexus-graph: the engine behind the Plexus network-graph viewer.
//!
//! This crate turns delimited text into a directed graph and drives an
//! abstract render surface:
//! - Tabular: delimited-line, list-field, and header parsing
//! - Ingest: combined and split-file graph ingestion, node-attribute merge
//! - Graph: the node/edge universe on petgraph
//! - Color: category palette assignment and style commits
//! - Reachability: directed BFS highlighting
//! - Surface: render-surface contract plus a headless implementation
//! - Layout: layout-engine contract with fallback policy
//! - Session: owned session state with replace/merge rules
//! - Presenter: selection detail panels
//! - Viewer: the controller wiring triggers to state and surface

pub mod color;
pub mod graph;
pub mod ingest;
pub mod layout;
pub mod presenter;
pub mod reachability;
pub mod session;
pub mod surface;
pub mod tabular;
pub mod viewer;

pub use color::{apply_styles, CategoryPalette};
pub use graph::{EdgeRecord, NetworkGraph, NodeRecord};
pub use ingest::{
    build_edge_graph, merge_node_attributes, GraphBuild, IngestMode, IngestStats, NodeMergeStats,
};
pub use layout::{
    apply_with_fallback, LayoutEdge, LayoutEngine, LayoutNode, LayoutOutcome, NodePosition,
};
pub use presenter::{edge_details, node_details, DetailField, DetailPanel};
pub use reachability::{reachable_from, HighlightSet};
pub use session::{EdgeMetadata, GraphSession, NodeAttributes};
pub use surface::{EdgeDrawAttributes, HeadlessEdge, HeadlessSurface, RenderSurface};
pub use viewer::Viewer;

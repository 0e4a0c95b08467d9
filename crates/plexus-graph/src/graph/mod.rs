//! The node/edge universe on petgraph.

mod types;

pub use types::{EdgeRecord, NetworkGraph, NodeRecord};

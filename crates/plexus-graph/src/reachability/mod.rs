//! Reachability highlighting: directed BFS from a focus node.

mod bfs;
mod types;

pub use bfs::reachable_from;
pub use types::HighlightSet;

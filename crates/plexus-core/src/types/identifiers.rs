//! Identifier types for graph elements.
//!
//! Node identity is externally supplied and stays a `String`. Edges get a
//! synthetic sequential identity assigned at ingestion time, independent of
//! their (source, target) pair, so parallel edges remain distinct entities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::EDGE_ID_PREFIX;

/// Sequential edge identifier, rendered as `edge_<n>`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct EdgeId(u32);

impl EdgeId {
    /// Create an edge id from its sequential index.
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// The sequential index behind this id.
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{EDGE_ID_PREFIX}{}", self.0)
    }
}

impl From<EdgeId> for String {
    fn from(id: EdgeId) -> Self {
        id.to_string()
    }
}

/// Error returned when a string is not a valid `edge_<n>` identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid edge id: {0:?}")]
pub struct ParseEdgeIdError(pub String);

impl FromStr for EdgeId {
    type Err = ParseEdgeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(EDGE_ID_PREFIX)
            .and_then(|n| n.parse().ok())
            .map(EdgeId)
            .ok_or_else(|| ParseEdgeIdError(s.to_string()))
    }
}

impl TryFrom<String> for EdgeId {
    type Error = ParseEdgeIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

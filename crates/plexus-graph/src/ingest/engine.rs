//! Edge-bearing ingestion: one row pipeline, two column schemas.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use plexus_core::constants::DEFAULT_EDGE_WEIGHT;
use plexus_core::errors::IngestError;
use plexus_core::events::{
    EventDispatcher, LoadSource, Message, MessageEvent, RowSkipReason, RowSkippedEvent,
};
use plexus_core::types::collections::{FxHashMap, SmallVec4};
use plexus_core::types::EdgeId;

use crate::graph::NetworkGraph;
use crate::session::EdgeMetadata;
use crate::tabular::{parse_delimited_line, parse_list_field, Header};

use super::schema::{EdgeColumns, IngestMode};

/// Counters from one edge-bearing ingestion pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestStats {
    pub nodes: usize,
    pub edges: usize,
    pub rows_skipped: usize,
}

/// Staged result of a successful edge-bearing ingestion.
///
/// Built off to the side and committed to the session only once the whole
/// file parsed; a failed ingestion never mutates prior state.
#[derive(Debug)]
pub struct GraphBuild {
    pub graph: NetworkGraph,
    pub edge_meta: FxHashMap<EdgeId, EdgeMetadata>,
    pub stats: IngestStats,
}

/// Parse edge-bearing text into a staged graph build.
///
/// Per data row: blank lines are ignored, short rows are skipped with a
/// warning, rows whose source or target trims to empty are skipped, and
/// everything else registers its endpoints (first-seen order) and appends
/// one edge under a fresh sequential id. Duplicate (source, target) pairs
/// are preserved as distinct edges.
pub fn build_edge_graph(
    text: &str,
    mode: IngestMode,
    source_kind: LoadSource,
    events: &EventDispatcher,
) -> Result<GraphBuild, IngestError> {
    let lines: Vec<&str> = text.trim().lines().collect();
    if lines.len() < 2 {
        return Err(IngestError::EmptyInput);
    }

    let header = Header::parse(lines[0]);
    let columns = EdgeColumns::resolve(&header, mode)?;

    let mut graph = NetworkGraph::new();
    let mut edge_meta: FxHashMap<EdgeId, EdgeMetadata> = FxHashMap::default();
    let mut rows_skipped = 0usize;
    let mut rows_seen = 0usize;

    for (i, raw) in lines.iter().enumerate().skip(1) {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        rows_seen += 1;
        let file_line = i + 1;

        let fields = parse_delimited_line(line);
        if fields.len() < columns.min_fields {
            rows_skipped += 1;
            warn!(line = file_line, fields = fields.len(), "row is missing required fields, skipping");
            events.emit_row_skipped(&RowSkippedEvent {
                source: source_kind,
                line: file_line,
                reason: RowSkipReason::TooShort,
            });
            events.emit_message(&MessageEvent {
                message: Message::info(format!("Warning: row {file_line} is missing data")),
            });
            continue;
        }

        let source = fields[columns.source].trim();
        let target = fields[columns.target].trim();
        if source.is_empty() || target.is_empty() {
            rows_skipped += 1;
            debug!(line = file_line, "row has an empty source or target id, skipping");
            events.emit_row_skipped(&RowSkippedEvent {
                source: source_kind,
                line: file_line,
                reason: RowSkipReason::EmptyId,
            });
            continue;
        }

        let edge_id = graph.add_edge(source, target);
        edge_meta.insert(
            edge_id,
            EdgeMetadata {
                weight: parse_weight(&fields, columns.weight),
                papers: list_at(&fields, columns.papers),
                organizations: list_at(&fields, columns.organizations),
                organization_names: list_at(&fields, columns.organization_names),
            },
        );
    }

    if graph.node_count() == 0 {
        return Err(IngestError::NoValidRows { rows_seen });
    }

    let stats = IngestStats {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        rows_skipped,
    };
    debug!(
        nodes = stats.nodes,
        edges = stats.edges,
        rows_skipped = stats.rows_skipped,
        "edge ingestion staged"
    );

    Ok(GraphBuild {
        graph,
        edge_meta,
        stats,
    })
}

/// Weight cell for a row: `None` when the column is absent or the field is
/// empty; a present but unparseable value defaults to 1.
fn parse_weight(fields: &[String], idx: Option<usize>) -> Option<f64> {
    let raw = idx.and_then(|i| fields.get(i))?.trim();
    if raw.is_empty() {
        return None;
    }
    Some(raw.parse::<f64>().unwrap_or(DEFAULT_EDGE_WEIGHT))
}

fn list_at(fields: &[String], idx: Option<usize>) -> SmallVec4<String> {
    idx.and_then(|i| fields.get(i))
        .map(|field| parse_list_field(field))
        .unwrap_or_default()
}

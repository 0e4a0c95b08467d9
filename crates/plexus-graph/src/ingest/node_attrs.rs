//! Node-attribute ingestion: merge-on-load, first-write-wins per field.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use plexus_core::errors::IngestError;
use plexus_core::events::{
    EventDispatcher, LoadSource, Message, MessageEvent, RowSkipReason, RowSkippedEvent,
};

use crate::session::GraphSession;
use crate::tabular::{parse_delimited_line, parse_list_field, Header};

use super::schema::NodeColumns;

/// Counters from one node-attribute merge pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeMergeStats {
    pub rows_merged: usize,
    pub rows_skipped: usize,
}

/// Merge a node-attribute file into the session.
///
/// Each row fetch-or-creates the attribute record for its `Node` id (the
/// node does not need to exist in the graph) and sets each present field
/// only if it is still unset, so reloading the same file is idempotent.
/// Newly observed categories get a palette color here; the node-to-color
/// association is committed later by `apply_styles`.
pub fn merge_node_attributes(
    text: &str,
    session: &mut GraphSession,
    events: &EventDispatcher,
) -> Result<NodeMergeStats, IngestError> {
    let lines: Vec<&str> = text.trim().lines().collect();
    if lines.len() < 2 {
        return Err(IngestError::EmptyInput);
    }

    let header = Header::parse(lines[0]);
    let columns = NodeColumns::resolve(&header)?;

    let mut stats = NodeMergeStats::default();

    for (i, raw) in lines.iter().enumerate().skip(1) {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let file_line = i + 1;

        let fields = parse_delimited_line(line);
        if fields.len() < columns.min_fields {
            stats.rows_skipped += 1;
            warn!(line = file_line, "row is missing the node id field, skipping");
            events.emit_row_skipped(&RowSkippedEvent {
                source: LoadSource::NodeFile,
                line: file_line,
                reason: RowSkipReason::TooShort,
            });
            events.emit_message(&MessageEvent {
                message: Message::info(format!("Warning: row {file_line} is missing data")),
            });
            continue;
        }

        let id = fields[columns.node].trim();
        if id.is_empty() {
            stats.rows_skipped += 1;
            debug!(line = file_line, "row has an empty node id, skipping");
            events.emit_row_skipped(&RowSkippedEvent {
                source: LoadSource::NodeFile,
                line: file_line,
                reason: RowSkipReason::EmptyId,
            });
            continue;
        }

        let category = cell(&fields, columns.node_type);
        if let Some(category) = category {
            // Allocation is per label, not per node, so reloads never shift
            // the palette.
            session.palette_mut().color_for(category);
        }

        let weight = cell(&fields, columns.weight).map(str::to_string);
        let papers = cell(&fields, columns.papers).map(parse_list_field);
        let organizations = cell(&fields, columns.organizations).map(parse_list_field);
        let organization_names = cell(&fields, columns.organization_names).map(parse_list_field);
        let category = category.map(str::to_string);

        let attrs = session.node_attributes_mut(id);
        if let Some(category) = category {
            attrs.set_category_if_unset(&category);
        }
        if let Some(weight) = weight {
            attrs.set_weight_if_unset(&weight);
        }
        if let Some(papers) = papers {
            attrs.set_papers_if_unset(papers);
        }
        if let Some(organizations) = organizations {
            attrs.set_organizations_if_unset(organizations);
        }
        if let Some(organization_names) = organization_names {
            attrs.set_organization_names_if_unset(organization_names);
        }
        stats.rows_merged += 1;
    }

    debug!(
        rows_merged = stats.rows_merged,
        rows_skipped = stats.rows_skipped,
        "node attributes merged"
    );
    Ok(stats)
}

/// A trimmed, non-empty cell at an optional column index.
fn cell(fields: &[String], idx: Option<usize>) -> Option<&str> {
    let raw = idx.and_then(|i| fields.get(i))?.trim();
    (!raw.is_empty()).then_some(raw)
}

//! Multi-value field parsing.

use plexus_core::constants::LIST_FIELD_SEPARATOR;
use plexus_core::types::collections::SmallVec4;

/// Split a multi-value field on `|`, trimming each piece and dropping
/// empty ones. Empty or absent input yields an empty list.
pub fn parse_list_field(raw: &str) -> SmallVec4<String> {
    raw.split(LIST_FIELD_SEPARATOR)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

//! Category color assignment.

use plexus_core::constants::CATEGORY_PALETTE;
use plexus_core::types::collections::FxHashMap;

/// Stable first-seen-order color assignment for node categories.
///
/// Append-only for the lifetime of a session: once a category has a color
/// it is never reassigned, and colors cycle when categories outnumber the
/// palette.
pub struct CategoryPalette {
    palette: Vec<String>,
    assigned: FxHashMap<String, usize>,
}

impl CategoryPalette {
    /// Create a palette over the given colors; an empty list falls back to
    /// the built-in palette.
    pub fn new(palette: Vec<String>) -> Self {
        let palette = if palette.is_empty() {
            CATEGORY_PALETTE.iter().map(|c| (*c).to_string()).collect()
        } else {
            palette
        };
        Self {
            palette,
            assigned: FxHashMap::default(),
        }
    }

    /// Color for a category, assigning the next palette slot on first sight.
    pub fn color_for(&mut self, category: &str) -> &str {
        let next = self.assigned.len() % self.palette.len();
        let slot = *self
            .assigned
            .entry(category.to_string())
            .or_insert(next);
        &self.palette[slot]
    }

    /// Color for an already-assigned category.
    pub fn get(&self, category: &str) -> Option<&str> {
        self.assigned
            .get(category)
            .map(|&slot| self.palette[slot].as_str())
    }

    /// Number of categories assigned so far.
    pub fn assigned_count(&self) -> usize {
        self.assigned.len()
    }
}

impl Default for CategoryPalette {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

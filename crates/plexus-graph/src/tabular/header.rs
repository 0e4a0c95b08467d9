//! Header-row parsing and column resolution.

use super::line::parse_delimited_line;

/// The parsed header row of a delimited file.
#[derive(Debug, Clone)]
pub struct Header {
    columns: Vec<String>,
}

impl Header {
    /// Parse a header row, trimming each column name.
    pub fn parse(line: &str) -> Self {
        let columns = parse_delimited_line(line)
            .iter()
            .map(|c| c.trim().to_string())
            .collect();
        Self { columns }
    }

    /// Index of an exactly-named column.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Index of the first present alias (singular/plural header variants).
    pub fn index_of_any(&self, names: &[&str]) -> Option<usize> {
        names.iter().find_map(|name| self.index_of(name))
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the header row had no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

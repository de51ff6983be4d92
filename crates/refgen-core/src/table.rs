//! Core table type for one parsed balance CSV

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A parsed table from a single CSV source.
///
/// Cells are kept verbatim as strings: the renderer inserts them into the
/// document untouched, so no trimming or numeric parsing happens here.
/// Rows are stored exactly as read; short or over-wide rows are a renderer
/// concern, not a table invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Column names from the header row
    pub header: Vec<String>,
    /// Row data
    pub rows: Vec<Vec<String>>,
    /// Source file path
    pub source_path: PathBuf,
}

impl Table {
    /// Get the number of header columns
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Get the number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

//! Table types.

use super::{Paragraph, StructuralElement};
use serde::{Deserialize, Serialize};

/// A table structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    #[serde(default)]
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on the first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.cells.len()).unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A table row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    #[serde(default)]
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a row from its cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }
}

/// A table cell.
///
/// Cell content is a full structural-element sequence, though only a
/// restricted subset of formatting survives Markdown table cells.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableCell {
    /// Content of the cell
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

impl TableCell {
    /// Create a cell from its content.
    pub fn new(content: Vec<StructuralElement>) -> Self {
        Self { content }
    }

    /// Create a cell holding a single plain-text paragraph.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![StructuralElement::Paragraph(Paragraph::with_text(text))],
        }
    }
}

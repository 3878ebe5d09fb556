//! Parsing statistics and result structures

use crate::app::models::CatalogRow;

/// Result of parsing one OCAT response body
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed and typed data rows
    pub rows: Vec<CatalogRow>,

    /// Statistics collected during parsing
    pub stats: ParseStats,
}

/// Statistics about one parse pass
#[derive(Debug, Clone, Default)]
pub struct ParseStats {
    /// Physical lines in the response body
    pub total_lines: usize,

    /// Data rows parsed (header and separator lines excluded)
    pub rows_parsed: usize,

    /// Columns in the table
    pub columns: usize,

    /// Columns with a declared target type
    pub typed_columns: usize,

    /// Cells holding the service's null marker
    pub null_cells: usize,
}

impl ParseStats {
    /// Create new empty parse statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// One-line human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "{} rows, {} columns ({} typed), {} null cells",
            self.rows_parsed, self.columns, self.typed_columns, self.null_cells
        )
    }
}

//! Core OCAT response parser
//!
//! Orchestrates parsing of the tab-delimited text the catalog service
//! returns: the column-name row, the separator/units row, and the data
//! rows from the third line onward.

use tracing::{debug, warn};

use super::header::TableHeader;
use super::record_parser::parse_catalog_record;
use super::stats::{ParseResult, ParseStats};
use super::typing::TypingTable;
use crate::constants::HEADER_LINE_COUNT;
use crate::{Error, Result};

/// Parser for OCAT tab-delimited text responses
///
/// Holds the typing table applied to every parsed cell. Parsing is a pure
/// function of the response body; an empty table is reported as zero rows,
/// not an error, so the caller can attach its query criteria to the
/// empty-result signal.
#[derive(Debug, Clone)]
pub struct OcatTableParser {
    typing: TypingTable,
}

impl OcatTableParser {
    /// Create a parser with the standard typing table
    pub fn new() -> Self {
        Self {
            typing: TypingTable::standard(),
        }
    }

    /// Create a parser with a caller-supplied typing table
    pub fn with_typing(typing: TypingTable) -> Self {
        Self { typing }
    }

    /// The typing table this parser applies
    pub fn typing(&self) -> &TypingTable {
        &self.typing
    }

    /// Parse a full response body into typed rows
    ///
    /// Fails without producing any rows if the header is malformed, a row
    /// is ragged, or a declared column holds an unconvertible value.
    pub fn parse(&self, body: &str) -> Result<ParseResult> {
        // The service terminates lines with \r\n; strip the carriage return
        // along with line splitting.
        let lines: Vec<&str> = body.lines().map(|l| l.trim_end_matches('\r')).collect();

        if lines.len() < HEADER_LINE_COUNT {
            return Err(Error::table_format(format!(
                "response has {} lines, expected at least the {} header lines",
                lines.len(),
                HEADER_LINE_COUNT
            )));
        }

        let header = TableHeader::parse(lines[0])?;
        debug!(
            "Parsed response header: {} columns, OBSID at index {}",
            header.column_count(),
            header.obsid_index
        );

        let mut stats = ParseStats::new();
        stats.total_lines = lines.len();
        stats.columns = header.column_count();
        stats.typed_columns = header
            .columns
            .iter()
            .filter(|name| self.typing.is_declared(name))
            .count();

        let mut rows = Vec::new();
        for line in &lines[HEADER_LINE_COUNT..] {
            if line.trim().is_empty() {
                continue;
            }
            let row = parse_catalog_record(line, &header, &self.typing)?;
            stats.null_cells += header
                .columns
                .iter()
                .filter_map(|name| row.field(name))
                .filter(|field| field.value.is_null())
                .count();
            rows.push(row);
        }
        stats.rows_parsed = rows.len();

        if rows.is_empty() {
            warn!("Response parsed to zero data rows");
        } else {
            debug!("Parsed response: {}", stats.summary());
        }

        Ok(ParseResult { rows, stats })
    }
}

impl Default for OcatTableParser {
    fn default() -> Self {
        Self::new()
    }
}

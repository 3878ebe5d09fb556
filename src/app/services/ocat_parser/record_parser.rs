//! Individual data-row parsing
//!
//! Turns one tab-delimited data line into a [`CatalogRow`], applying the
//! typing table to every cell and extracting the observation identifier.

use super::header::TableHeader;
use super::typing::TypingTable;
use crate::app::models::CatalogRow;
use crate::constants::FIELD_DELIMITER;
use crate::{Error, Result};
use std::collections::HashMap;

/// Parse one data line into a catalog row
///
/// The cell count must match the header's column count; the wire format
/// has no quoting, so a ragged row means the response is corrupt rather
/// than a value containing the delimiter.
pub fn parse_catalog_record(
    line: &str,
    header: &TableHeader,
    typing: &TypingTable,
) -> Result<CatalogRow> {
    let cells: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    if cells.len() != header.column_count() {
        return Err(Error::table_format(format!(
            "data row has {} fields, expected {}",
            cells.len(),
            header.column_count()
        )));
    }

    let obsid = cells[header.obsid_index].trim();
    if obsid.is_empty() {
        return Err(Error::table_format("data row has an empty OBSID"));
    }

    let mut fields = HashMap::with_capacity(header.column_count());
    for (name, raw) in header.columns.iter().zip(&cells) {
        let field = typing.coerce(name, raw)?;
        fields.insert(name.clone(), field);
    }

    Ok(CatalogRow::new(
        obsid.to_string(),
        header.columns.clone(),
        fields,
    ))
}

//! OCAT response header parsing
//!
//! The first physical line of a response names the columns; the second is
//! a separator/units row that carries no data. This module parses the
//! column-name row into an indexable header.

use crate::constants::{FIELD_DELIMITER, OBSID_COLUMN};
use crate::{Error, Result};
use std::collections::HashMap;

/// Parsed column-name row of an OCAT response
#[derive(Debug, Clone)]
pub struct TableHeader {
    /// Column names in service order, uppercased
    pub columns: Vec<String>,

    /// Column name to position map
    pub name_to_index: HashMap<String, usize>,

    /// Position of the `OBSID` column
    pub obsid_index: usize,
}

impl TableHeader {
    /// Parse the column-name row
    ///
    /// Column names are uppercased so lookups share the row accessors'
    /// case convention. A response without an `OBSID` column cannot be
    /// keyed into the cache and is rejected as malformed.
    pub fn parse(line: &str) -> Result<Self> {
        let columns: Vec<String> = line
            .split(FIELD_DELIMITER)
            .map(|name| name.trim().to_uppercase())
            .collect();

        if columns.iter().all(|name| name.is_empty()) {
            return Err(Error::table_format("column-name row is empty"));
        }

        let name_to_index: HashMap<String, usize> = columns
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), index))
            .collect();

        let obsid_index = *name_to_index
            .get(OBSID_COLUMN)
            .ok_or_else(|| Error::table_format("response table has no OBSID column"))?;

        Ok(Self {
            columns,
            name_to_index,
            obsid_index,
        })
    }

    /// Position of a column by name, if present
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(&name.to_uppercase()).copied()
    }

    /// Number of columns in the table
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

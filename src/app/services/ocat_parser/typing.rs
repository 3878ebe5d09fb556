//! Column typing table for OCAT responses
//!
//! The catalog service returns every cell as text. This module declares,
//! for the known numeric columns, the target type to coerce raw values
//! into and the physical unit to attach to the coerced column. The table
//! is built once and passed by reference through the parse pipeline.

use crate::app::models::{Field, FieldValue, Unit};
use crate::constants::NULL_MARKERS;
use crate::{Error, Result};
use std::collections::HashMap;

/// Target type declared for a known catalog column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// 64-bit floating point
    Float,
    /// 64-bit unsigned integer
    UInt,
    /// Fixed text (single-character flags and proposal identifiers)
    Text,
}

impl ColumnType {
    /// Human-readable name used in coercion errors
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Float => "float",
            ColumnType::UInt => "uint",
            ColumnType::Text => "text",
        }
    }
}

/// Declared target types and units for known OCAT columns
///
/// Flag columns (DITHER, GRID_NAME, NUDGE, PR_NUM, UNINT) carry no numeric
/// semantics and are declared as text for parity with the service's older
/// fixed-width interface.
const TYPING_RULES: &[(&str, ColumnType, Option<Unit>)] = &[
    ("APP_EXP", ColumnType::Float, Some(Unit::Kilosecond)),
    ("CHARGE_CYCLE", ColumnType::UInt, None),
    ("COUNT_RATE", ColumnType::Float, Some(Unit::PerSecond)),
    ("DITHER", ColumnType::Text, None),
    ("DROPPED_CHIP_CNT", ColumnType::UInt, None),
    ("EST_CNT_RATE", ColumnType::Float, Some(Unit::PerSecond)),
    ("EVENT_COUNT", ColumnType::UInt, None),
    ("EVFIL_LO", ColumnType::Float, Some(Unit::Kiloelectronvolt)),
    ("EVFIL_RA", ColumnType::Float, Some(Unit::Kiloelectronvolt)),
    ("EXP_TIME", ColumnType::Float, Some(Unit::Kilosecond)),
    ("F_TIME", ColumnType::Float, Some(Unit::Second)),
    ("FORDER_CNT_RATE", ColumnType::Float, Some(Unit::PerSecond)),
    ("GRID_NAME", ColumnType::Text, None),
    ("NUDGE", ColumnType::Text, None),
    ("OBS_CYCLE", ColumnType::UInt, None),
    ("PR_NUM", ColumnType::Text, None),
    ("PROP_CYCLE", ColumnType::UInt, None),
    ("ROW_CNT", ColumnType::UInt, None),
    ("SOE_ROLL", ColumnType::Float, Some(Unit::Degree)),
    ("STRT_ROW", ColumnType::UInt, None),
    ("UNINT", ColumnType::Text, None),
    ("VMAG", ColumnType::Float, None),
    ("X_SIM", ColumnType::Float, Some(Unit::Millimeter)),
    ("Y_AMP", ColumnType::Float, None),
    ("Y_FREQ", ColumnType::Float, None),
    ("Y_OFF", ColumnType::Float, Some(Unit::Arcminute)),
    ("Y_PHASE", ColumnType::Float, None),
    ("Z_OFF", ColumnType::Float, Some(Unit::Arcminute)),
    ("Z_SIM", ColumnType::Float, Some(Unit::Millimeter)),
];

/// Immutable column-name to (type, unit) declaration set
///
/// Columns not present in the table pass through as text. Blank cells and
/// the service's `None`/`NULL` markers become null fields in any column;
/// only a non-empty, non-convertible token in a declared column is a
/// coercion error.
#[derive(Debug, Clone)]
pub struct TypingTable {
    rules: HashMap<&'static str, (ColumnType, Option<Unit>)>,
}

impl TypingTable {
    /// Build the standard OCAT typing table
    pub fn standard() -> Self {
        let rules = TYPING_RULES
            .iter()
            .map(|(name, ctype, unit)| (*name, (*ctype, *unit)))
            .collect();
        Self { rules }
    }

    /// True if the column has a declared target type
    pub fn is_declared(&self, column: &str) -> bool {
        self.rules.contains_key(column)
    }

    /// The declared unit for a column, if any
    pub fn unit(&self, column: &str) -> Option<Unit> {
        self.rules.get(column).and_then(|(_, unit)| *unit)
    }

    /// The declared target type for a column, if any
    pub fn column_type(&self, column: &str) -> Option<ColumnType> {
        self.rules.get(column).map(|(ctype, _)| *ctype)
    }

    /// Number of declared columns
    pub fn declared_count(&self) -> usize {
        self.rules.len()
    }

    /// Coerce one raw cell to the column's declared type
    ///
    /// Undeclared columns pass through as text. The returned field carries
    /// the column's declared unit even when the cell is null, so the unit
    /// tag stays a property of the column rather than of the value.
    pub fn coerce(&self, column: &str, raw: &str) -> Result<Field> {
        let trimmed = raw.trim();

        let Some((ctype, unit)) = self.rules.get(column) else {
            if NULL_MARKERS.contains(&trimmed) {
                return Ok(Field::null());
            }
            return Ok(Field::plain(FieldValue::Text(trimmed.to_string())));
        };

        if NULL_MARKERS.contains(&trimmed) {
            return Ok(Field {
                value: FieldValue::Null,
                unit: *unit,
            });
        }

        let value = match ctype {
            ColumnType::Float => trimmed
                .parse::<f64>()
                .map(FieldValue::Float)
                .map_err(|_| Error::coercion(column, trimmed, ctype.as_str()))?,
            ColumnType::UInt => trimmed
                .parse::<u64>()
                .map(FieldValue::UInt)
                .map_err(|_| Error::coercion(column, trimmed, ctype.as_str()))?,
            ColumnType::Text => FieldValue::Text(trimmed.to_string()),
        };

        Ok(Field { value, unit: *unit })
    }
}

impl Default for TypingTable {
    fn default() -> Self {
        Self::standard()
    }
}

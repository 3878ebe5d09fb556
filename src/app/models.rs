//! Data models for OCAT observations
//!
//! This module contains the core data structures for representing one
//! catalog observation after type coercion: the typed cell values, their
//! physical units, and the row itself with its field accessors and
//! browser-open conveniences.

use crate::constants::{CHASER_URL, TARGET_PARAM_URL};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Units
// =============================================================================

/// Physical unit attached to a coerced column
///
/// The unit labels follow the catalog's own conventions (`s**-1` for count
/// rates, `ks` for exposure times).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    /// Kiloseconds (exposure times)
    #[serde(rename = "ks")]
    Kilosecond,
    /// Seconds (frame times)
    #[serde(rename = "s")]
    Second,
    /// Counts per second
    #[serde(rename = "s**-1")]
    PerSecond,
    /// Kilo-electronvolts (event filter bounds)
    #[serde(rename = "keV")]
    Kiloelectronvolt,
    /// Degrees (roll angles)
    #[serde(rename = "degree")]
    Degree,
    /// Arcminutes (pointing offsets)
    #[serde(rename = "arcmin")]
    Arcminute,
    /// Millimeters (SIM translation)
    #[serde(rename = "mm")]
    Millimeter,
}

impl Unit {
    /// The catalog's label for this unit
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Kilosecond => "ks",
            Unit::Second => "s",
            Unit::PerSecond => "s**-1",
            Unit::Kiloelectronvolt => "keV",
            Unit::Degree => "degree",
            Unit::Arcminute => "arcmin",
            Unit::Millimeter => "mm",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Field Values
// =============================================================================

/// A single coerced cell value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// 64-bit unsigned integer (declared count/cycle columns)
    UInt(u64),
    /// 64-bit float (declared numeric columns)
    Float(f64),
    /// Raw text (undeclared columns and declared flag columns)
    Text(String),
    /// Absent value (blank cell or the service's `None`/`NULL` marker)
    Null,
}

impl FieldValue {
    /// The float value, if this field holds one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Float(v) => Some(*v),
            FieldValue::UInt(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// The unsigned integer value, if this field holds one
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            FieldValue::UInt(v) => Some(*v),
            _ => None,
        }
    }

    /// The text value, if this field holds one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(v) => Some(v),
            _ => None,
        }
    }

    /// True if the cell was absent in the service response
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::UInt(v) => write!(f, "{}", v),
            FieldValue::Text(v) => f.write_str(v),
            FieldValue::Null => f.write_str("None"),
        }
    }
}

/// A coerced cell together with its declared unit, if any
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// The coerced value
    pub value: FieldValue,

    /// Physical unit declared for the column, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
}

impl Field {
    /// Create a field with no unit
    pub fn plain(value: FieldValue) -> Self {
        Self { value, unit: None }
    }

    /// Create a field tagged with a unit
    pub fn with_unit(value: FieldValue, unit: Unit) -> Self {
        Self {
            value,
            unit: Some(unit),
        }
    }

    /// Create a null field (absent cell)
    pub fn null() -> Self {
        Self {
            value: FieldValue::Null,
            unit: None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Some(unit) => write!(f, "{} {}", self.value, unit),
            None => write!(f, "{}", self.value),
        }
    }
}

// =============================================================================
// Catalog Row
// =============================================================================

/// One observation's full field set after type coercion
///
/// Field names follow the service's uppercase column naming convention;
/// accessors uppercase their argument so `row.field("exp_time")` and
/// `row.field("EXP_TIME")` resolve identically. The `OBSID` identifier is
/// always present and string-typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRow {
    /// The observation identifier (contents of the `OBSID` column)
    obsid: String,

    /// Column names in service order
    columns: Vec<String>,

    /// Coerced cells keyed by uppercase column name
    fields: HashMap<String, Field>,
}

impl CatalogRow {
    /// Assemble a row from parsed cells
    ///
    /// `columns` carries the service's column order; `fields` must be keyed
    /// by the same (uppercase) names.
    pub fn new(obsid: String, columns: Vec<String>, fields: HashMap<String, Field>) -> Self {
        Self {
            obsid,
            columns,
            fields,
        }
    }

    /// The observation identifier
    pub fn obsid(&self) -> &str {
        &self.obsid
    }

    /// Look up a field by name, case-insensitively
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(&name.to_uppercase())
    }

    /// Look up a field by name, falling back to a default when absent
    pub fn field_or<'a>(&'a self, name: &str, default: &'a Field) -> &'a Field {
        self.field(name).unwrap_or(default)
    }

    /// True if the row carries a field with this name
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(&name.to_uppercase())
    }

    /// Field names in service column order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.as_str())
    }

    /// Number of fields in the row
    pub fn field_count(&self) -> usize {
        self.columns.len()
    }

    /// ChaSeR viewer URL for this observation
    pub fn chaser_url(&self) -> String {
        format!("{}?menuItem=details&obsid={}", CHASER_URL, self.obsid)
    }

    /// Mission-planning target parameter URL for this observation
    pub fn target_param_url(&self) -> String {
        format!("{}?{}", TARGET_PARAM_URL, self.obsid)
    }

    /// Open the ChaSeR details page in the default browser
    pub fn open_chaser(&self) -> std::io::Result<()> {
        webbrowser::open(&self.chaser_url())
    }

    /// Open the target parameter page in the default browser
    pub fn open_target_page(&self) -> std::io::Result<()> {
        webbrowser::open(&self.target_param_url())
    }
}

impl fmt::Display for CatalogRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field("TARGET_NAME") {
            Some(target) if !target.value.is_null() => {
                write!(f, "ObsID {}: {}", self.obsid, target.value)
            }
            _ => write!(f, "ObsID {}", self.obsid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::OBSID_COLUMN;

    fn sample_row() -> CatalogRow {
        let columns = vec![
            OBSID_COLUMN.to_string(),
            "TARGET_NAME".to_string(),
            "EXP_TIME".to_string(),
        ];
        let mut fields = HashMap::new();
        fields.insert(
            OBSID_COLUMN.to_string(),
            Field::plain(FieldValue::Text("1234".to_string())),
        );
        fields.insert(
            "TARGET_NAME".to_string(),
            Field::plain(FieldValue::Text("NGC 1275".to_string())),
        );
        fields.insert(
            "EXP_TIME".to_string(),
            Field::with_unit(FieldValue::Float(24.5), Unit::Kilosecond),
        );
        CatalogRow::new("1234".to_string(), columns, fields)
    }

    #[test]
    fn test_field_access_is_case_insensitive() {
        let row = sample_row();
        assert_eq!(row.field("exp_time"), row.field("EXP_TIME"));
        assert!(row.field("exp_time").is_some());
        assert!(row.field("no_such_column").is_none());
    }

    #[test]
    fn test_field_carries_declared_unit() {
        let row = sample_row();
        let field = row.field("EXP_TIME").unwrap();
        assert_eq!(field.value, FieldValue::Float(24.5));
        assert_eq!(field.unit, Some(Unit::Kilosecond));
        assert_eq!(field.to_string(), "24.5 ks");
    }

    #[test]
    fn test_field_or_falls_back() {
        let row = sample_row();
        let default = Field::null();
        assert!(row.field_or("vmag", &default).value.is_null());
        assert_eq!(
            row.field_or("exp_time", &default).value,
            FieldValue::Float(24.5)
        );
    }

    #[test]
    fn test_field_names_preserve_column_order() {
        let row = sample_row();
        let names: Vec<&str> = row.field_names().collect();
        assert_eq!(names, vec![OBSID_COLUMN, "TARGET_NAME", "EXP_TIME"]);
    }

    #[test]
    fn test_chaser_url_embeds_obsid() {
        let row = sample_row();
        assert_eq!(
            row.chaser_url(),
            "https://cda.harvard.edu/chaser/startViewer.do?menuItem=details&obsid=1234"
        );
        assert_eq!(
            row.target_param_url(),
            "https://icxc.harvard.edu/cgi-bin/mp/target_param.cgi?1234"
        );
    }

    #[test]
    fn test_display_includes_target_name() {
        let row = sample_row();
        assert_eq!(row.to_string(), "ObsID 1234: NGC 1275");
    }
}

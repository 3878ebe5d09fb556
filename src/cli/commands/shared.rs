//! Shared output helpers for CLI commands

use crate::app::models::CatalogRow;
use colored::Colorize;

/// Print a full record as an aligned field/value listing
pub fn print_row(row: &CatalogRow) {
    println!("{}", row.to_string().bold());
    for name in row.field_names() {
        if let Some(field) = row.field(name) {
            if field.value.is_null() {
                println!("  {:>20}  {}", name.cyan(), "None".dimmed());
            } else {
                println!("  {:>20}  {}", name.cyan(), field);
            }
        }
    }
}

/// Print a one-line summary of a record for search listings
pub fn print_row_summary(row: &CatalogRow) {
    let target = row
        .field("TARGET_NAME")
        .map(|f| f.value.to_string())
        .unwrap_or_else(|| "-".to_string());
    let instrument = row
        .field("INSTR")
        .map(|f| f.value.to_string())
        .unwrap_or_else(|| "-".to_string());
    let exp_time = row
        .field("EXP_TIME")
        .map(|f| f.to_string())
        .unwrap_or_else(|| "-".to_string());

    println!(
        "  {:>8}  {:<24} {:<8} {}",
        row.obsid().bold(),
        target,
        instrument,
        exp_time.dimmed()
    );
}

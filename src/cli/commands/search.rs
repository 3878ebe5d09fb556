//! Search command implementation: criteria queries

use super::shared::print_row_summary;
use crate::app::services::catalog_cache::{CatalogCache, SearchCriteria};
use crate::cli::args::{OutputFormat, SearchArgs};
use anyhow::{bail, Context, Result};
use colored::Colorize;
use tracing::debug;

/// Parse FIELD=VALUE arguments into search criteria
fn parse_criteria(raw: &[String]) -> Result<SearchCriteria> {
    let mut criteria = SearchCriteria::new();
    for pair in raw {
        let Some((field, value)) = pair.split_once('=') else {
            bail!("invalid criterion '{}', expected FIELD=VALUE", pair);
        };
        if field.is_empty() || value.is_empty() {
            bail!("invalid criterion '{}', expected FIELD=VALUE", pair);
        }
        criteria.push(field, value);
    }
    Ok(criteria)
}

/// Search the catalog and print every matched observation
pub fn run_search(args: &SearchArgs) -> Result<()> {
    let criteria = parse_criteria(&args.criteria)?;
    debug!("Searching catalog: {}", criteria);

    let mut cache = CatalogCache::new();
    cache
        .find(&criteria)
        .with_context(|| format!("search failed for {}", criteria))?;

    match args.format {
        OutputFormat::Table => {
            println!(
                "{} ({} observations)",
                format!("Results for {}", criteria).bold(),
                cache.len()
            );
            for row in cache.values() {
                print_row_summary(row);
            }
        }
        OutputFormat::Json => {
            let rows: Vec<_> = cache.values().collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }
    Ok(())
}

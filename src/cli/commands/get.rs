//! Get command implementation: point lookup by OBSID

use super::shared::print_row;
use crate::app::services::catalog_cache::CatalogCache;
use crate::cli::args::{GetArgs, OutputFormat};
use anyhow::{Context, Result};
use tracing::debug;

/// Look up a single observation and print it
pub fn run_get(args: &GetArgs) -> Result<()> {
    debug!("Looking up observation {}", args.obsid);

    let mut cache = CatalogCache::new();
    let row = cache
        .get(&args.obsid)
        .with_context(|| format!("failed to look up observation {}", args.obsid))?;

    match args.format {
        OutputFormat::Table => print_row(row),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(row)?),
    }
    Ok(())
}

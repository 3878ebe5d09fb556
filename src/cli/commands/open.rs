//! Open command implementation: browser-open an observation page

use crate::app::services::catalog_cache::CatalogCache;
use crate::cli::args::OpenArgs;
use anyhow::{Context, Result};
use tracing::debug;

/// Fetch an observation and open its archive page in the browser
pub fn run_open(args: &OpenArgs) -> Result<()> {
    let mut cache = CatalogCache::new();
    let row = cache
        .get(&args.obsid)
        .with_context(|| format!("failed to look up observation {}", args.obsid))?;

    let url = if args.target_page {
        row.target_param_url()
    } else {
        row.chaser_url()
    };
    debug!("Opening {}", url);

    if args.target_page {
        row.open_target_page()
    } else {
        row.open_chaser()
    }
    .with_context(|| format!("failed to open browser for {}", url))?;

    println!("Opened {}", url);
    Ok(())
}

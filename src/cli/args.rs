//! Command-line argument definitions for the OCAT client
//!
//! This module defines the CLI interface using the clap derive API.

use clap::{Parser, Subcommand, ValueEnum};

/// CLI arguments for the OCAT catalog client
///
/// Queries the Chandra Data Archive's observation catalog service and
/// prints the typed records it returns.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ocat",
    version,
    about = "Query the Chandra X-ray Observatory observation catalog (OCAT)",
    long_about = "A client for the Chandra Data Archive's observation catalog service. \
                  Looks up scheduling and target metadata by observation ID, searches by \
                  arbitrary catalog fields, and opens the ChaSeR viewer page for a record."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the OCAT client
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Look up one observation by its OBSID
    Get(GetArgs),
    /// Search the catalog by field/value criteria
    Search(SearchArgs),
    /// Open an observation's ChaSeR page in the browser
    Open(OpenArgs),
}

/// Output formats for record printing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned field/value listing for the terminal
    Table,
    /// JSON, one object per record
    Json,
}

/// Arguments for the get command
#[derive(Debug, Clone, Parser)]
pub struct GetArgs {
    /// Observation identifier to look up
    #[arg(value_name = "OBSID")]
    pub obsid: String,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the search command
#[derive(Debug, Clone, Parser)]
pub struct SearchArgs {
    /// Catalog filter criteria, e.g. target_name=NGC1275 instrument=ACIS-S
    #[arg(value_name = "FIELD=VALUE", required = true)]
    pub criteria: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the open command
#[derive(Debug, Clone, Parser)]
pub struct OpenArgs {
    /// Observation identifier to open
    #[arg(value_name = "OBSID")]
    pub obsid: String,

    /// Open the mission-planning target parameter page instead of ChaSeR
    #[arg(long)]
    pub target_page: bool,
}

//! Command implementations for the OCAT client CLI
//!
//! Each subcommand lives in its own module; shared record-printing
//! helpers live in [`shared`].

pub mod get;
pub mod open;
pub mod search;
pub mod shared;

use crate::cli::args::Commands;
use anyhow::Result;

/// Dispatch a parsed subcommand to its handler
pub fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Get(get_args) => get::run_get(&get_args),
        Commands::Search(search_args) => search::run_search(&search_args),
        Commands::Open(open_args) => open::run_open(&open_args),
    }
}

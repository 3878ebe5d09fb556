use clap::Parser;
use ocat_client::cli::{args::Args, commands};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Library logging is opt-in via RUST_LOG; the CLI stays quiet by default
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let args = Args::parse();

    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    if let Err(error) = commands::run(command) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("OCAT Client - Chandra Observation Catalog");
    println!("=========================================");
    println!();
    println!("Query the Chandra Data Archive's observation catalog service for");
    println!("scheduling and target metadata, typed and unit-tagged per column.");
    println!();
    println!("USAGE:");
    println!("    ocat <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    get       Look up one observation by its OBSID");
    println!("    search    Search the catalog by field/value criteria");
    println!("    open      Open an observation's ChaSeR page in the browser");
    println!("    help      Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Look up observation 1234:");
    println!("    ocat get 1234");
    println!();
    println!("    # Search by target and instrument, print JSON:");
    println!("    ocat search target_name=NGC1275 instrument=ACIS-S --format json");
    println!();
    println!("    # Open the ChaSeR details page:");
    println!("    ocat open 1234");
    println!();
    println!("For detailed help on any command, use:");
    println!("    ocat <COMMAND> --help");
}

//! # agri CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use agri_cli::catalog::{run_catalog, CatalogArgs};
use agri_cli::submit::{run_submit, SubmitArgs};
use agri_cli::validate::{run_validate, ValidateArgs};

/// Farm input survey toolkit.
///
/// Validates survey records, replays them through the three-step form
/// against the survey service, and lists the select option catalogs.
#[derive(Parser, Debug)]
#[command(name = "agri", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a record file step by step.
    Validate(ValidateArgs),

    /// Replay a record file through the form and submit it.
    Submit(SubmitArgs),

    /// List the select option catalogs.
    Catalog(CatalogArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Validate(args) => run_validate(args),
        Commands::Submit(args) => run_submit(args),
        Commands::Catalog(args) => run_catalog(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

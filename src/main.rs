//! Command-line tool for aggregating API annotation files into one document.
//!
//! Scans a project for annotation files, merges their fragments into a single
//! OpenAPI 3.0 description, enriches it (tags, operation identifiers, security
//! requirements, registry-backed schema shapes), and writes the canonical
//! document to the output directory.
//!
//! # Usage
//!
//! ```bash
//! openapi-from-annotations [OPTIONS] <PROJECT_PATH>
//! ```
//!
//! # Examples
//!
//! Generate the canonical JSON document:
//! ```bash
//! openapi-from-annotations ./my-project --name my-project --public-url https://api.example.com
//! ```
//!
//! With a model registry and cookie auth:
//! ```bash
//! openapi-from-annotations ./my-project --models models.json --auth-cookie connect.sid
//! ```
//!
//! Enable verbose logging:
//! ```bash
//! openapi-from-annotations ./my-project -v
//! ```

use anyhow::Result;
use clap::Parser;
use log::info;
use openapi_from_annotations::cli;

fn main() -> Result<()> {
    // We need to parse args twice: once to get verbose flag, then again after logger init
    // First, do a quick parse just to check for verbose flag
    let args_for_verbose = cli::CliArgs::parse();

    // Initialize logger based on verbose flag
    let log_level = if args_for_verbose.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("API annotation aggregator starting...");

    // Now do the full parse with validation
    let args = cli::parse_args_from_parsed(args_for_verbose)?;

    // Run the main workflow
    cli::run(args)?;

    info!("API document generation completed successfully");

    Ok(())
}

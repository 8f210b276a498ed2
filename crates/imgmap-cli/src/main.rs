//! replace-ids - rewrite image ids in a JSON data file from a filename mapping.
//!
//! ```text
//! replace-ids <data.json> <mapping.json> <output.json>
//! ```
//!
//! Stdout carries only the usage line or the confirmation line; logs go to
//! stderr.

use anyhow::{Context, Result};
use clap::Parser;
use imgmap_core::{AppConfig, ReplaceIdsJob};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = AppConfig::BIN_NAME)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Data file: JSON array of records
    #[arg(allow_hyphen_values = true)]
    data: PathBuf,

    /// Mapping file: JSON array of {fileName, id}
    #[arg(allow_hyphen_values = true)]
    mapping: PathBuf,

    /// Output file, overwritten if present
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,
}

fn main() -> Result<ExitCode> {
    // Any argument shape other than three positionals gets the usage line.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(_) => {
            println!("{}", AppConfig::USAGE);
            return Ok(ExitCode::from(1));
        }
    };

    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    let job = ReplaceIdsJob::new(args.data, args.mapping, args.output);
    info!(
        "Replacing ids in {} using {}",
        job.data_path.display(),
        job.mapping_path.display()
    );

    job.run()
        .with_context(|| format!("Failed to produce {}", job.output_path().display()))?;

    println!("✅ Updated JSON written to {}", job.output_path().display());
    Ok(ExitCode::SUCCESS)
}

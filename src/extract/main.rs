//! Fixed-column extractor for tab-delimited data files.
//!
//! Copies a span of tab-separated columns from every non-comment line
//! into a new file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use gcmd_locate::columns::{extract_columns, files_are_textually_equal};

#[derive(Parser, Debug)]
#[command(name = "extract")]
#[command(about = "Extract tab-separated columns from a data file")]
struct Args {
    /// Tab-delimited input file; lines starting with `#` are skipped
    input: PathBuf,

    /// File to write the selected columns to
    output: PathBuf,

    /// First column to keep (1-based)
    #[arg(long)]
    start: usize,

    /// Last column to keep (1-based, inclusive)
    #[arg(long)]
    end: usize,

    /// Compare the written output against this file
    #[arg(long)]
    expected: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let written = extract_columns(&args.input, &args.output, args.start, args.end)
        .with_context(|| format!("Failed to extract columns from {}", args.input.display()))?;
    info!("Extracted {} lines", written);

    if let Some(expected) = &args.expected {
        let same = files_are_textually_equal(&args.output, expected)
            .context("Failed to compare output")?;
        if same {
            info!("Output matches {}", expected.display());
        } else {
            warn!("Output differs from {}", expected.display());
            anyhow::bail!("output does not match {}", expected.display());
        }
    }

    Ok(())
}

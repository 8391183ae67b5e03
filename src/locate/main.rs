//! GCMD location keyword lookup.
//!
//! Reads site coordinates, resolves each one against the country,
//! US state, Canadian province and ocean basin shapefiles, and writes
//! one GCMD location keyword per site.

mod config;
mod report;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use gcmd_locate::keywords::{KeywordTable, KeywordTables};
use gcmd_locate::models::load_sites;
use gcmd_locate::pip::{GcmdResolver, GeometrySet, PolygonLayer, RecordKey};
use gcmd_locate::Dataset;

use crate::config::Config;
use crate::report::{OutputFormat, Reporter};

#[derive(Parser, Debug)]
#[command(name = "locate")]
#[command(about = "Find NASA GCMD location keywords for site coordinates")]
struct Args {
    /// TOML file naming the shapefiles and lookup tables
    #[arg(short, long, default_value = "gcmd.toml")]
    config: PathBuf,

    /// Whitespace-delimited site file with `lat` and `lon` columns
    #[arg(short, long, default_value = "lat-lon.txt")]
    sites: PathBuf,

    /// Write results here instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log per-site resolution details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("GCMD Location Lookup");
    info!("Config: {}", args.config.display());

    let config = Config::load_from_file(&args.config)?;

    let sites = load_sites(&args.sites)
        .with_context(|| format!("Failed to load sites from {}", args.sites.display()))?;

    // Load keyword tables
    let policy = config.lookups.duplicate_policy();
    let keywords = KeywordTables {
        country: KeywordTable::load(&config.lookups.countries, policy)
            .context("Failed to load country keywords")?,
        state: KeywordTable::load(&config.lookups.states, policy)
            .context("Failed to load state keywords")?,
        province: KeywordTable::load(&config.lookups.provinces, policy)
            .context("Failed to load province keywords")?,
        ocean: KeywordTable::load(&config.lookups.oceans, policy)
            .context("Failed to load ocean keywords")?,
    };

    // Load every polygon dataset once
    let fields = &config.fields;
    let geometry = GeometrySet {
        countries: PolygonLayer::open(
            &config.datasets.countries,
            Dataset::Country,
            &RecordKey::Position,
            Some(fields.country_name.as_str()),
        )
        .context("Failed to load country polygons")?,
        states: PolygonLayer::open(
            &config.datasets.states,
            Dataset::State,
            &RecordKey::Field(fields.state_id.clone()),
            None,
        )
        .context("Failed to load state polygons")?,
        provinces: PolygonLayer::open(
            &config.datasets.provinces,
            Dataset::Province,
            &RecordKey::Field(fields.province_id.clone()),
            None,
        )
        .context("Failed to load province polygons")?,
        oceans: PolygonLayer::open(
            &config.datasets.oceans,
            Dataset::Ocean,
            &RecordKey::Position,
            None,
        )
        .context("Failed to load ocean polygons")?,
    };

    let resolver = GcmdResolver::new(geometry, keywords);

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Failed to create output file {}", path.display())
        })?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let mut reporter = Reporter::new(out, args.format);

    // Create progress bar
    let pb = ProgressBar::new(sites.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})",
            )?
            .progress_chars("#>-"),
    );

    for site in &sites {
        let resolution = resolver.resolve(site);
        reporter.report(site, &resolution)?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    let summary = reporter.finish()?;
    info!(
        "Resolved {} sites: {} keywords, {} unmapped, {} not found",
        summary.total(),
        summary.keyword,
        summary.unmapped,
        summary.not_found
    );
    if summary.not_found > 0 {
        warn!(
            "{} sites were not found in any polygon and need manual keywords",
            summary.not_found
        );
    }

    Ok(())
}

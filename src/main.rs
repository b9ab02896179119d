//! Command-line interface for pii-datagen
//!
//! # Usage Examples
//! ```bash
//! # Sequential run over a directory of JSON field descriptors
//! pii-datagen --specs-dir ./schemas --out ./dataset.csv
//!
//! # Concurrent run with German providers layered first
//! pii-datagen --specs-dir ./schemas --out ./dataset.csv \
//!   --multi-threaded --workers 16 --locales de_DE,en_US
//!
//! # Reproducible SQL-shaped payloads restricted to a few labels
//! pii-datagen --specs-dir ./schemas --out ./dataset.csv \
//!   --shape sql --seed 42 --pii-types email,phone_number,ssn
//! ```

use anyhow::{bail, Context};
use clap::Parser;
use pii_datagen::config::GenerateConfig;
use pii_datagen::descriptor::find_descriptors;
use pii_datagen::render::Shape;
use pii_datagen::runner;
use pii_datagen::sink::CsvSink;
use pii_datagen::PayloadGenerator;
use pii_providers::{MatchEngine, Region};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "pii-datagen")]
#[command(about = "Generate labeled synthetic PII datasets from JSON field descriptors")]
struct Cli {
    /// Directory scanned recursively for *.json field descriptors
    #[arg(long, env = "PII_SPECS_DIR")]
    specs_dir: PathBuf,

    /// Output CSV path (parent directories are created)
    #[arg(long, env = "PII_OUT")]
    out: PathBuf,

    /// Payload rendering shape
    #[arg(long, value_enum, default_value = "json")]
    shape: Shape,

    /// Probability of injecting PII into a payload that matched none
    #[arg(long, default_value_t = 0.6)]
    insert_pii_percentage: f64,

    /// Upper bound on the per-category fraction of labels injected
    #[arg(long, default_value_t = 0.05)]
    insert_label_pii_percentage: f64,

    /// Per-descriptor wall-clock budget in seconds
    #[arg(long, default_value_t = 400)]
    timeout_seconds: u64,

    /// Fan descriptors out over a tokio worker pool
    #[arg(long)]
    multi_threaded: bool,

    /// Worker pool size when --multi-threaded is set
    #[arg(long, default_value_t = 10)]
    workers: usize,

    /// Base RNG seed; a fixed seed reproduces the dataset exactly
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Comma-separated provider locales, first listed wins on overlap
    #[arg(long, default_value = "en_US")]
    locales: String,

    /// Comma-separated PII labels to keep as PII; others demote to non-PII
    #[arg(long)]
    pii_types: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = GenerateConfig {
        insert_pii_percentage: cli.insert_pii_percentage,
        insert_label_pii_percentage: cli.insert_label_pii_percentage,
        timeout: Duration::from_secs(cli.timeout_seconds),
        multi_threaded: cli.multi_threaded,
        workers: cli.workers,
        seed: cli.seed,
        shape: cli.shape,
    };
    config.validate().context("invalid generation settings")?;

    let pii_filter: Option<BTreeSet<String>> = cli.pii_types.as_deref().map(|list| {
        list.split(',')
            .map(|label| label.trim().to_string())
            .filter(|label| !label.is_empty())
            .collect()
    });

    let mut regions = Vec::new();
    for locale in cli.locales.split(',').map(str::trim) {
        let region = match locale {
            "en_US" => Region::en_us(pii_filter.as_ref()),
            "de_DE" => Region::de_de(pii_filter.as_ref()),
            other => bail!("unsupported locale {other:?} (expected en_US or de_DE)"),
        }
        .with_context(|| format!("building provider region for {locale}"))?;
        regions.push(Arc::new(region));
    }
    if regions.is_empty() {
        bail!("at least one locale is required");
    }

    let descriptor_paths = find_descriptors(&cli.specs_dir)
        .with_context(|| format!("scanning descriptor directory {:?}", cli.specs_dir))?;
    if descriptor_paths.is_empty() {
        bail!("no *.json descriptors found under {:?}", cli.specs_dir);
    }
    info!(
        descriptors = descriptor_paths.len(),
        locales = %cli.locales,
        "starting dataset generation"
    );

    let sink = Box::new(CsvSink::create(&cli.out)?);
    let generator = Arc::new(PayloadGenerator::new(MatchEngine::new(regions), config));

    let stop = Arc::new(AtomicBool::new(false));
    let stop_on_signal = Arc::clone(&stop);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received, draining in-flight descriptors");
            stop_on_signal.store(true, Ordering::Relaxed);
        }
    });

    let summary = runner::run(generator, descriptor_paths, sink, stop).await?;
    info!(
        processed = summary.processed,
        emitted = summary.emitted,
        skipped = summary.skipped,
        timed_out = summary.timed_out,
        cancelled = summary.cancelled,
        out = %cli.out.display(),
        "dataset generation finished"
    );
    Ok(())
}

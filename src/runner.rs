//! Drives descriptor files through the generator and into the sink,
//! either sequentially or through a bounded tokio worker pool.
//!
//! Each descriptor's wall-clock deadline starts before its file is
//! parsed, so parsing counts against the same budget as synthesis and
//! a pathological descriptor cannot stall the run past its timeout.
//! In pooled mode one task per descriptor races for semaphore permits
//! while a single writer task owns the sink, so records are appended
//! from exactly one place and the CSV stays well-formed.

use crate::descriptor::{parse_descriptor, Descriptor};
use crate::generate::{Outcome, PayloadGenerator};
use crate::sink::DatasetSink;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, Semaphore};
use tracing::{debug, info, warn};

/// Tally of terminal states across one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Descriptors handed to the generator.
    pub processed: u64,
    /// Records written to the sink.
    pub emitted: u64,
    /// Descriptor files that failed to parse.
    pub skipped: u64,
    pub timed_out: u64,
    pub cancelled: u64,
}

enum WorkerOutcome {
    Sent,
    Skipped,
    TimedOut,
    Cancelled,
}

fn parse_within_run(path: &Path) -> Option<Descriptor> {
    match parse_descriptor(path) {
        Ok(descriptor) => Some(descriptor),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "skipping malformed descriptor");
            None
        }
    }
}

/// Run every descriptor file to completion and flush the sink.
///
/// Descriptor indices are assigned before dispatch, so the per-index
/// seeded RNG makes the output independent of worker scheduling.
pub async fn run(
    generator: Arc<PayloadGenerator>,
    paths: Vec<PathBuf>,
    sink: Box<dyn DatasetSink>,
    stop: Arc<AtomicBool>,
) -> Result<RunSummary> {
    if generator.config().multi_threaded {
        run_pooled(generator, paths, sink, stop).await
    } else {
        run_sequential(generator, paths, sink, stop)
    }
}

fn run_sequential(
    generator: Arc<PayloadGenerator>,
    paths: Vec<PathBuf>,
    mut sink: Box<dyn DatasetSink>,
    stop: Arc<AtomicBool>,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    for (index, path) in paths.iter().enumerate() {
        let deadline = Instant::now() + generator.config().timeout;
        let Some(descriptor) = parse_within_run(path) else {
            summary.skipped += 1;
            continue;
        };
        let mut rng = generator.rng_for(index as u64);
        let outcome = generator.process(&descriptor, &mut rng, deadline, &stop);
        summary.processed += 1;
        match outcome {
            Outcome::Emitted(record) => {
                sink.write(&record).with_context(|| {
                    format!("writing record for descriptor {}", descriptor.name)
                })?;
                summary.emitted += 1;
            }
            Outcome::TimedOut => summary.timed_out += 1,
            Outcome::Cancelled => summary.cancelled += 1,
        }
        debug!(descriptor = %descriptor.name, processed = summary.processed, "descriptor done");
    }
    sink.flush().context("flushing sink")?;
    Ok(summary)
}

async fn run_pooled(
    generator: Arc<PayloadGenerator>,
    paths: Vec<PathBuf>,
    mut sink: Box<dyn DatasetSink>,
    stop: Arc<AtomicBool>,
) -> Result<RunSummary> {
    let workers = generator.config().workers.max(1);
    info!(workers, descriptors = paths.len(), "starting worker pool");
    let semaphore = Arc::new(Semaphore::new(workers));
    let (tx, mut rx) = mpsc::channel::<(String, crate::sink::DatasetRecord)>(workers);

    let writer = tokio::spawn(async move {
        let mut written: u64 = 0;
        while let Some((name, record)) = rx.recv().await {
            sink.write(&record)
                .with_context(|| format!("writing record for descriptor {name}"))?;
            written += 1;
        }
        sink.flush().context("flushing sink")?;
        Ok::<u64, anyhow::Error>(written)
    });

    let mut handles = Vec::with_capacity(paths.len());
    for (index, path) in paths.into_iter().enumerate() {
        let permit = semaphore
            .clone()
            .acquire_owned()
            .await
            .context("acquiring worker permit")?;
        let generator = Arc::clone(&generator);
        let stop = Arc::clone(&stop);
        let tx = tx.clone();
        handles.push(tokio::spawn(async move {
            let _permit = permit;
            let deadline = Instant::now() + generator.config().timeout;
            let Some(descriptor) = parse_within_run(&path) else {
                return WorkerOutcome::Skipped;
            };
            let mut rng = generator.rng_for(index as u64);
            match generator.process(&descriptor, &mut rng, deadline, &stop) {
                Outcome::Emitted(record) => {
                    // the writer hanging up means a sink failure; the
                    // writer's own error carries the cause
                    let _ = tx.send((descriptor.name, record)).await;
                    WorkerOutcome::Sent
                }
                Outcome::TimedOut => WorkerOutcome::TimedOut,
                Outcome::Cancelled => WorkerOutcome::Cancelled,
            }
        }));
    }
    drop(tx);

    let mut summary = RunSummary::default();
    for handle in handles {
        match handle.await.context("joining worker")? {
            WorkerOutcome::Skipped => summary.skipped += 1,
            WorkerOutcome::Sent => summary.processed += 1,
            WorkerOutcome::TimedOut => {
                summary.processed += 1;
                summary.timed_out += 1;
            }
            WorkerOutcome::Cancelled => {
                summary.processed += 1;
                summary.cancelled += 1;
            }
        }
    }
    let written = writer.await.context("joining writer")??;
    summary.emitted = written;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerateConfig;
    use crate::sink::MemorySink;
    use pii_providers::{MatchEngine, Region};
    use std::fs;
    use std::sync::atomic::Ordering;
    use std::sync::Mutex;
    use std::time::Duration;
    use tempfile::TempDir;

    fn generator(config: GenerateConfig) -> Arc<PayloadGenerator> {
        let engine = MatchEngine::new(vec![Arc::new(Region::en_us(None).unwrap())]);
        Arc::new(PayloadGenerator::new(engine, config))
    }

    fn write_descriptors(dir: &TempDir, count: usize) -> Vec<PathBuf> {
        (0..count)
            .map(|i| {
                let path = dir.path().join(format!("schema-{i}.json"));
                fs::write(
                    &path,
                    r#"{"fields": [{"name": "full name"}, {"name": "item_count"}]}"#,
                )
                .unwrap();
                path
            })
            .collect()
    }

    /// Shared memory sink so tests can inspect records written by the
    /// pooled writer task.
    struct SharedSink(Arc<Mutex<Vec<crate::sink::DatasetRecord>>>);

    impl DatasetSink for SharedSink {
        fn write(&mut self, record: &crate::sink::DatasetRecord) -> Result<()> {
            self.0.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    struct FailingSink;

    impl DatasetSink for FailingSink {
        fn write(&mut self, _record: &crate::sink::DatasetRecord) -> Result<()> {
            Err(anyhow::anyhow!("disk full"))
        }
    }

    #[tokio::test]
    async fn test_sequential_emits_every_descriptor() {
        let dir = TempDir::new().unwrap();
        let paths = write_descriptors(&dir, 5);
        let generator = generator(GenerateConfig {
            insert_pii_percentage: 0.0,
            ..Default::default()
        });
        let stop = Arc::new(AtomicBool::new(false));
        let records = Arc::new(Mutex::new(Vec::new()));
        let sink = Box::new(SharedSink(Arc::clone(&records)));
        let summary = run(generator, paths, sink, stop).await.unwrap();
        assert_eq!(summary.processed, 5);
        assert_eq!(summary.emitted, 5);
        assert_eq!(summary.timed_out, 0);
        assert_eq!(records.lock().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_pooled_emits_every_descriptor() {
        let dir = TempDir::new().unwrap();
        let paths = write_descriptors(&dir, 12);
        let generator = generator(GenerateConfig {
            insert_pii_percentage: 0.0,
            multi_threaded: true,
            workers: 3,
            ..Default::default()
        });
        let stop = Arc::new(AtomicBool::new(false));
        let records = Arc::new(Mutex::new(Vec::new()));
        let sink = Box::new(SharedSink(Arc::clone(&records)));
        let summary = run(generator, paths, sink, stop).await.unwrap();
        assert_eq!(summary.processed, 12);
        assert_eq!(summary.emitted, 12);
        assert_eq!(records.lock().unwrap().len(), 12);
    }

    #[tokio::test]
    async fn test_malformed_descriptor_is_skipped() {
        let dir = TempDir::new().unwrap();
        let mut paths = write_descriptors(&dir, 1);
        let bad = dir.path().join("broken.json");
        fs::write(&bad, "{not json").unwrap();
        paths.push(bad);
        let generator = generator(GenerateConfig {
            insert_pii_percentage: 0.0,
            ..Default::default()
        });
        let stop = Arc::new(AtomicBool::new(false));
        let sink = Box::new(MemorySink::new());
        let summary = run(generator, paths, sink, stop).await.unwrap();
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.processed, 1);
        assert_eq!(summary.emitted, 1);
    }

    #[tokio::test]
    async fn test_pooled_malformed_descriptor_is_skipped() {
        let dir = TempDir::new().unwrap();
        let mut paths = write_descriptors(&dir, 3);
        let bad = dir.path().join("broken.json");
        fs::write(&bad, "[[[").unwrap();
        paths.push(bad);
        let generator = generator(GenerateConfig {
            insert_pii_percentage: 0.0,
            multi_threaded: true,
            workers: 2,
            ..Default::default()
        });
        let stop = Arc::new(AtomicBool::new(false));
        let sink = Box::new(MemorySink::new());
        let summary = run(generator, paths, sink, stop).await.unwrap();
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.emitted, 3);
    }

    #[tokio::test]
    async fn test_stop_flag_cancels_remaining_work() {
        let dir = TempDir::new().unwrap();
        let paths = write_descriptors(&dir, 4);
        let generator = generator(GenerateConfig::default());
        let stop = Arc::new(AtomicBool::new(true));
        let sink = Box::new(MemorySink::new());
        let summary = run(generator, paths, sink, stop).await.unwrap();
        assert_eq!(summary.processed, 4);
        assert_eq!(summary.emitted, 0);
        assert_eq!(summary.cancelled, 4);
    }

    #[tokio::test]
    async fn test_expired_timeout_covers_parsing_and_skips_records() {
        // the deadline is taken before the file is parsed, so an
        // already-exhausted budget abandons the descriptor even though
        // the parse itself succeeds
        let dir = TempDir::new().unwrap();
        let paths = write_descriptors(&dir, 3);
        let generator = generator(GenerateConfig {
            timeout: Duration::ZERO,
            ..Default::default()
        });
        let stop = Arc::new(AtomicBool::new(false));
        let sink = Box::new(MemorySink::new());
        let summary = run(generator, paths, sink, stop.clone()).await.unwrap();
        assert_eq!(summary.timed_out, 3);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.emitted, 0);
        assert!(!stop.load(Ordering::Relaxed));
    }

    #[tokio::test]
    async fn test_sink_failure_aborts_sequential_run() {
        let dir = TempDir::new().unwrap();
        let paths = write_descriptors(&dir, 3);
        let generator = generator(GenerateConfig {
            insert_pii_percentage: 0.0,
            ..Default::default()
        });
        let stop = Arc::new(AtomicBool::new(false));
        let err = run(generator, paths, Box::new(FailingSink), stop)
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("disk full"));
    }

    #[tokio::test]
    async fn test_sink_failure_aborts_pooled_run() {
        // the writer task fails on the first record and hangs up; the
        // remaining workers must still drain and the error must surface
        let dir = TempDir::new().unwrap();
        let paths = write_descriptors(&dir, 8);
        let generator = generator(GenerateConfig {
            insert_pii_percentage: 0.0,
            multi_threaded: true,
            workers: 2,
            ..Default::default()
        });
        let stop = Arc::new(AtomicBool::new(false));
        let err = run(generator, paths, Box::new(FailingSink), stop)
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("disk full"));
    }
}

//! Synthetic PII training-data generation.
//!
//! Turns a directory of JSON field descriptors into a labeled CSV
//! dataset: each descriptor yields one rendered payload plus the PII
//! labels and categories it contains. Matching and synthesis live in
//! the `pii-providers` and `pii-synth` crates; this crate owns the
//! descriptor parsing, the injection decision, payload rendering, the
//! sink, and the run loop.

pub mod config;
pub mod descriptor;
pub mod generate;
pub mod render;
pub mod runner;
pub mod sink;

pub use config::GenerateConfig;
pub use descriptor::{find_descriptors, parse_descriptor, Descriptor, FieldSpec};
pub use generate::{Outcome, PayloadGenerator};
pub use render::Shape;
pub use runner::{run, RunSummary};
pub use sink::{CsvSink, DatasetRecord, DatasetSink, MemorySink};

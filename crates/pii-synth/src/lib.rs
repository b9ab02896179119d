//! Seeded fake-value synthesis for the pii-datagen framework.
//!
//! This crate provides the value synthesizers backing the provider
//! registry: named generator functions that produce realistic example
//! values (person names, addresses, card numbers, timestamps, ...)
//! from a seeded RNG, so that a dataset generated with the same seed
//! is reproducible bit for bit.
//!
//! # Architecture
//!
//! ```text
//! Provider (pii-providers)
//!        │  synth: Synthesizer
//!        ▼
//! ┌──────────────────┐
//! │  generators::*   │   fn(&mut StdRng) -> SynthValue
//! └──────────────────┘
//! ```
//!
//! Generators are plain function pointers keyed by canonical label in
//! the registry, so a different backing library can be substituted
//! without touching the registry or the matching engine.

pub mod generators;
pub mod value;

// Re-exports for convenience
pub use value::{SynthValue, Synthesizer, ValueKind};

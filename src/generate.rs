//! Payload synthesis: field resolution, the PII-injection decision,
//! and record assembly for a single descriptor.
//!
//! Each descriptor moves through `Synthesizing` (resolve every field
//! in order), `Deciding` (maybe promote a clean payload to a
//! PII-bearing one), and `Emitting` (render and hand one record to the
//! sink). A cooperative wall-clock deadline bounds the whole pass; on
//! expiry the descriptor is abandoned without a partial record.

use crate::config::GenerateConfig;
use crate::descriptor::Descriptor;
use crate::render::render;
use crate::sink::DatasetRecord;
use pii_providers::{FieldMatch, MatchEngine, PiiMatch};
use pii_synth::SynthValue;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{debug, warn};

/// Terminal state of one descriptor's pass through the generator.
#[derive(Debug)]
pub enum Outcome {
    Emitted(DatasetRecord),
    TimedOut,
    Cancelled,
}

/// The payload generator: resolves descriptor fields via the matching
/// engine and applies the probabilistic injection algorithm.
///
/// Holds only read-only state, so one instance is shared across
/// workers; each worker owns its RNG.
pub struct PayloadGenerator {
    engine: MatchEngine,
    config: GenerateConfig,
}

impl PayloadGenerator {
    pub fn new(engine: MatchEngine, config: GenerateConfig) -> Self {
        Self { engine, config }
    }

    pub fn config(&self) -> &GenerateConfig {
        &self.config
    }

    /// Per-descriptor RNG. Mixing the descriptor index into the base
    /// seed lets workers process descriptors in any order while the
    /// dataset stays reproducible for a fixed seed.
    pub fn rng_for(&self, index: u64) -> StdRng {
        let seed = self
            .config
            .seed
            .wrapping_add(index.wrapping_mul(0x9E3779B97F4A7C15));
        StdRng::seed_from_u64(seed)
    }

    /// Process one descriptor to its terminal state.
    pub fn process(
        &self,
        descriptor: &Descriptor,
        rng: &mut StdRng,
        deadline: Instant,
        stop: &AtomicBool,
    ) -> Outcome {
        let mut fields: Vec<(String, SynthValue)> = Vec::with_capacity(descriptor.fields.len());
        let mut pii: Vec<PiiMatch> = Vec::new();

        // Synthesizing: fixed, deterministic field order so injected
        // labels can be appended deterministically after base fields.
        for field in &descriptor.fields {
            if stop.load(Ordering::Relaxed) {
                return Outcome::Cancelled;
            }
            if Instant::now() >= deadline {
                warn!(descriptor = %descriptor.name, "deadline reached, abandoning descriptor");
                return Outcome::TimedOut;
            }
            match self.engine.resolve(&field.name, field.type_hint, rng) {
                FieldMatch::Pii(m) => {
                    fields.push((field.name.clone(), m.value.clone()));
                    pii.push(m);
                }
                FieldMatch::NonPii(m) => fields.push((field.name.clone(), m.value)),
                FieldMatch::Filler(value) => fields.push((field.name.clone(), value)),
            }
        }

        // Deciding: only clean payloads are promoted; payloads that
        // already carry PII are left alone so the positive/negative
        // mix stays controlled by the matching alone.
        if pii.is_empty() && rng.gen::<f64>() < self.config.insert_pii_percentage {
            self.inject(&mut fields, &mut pii, rng);
        }

        if stop.load(Ordering::Relaxed) {
            return Outcome::Cancelled;
        }
        if Instant::now() >= deadline {
            warn!(descriptor = %descriptor.name, "deadline reached, abandoning descriptor");
            return Outcome::TimedOut;
        }

        // Emitting.
        let payload = render(self.config.shape, &fields);
        let mut seen = BTreeSet::new();
        let mut pii_types = Vec::new();
        let mut categories = Vec::new();
        for m in pii {
            if seen.insert(m.label.clone()) {
                pii_types.push(m.label);
                categories.push(m.category.to_string());
            }
        }
        Outcome::Emitted(DatasetRecord {
            payload,
            has_pii: !pii_types.is_empty(),
            pii_types,
            categories,
        })
    }

    /// Inject additional PII fields into a clean payload. Half of the
    /// time a single random label, otherwise a bounded sample from one
    /// category. Sampling can round to zero labels; promotion must
    /// still yield a PII-bearing payload, so that case falls back to a
    /// single random label.
    fn inject(
        &self,
        fields: &mut Vec<(String, SynthValue)>,
        pii: &mut Vec<PiiMatch>,
        rng: &mut StdRng,
    ) {
        let Some(region) = self.engine.pick_region(rng) else {
            return;
        };
        let mut injected: Vec<PiiMatch> = if rng.gen_bool(0.5) {
            region.get_random_pii(rng).into_iter().collect()
        } else {
            let upper = self.config.insert_label_pii_percentage;
            let fraction = if upper > 0.0 {
                rng.gen_range(0.0..=upper)
            } else {
                0.0
            };
            region.sample_pii(fraction, rng)
        };
        if injected.is_empty() {
            injected = region.get_random_pii(rng).into_iter().collect();
        }
        for m in injected {
            debug!(label = %m.label, category = %m.category, "injecting additional pii");
            fields.push((m.label.clone(), m.value.clone()));
            pii.push(m);
        }
    }
}

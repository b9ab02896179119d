//! Field-name resolution across all configured regions.

use crate::region::{NonPiiMatch, PiiMatch, Region};
use pii_synth::generators::filler;
use pii_synth::{SynthValue, ValueKind};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::sync::Arc;
use tracing::debug;

/// Outcome of resolving one observed field name.
#[derive(Debug, Clone)]
pub enum FieldMatch {
    Pii(PiiMatch),
    NonPii(NonPiiMatch),
    /// No provider matched; the field is rendered with an opaque
    /// filler value and excluded from the record's labels.
    Filler(SynthValue),
}

/// Resolves observed field names against an ordered list of regions.
///
/// Tie-break policy: the first region producing a match wins, and
/// within a region the PII half is checked before the non-PII half, so
/// a field plausibly both an "id" and a generic string classifies as
/// PII.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    regions: Vec<Arc<Region>>,
}

impl MatchEngine {
    pub fn new(regions: Vec<Arc<Region>>) -> Self {
        Self { regions }
    }

    pub fn regions(&self) -> &[Arc<Region>] {
        &self.regions
    }

    /// Pick one region uniformly at random, used when injecting
    /// additional PII into a payload.
    pub fn pick_region(&self, rng: &mut StdRng) -> Option<&Arc<Region>> {
        self.regions.choose(rng)
    }

    /// Resolve a field name. A declared type hint only matters on a
    /// miss: bool-hinted fields get a boolean filler instead of text.
    pub fn resolve(&self, field: &str, hint: Option<ValueKind>, rng: &mut StdRng) -> FieldMatch {
        for region in &self.regions {
            if let Some(m) = region.try_pii(field, rng) {
                return FieldMatch::Pii(m);
            }
            if let Some(m) = region.try_nonpii(field, rng) {
                return FieldMatch::NonPii(m);
            }
        }
        debug!(field, "no provider match, assigning filler");
        let value = match hint {
            Some(ValueKind::Bool) => filler::boolean(rng),
            Some(ValueKind::Int) => filler::random_number(rng),
            _ => filler::string(rng),
        };
        FieldMatch::Filler(value)
    }
}

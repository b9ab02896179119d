//! A named value generator plus its matchable aliases and declared type.

use crate::normalize::delimiter_variants;
use pii_synth::{SynthValue, Synthesizer, ValueKind};
use rand::rngs::StdRng;
use std::collections::BTreeSet;

/// One provider: a canonical label (unique within its registry half),
/// the free-text aliases it matches, the declared type of its values,
/// and the synthesizer that produces them.
///
/// Immutable once the owning [`Region`](crate::Region) is built.
#[derive(Debug, Clone)]
pub struct Provider {
    pub label: String,
    pub aliases: BTreeSet<String>,
    pub kind: ValueKind,
    pub synth: Synthesizer,
}

impl Provider {
    pub fn new(label: &str, aliases: &[&str], kind: ValueKind, synth: Synthesizer) -> Self {
        // Expand spaced aliases with their delimiter variants so the
        // full matchable surface is visible on the provider itself.
        let mut expanded: BTreeSet<String> = BTreeSet::new();
        for alias in aliases {
            expanded.insert(alias.to_string());
            for variant in delimiter_variants(alias) {
                expanded.insert(variant);
            }
        }
        Self {
            label: label.to_string(),
            aliases: expanded,
            kind,
            synth,
        }
    }

    /// Synthesize one value from this provider.
    pub fn generate(&self, rng: &mut StdRng) -> SynthValue {
        (self.synth)(rng)
    }
}

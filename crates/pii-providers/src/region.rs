//! One locale's complete provider registry and category index.

use crate::category::{Category, CategoryIndex};
use crate::error::RegistryError;
use crate::locales;
use crate::provider::Provider;
use crate::registry::Registry;
use pii_synth::{SynthValue, ValueKind};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;
use tracing::debug;

/// A resolved PII lookup: canonical label, synthesized value, declared
/// type, and the category owning the label.
#[derive(Debug, Clone)]
pub struct PiiMatch {
    pub label: String,
    pub value: SynthValue,
    pub kind: ValueKind,
    pub category: Category,
}

/// A resolved non-PII lookup.
#[derive(Debug, Clone)]
pub struct NonPiiMatch {
    pub label: String,
    pub value: SynthValue,
    pub kind: ValueKind,
}

/// One locale's registry and category index. Built once at startup,
/// read-only afterwards; safe for unsynchronized concurrent reads.
#[derive(Debug, Clone)]
pub struct Region {
    locale: String,
    registry: Registry,
    categories: CategoryIndex,
}

impl Region {
    /// Build a region from a master list. `pii_filter` restricts which
    /// labels count as PII for this run (see [`Registry::build`]).
    pub fn build(
        locale: &str,
        pii: Vec<(Provider, Category)>,
        nonpii: Vec<Provider>,
        pii_filter: Option<&BTreeSet<String>>,
    ) -> Result<Self, RegistryError> {
        let assignments: Vec<(String, Category)> = pii
            .iter()
            .filter(|(provider, _)| match pii_filter {
                Some(filter) => filter.contains(&provider.label),
                None => true,
            })
            .map(|(provider, category)| (provider.label.clone(), *category))
            .collect();
        let registry = Registry::build(
            pii.into_iter().map(|(provider, _)| provider).collect(),
            nonpii,
            pii_filter,
        )?;
        Ok(Self {
            locale: locale.to_string(),
            registry,
            categories: CategoryIndex::build(assignments),
        })
    }

    /// The en_US region with the full master provider list.
    pub fn en_us(pii_filter: Option<&BTreeSet<String>>) -> Result<Self, RegistryError> {
        let (pii, nonpii) = locales::en_us_master();
        Self::build("en_US", pii, nonpii, pii_filter)
    }

    /// The de_DE region: en_US providers with German formats where
    /// they differ.
    pub fn de_de(pii_filter: Option<&BTreeSet<String>>) -> Result<Self, RegistryError> {
        let (pii, nonpii) = locales::de_de_master();
        Self::build("de_DE", pii, nonpii, pii_filter)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn category_index(&self) -> &CategoryIndex {
        &self.categories
    }

    fn pii_match(&self, provider: &Provider, rng: &mut StdRng) -> PiiMatch {
        // Every label in the PII half is assigned a category at build
        // time; the fallback can only trigger on a construction bug.
        let category = self
            .categories
            .category_of(&provider.label)
            .unwrap_or(Category::Name);
        PiiMatch {
            label: provider.label.clone(),
            value: provider.generate(rng),
            kind: provider.kind,
            category,
        }
    }

    /// Resolve `label` against the PII half and synthesize a value.
    pub fn get_pii(&self, label: &str, rng: &mut StdRng) -> Result<PiiMatch, RegistryError> {
        let provider = self
            .registry
            .lookup_pii(label)
            .ok_or_else(|| RegistryError::UnknownLabel(label.to_string()))?;
        debug!(locale = %self.locale, field = label, provider = %provider.label, "pii match");
        Ok(self.pii_match(provider, rng))
    }

    /// Resolve `label` against the non-PII half and synthesize a value.
    pub fn get_nonpii(&self, label: &str, rng: &mut StdRng) -> Result<NonPiiMatch, RegistryError> {
        let provider = self
            .registry
            .lookup_nonpii(label)
            .ok_or_else(|| RegistryError::UnknownLabel(label.to_string()))?;
        debug!(locale = %self.locale, field = label, provider = %provider.label, "non-pii match");
        Ok(NonPiiMatch {
            label: provider.label.clone(),
            value: provider.generate(rng),
            kind: provider.kind,
        })
    }

    /// Non-erroring PII lookup, used by the matching engine.
    pub fn try_pii(&self, label: &str, rng: &mut StdRng) -> Option<PiiMatch> {
        let provider = self.registry.lookup_pii(label)?;
        Some(self.pii_match(provider, rng))
    }

    /// Non-erroring non-PII lookup, used by the matching engine.
    pub fn try_nonpii(&self, label: &str, rng: &mut StdRng) -> Option<NonPiiMatch> {
        let provider = self.registry.lookup_nonpii(label)?;
        Some(NonPiiMatch {
            label: provider.label.clone(),
            value: provider.generate(rng),
            kind: provider.kind,
        })
    }

    /// Uniformly select one PII canonical label and synthesize a value.
    /// Label-uniform, not category-uniform: categories differ in size.
    pub fn get_random_pii(&self, rng: &mut StdRng) -> Option<PiiMatch> {
        let provider = self.registry.pii_providers().choose(rng)?;
        Some(self.pii_match(provider, rng))
    }

    /// Sample a bounded subset of one category's labels and synthesize
    /// values for them: a category is chosen uniformly, then
    /// `round(len * fraction)` of its labels are drawn without
    /// replacement, so the count invariant holds exactly for the
    /// chosen category.
    pub fn sample_pii(&self, fraction: f64, rng: &mut StdRng) -> Vec<PiiMatch> {
        let categories: Vec<Category> = self.categories.categories().collect();
        let Some(&category) = categories.choose(rng) else {
            return Vec::new();
        };
        self.categories
            .sample(category, fraction, rng)
            .into_iter()
            .filter_map(|label| self.try_pii(&label, rng))
            .collect()
    }
}

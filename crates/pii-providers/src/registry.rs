//! Alias-normalized provider lookup, split into PII and non-PII halves.

use crate::error::RegistryError;
use crate::normalize::normalize;
use crate::provider::Provider;
use std::collections::{BTreeSet, HashMap};

/// One half of a registry: providers plus normalized lookup maps.
/// Alias keys are checked before canonical-label keys on lookup.
#[derive(Debug, Clone, Default)]
struct Half {
    providers: Vec<Provider>,
    aliases: HashMap<String, usize>,
    labels: HashMap<String, usize>,
}

impl Half {
    fn insert(&mut self, provider: Provider) -> Result<(), RegistryError> {
        let idx = self.providers.len();
        let label_key = normalize(&provider.label);
        if let Some(&existing) = self.labels.get(&label_key) {
            return Err(RegistryError::DuplicateLabel(
                self.providers[existing].label.clone(),
            ));
        }
        // A canonical label claimed earlier as another provider's alias
        // would be shadowed on lookup; reject it at build time.
        if let Some(&existing) = self.aliases.get(&label_key) {
            return Err(RegistryError::AliasCollision {
                alias: label_key,
                first: self.providers[existing].label.clone(),
                second: provider.label.clone(),
            });
        }
        for alias in &provider.aliases {
            let key = normalize(alias);
            // An alias normalizing to another provider's canonical label
            // shadows that label; a provider's own label is fine.
            if let Some(&existing) = self.labels.get(&key) {
                return Err(RegistryError::AliasCollision {
                    alias: key,
                    first: self.providers[existing].label.clone(),
                    second: provider.label.clone(),
                });
            }
            if let Some(&existing) = self.aliases.get(&key) {
                // Variants of the same provider's alias normalize to one
                // key; only a claim by a different provider is a collision.
                if existing != idx {
                    return Err(RegistryError::AliasCollision {
                        alias: key,
                        first: self.providers[existing].label.clone(),
                        second: provider.label.clone(),
                    });
                }
                continue;
            }
            self.aliases.insert(key, idx);
        }
        self.labels.insert(label_key, idx);
        self.providers.push(provider);
        Ok(())
    }

    fn lookup(&self, text: &str) -> Option<&Provider> {
        let key = normalize(text);
        if key.is_empty() {
            return None;
        }
        self.aliases
            .get(&key)
            .or_else(|| self.labels.get(&key))
            .map(|&idx| &self.providers[idx])
    }
}

/// Per-locale collection of named providers with alias-normalized
/// lookup. Built once, immutable afterwards; lookups are idempotent.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    pii: Half,
    nonpii: Half,
}

impl Registry {
    /// Build a registry from master PII and non-PII provider lists.
    ///
    /// `pii_filter`, when given, restricts which labels count as PII
    /// for this run: PII providers not in the filter are routed to the
    /// non-PII half, so one master list can be partitioned per
    /// dataset-generation run.
    pub fn build(
        pii: Vec<Provider>,
        nonpii: Vec<Provider>,
        pii_filter: Option<&BTreeSet<String>>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Registry::default();
        for provider in pii {
            let is_pii = match pii_filter {
                Some(filter) => filter.contains(&provider.label),
                None => true,
            };
            if is_pii {
                registry.pii.insert(provider)?;
            } else {
                registry.nonpii.insert(provider)?;
            }
        }
        for provider in nonpii {
            registry.nonpii.insert(provider)?;
        }
        Ok(registry)
    }

    /// Resolve a field name against the PII half: exact alias match
    /// first, canonical label second. No fuzzy matching.
    pub fn lookup_pii(&self, text: &str) -> Option<&Provider> {
        self.pii.lookup(text)
    }

    /// Resolve a field name against the non-PII half.
    pub fn lookup_nonpii(&self, text: &str) -> Option<&Provider> {
        self.nonpii.lookup(text)
    }

    /// All PII providers, in registration order.
    pub fn pii_providers(&self) -> &[Provider] {
        &self.pii.providers
    }

    /// All non-PII providers, in registration order.
    pub fn nonpii_providers(&self) -> &[Provider] {
        &self.nonpii.providers
    }
}

//! Semantic grouping of PII labels and bounded random sampling.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

/// Semantic category of a PII label. Every PII canonical label belongs
/// to exactly one category; categories are disjoint and together cover
/// the whole PII label space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Name,
    Location,
    Financial,
    Temporal,
    Identification,
    Contact,
    Demographic,
    Internet,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Name,
        Category::Location,
        Category::Financial,
        Category::Temporal,
        Category::Identification,
        Category::Contact,
        Category::Demographic,
        Category::Internet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Name => "name",
            Category::Location => "location",
            Category::Financial => "financial",
            Category::Temporal => "temporal",
            Category::Identification => "identification",
            Category::Contact => "contact",
            Category::Demographic => "demographic",
            Category::Internet => "internet",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The category partition of a region's PII label space.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    by_category: BTreeMap<Category, Vec<String>>,
    by_label: HashMap<String, Category>,
}

impl CategoryIndex {
    /// Build the index from `(label, category)` assignments.
    pub fn build(assignments: impl IntoIterator<Item = (String, Category)>) -> Self {
        let mut index = CategoryIndex::default();
        for (label, category) in assignments {
            if index.by_label.insert(label.clone(), category).is_none() {
                index.by_category.entry(category).or_default().push(label);
            }
        }
        index
    }

    /// Categories that contain at least one label, in stable order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.by_category.keys().copied()
    }

    /// Labels belonging to the given category.
    pub fn labels(&self, category: Category) -> &[String] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The category owning a label, if the label is PII.
    pub fn category_of(&self, label: &str) -> Option<Category> {
        self.by_label.get(label).copied()
    }

    /// Total number of PII labels across all categories.
    pub fn len(&self) -> usize {
        self.by_label.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_label.is_empty()
    }

    /// Partition the given PII labels into their categories. Labels not
    /// present in the index are dropped.
    pub fn categories_for(
        &self,
        labels: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> BTreeMap<Category, BTreeSet<String>> {
        let mut out: BTreeMap<Category, BTreeSet<String>> = BTreeMap::new();
        for label in labels {
            let label = label.as_ref();
            if let Some(category) = self.category_of(label) {
                out.entry(category).or_default().insert(label.to_string());
            }
        }
        out
    }

    /// Sample `round(len * fraction)` labels uniformly without
    /// replacement from one category. `fraction` is clamped to [0, 1],
    /// so 0 yields nothing and 1 yields the whole category.
    pub fn sample(&self, category: Category, fraction: f64, rng: &mut StdRng) -> Vec<String> {
        let labels = self.labels(category);
        let fraction = fraction.clamp(0.0, 1.0);
        let count = (labels.len() as f64 * fraction).round() as usize;
        labels.choose_multiple(rng, count).cloned().collect()
    }
}

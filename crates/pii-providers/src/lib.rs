//! Provider registry, category index, and label matching for the
//! pii-datagen framework.
//!
//! The types here are built once per locale at startup and are
//! immutable afterwards, so they can be shared across worker threads
//! without synchronization:
//!
//! - [`Provider`] - a canonical label, its matchable aliases, and the
//!   synthesizer producing values for it
//! - [`Registry`] - alias-normalized lookup over a PII half and a
//!   non-PII half
//! - [`CategoryIndex`] - the partition of PII labels into semantic
//!   categories, with bounded random sampling
//! - [`Region`] - one locale's registry + category index, exposing the
//!   query surface (`get_pii`, `get_nonpii`, `get_random_pii`,
//!   `sample_pii`)
//! - [`MatchEngine`] - field-name resolution across an ordered list of
//!   regions, PII half before non-PII half

pub mod category;
pub mod error;
pub mod locales;
pub mod matching;
pub mod normalize;
pub mod provider;
pub mod region;
pub mod registry;

// Re-exports for convenience
pub use category::{Category, CategoryIndex};
pub use error::RegistryError;
pub use matching::{FieldMatch, MatchEngine};
pub use normalize::{delimiter_variants, normalize};
pub use provider::Provider;
pub use region::{NonPiiMatch, PiiMatch, Region};
pub use registry::Registry;

//! Error types for registry construction and lookup.

/// Error type for provider registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The label matched no provider in the queried registry half.
    #[error("no provider matches label: {0}")]
    UnknownLabel(String),

    /// Two providers in the same registry half claim the same alias.
    /// Raised at build time so resolution stays deterministic and
    /// total instead of silently last-write-wins.
    #[error("alias '{alias}' is claimed by both provider '{first}' and provider '{second}'")]
    AliasCollision {
        alias: String,
        first: String,
        second: String,
    },

    /// A canonical label was registered twice in the same half.
    #[error("duplicate canonical label: {0}")]
    DuplicateLabel(String),
}

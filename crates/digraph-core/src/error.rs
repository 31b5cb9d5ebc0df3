//! Error types for digraph-core.

use thiserror::Error;

/// Digraph error types.
///
/// Lookups never fail: an absent vertex or edge is reported as `None`.
/// Errors here only surface from construction, re-indexing and configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// An edge endpoint could not be resolved in the vertex set built from
    /// the very same edges.
    ///
    /// This means the vertex hash and vertex equality disagree with each
    /// other (equal values hashing differently), or the endpoint accessor is
    /// not deterministic.
    #[error(
        "Dangling endpoint: edge #{edge} has an endpoint missing from the vertex set \
         (vertex hash and equality are inconsistent)"
    )]
    DanglingEndpoint {
        /// Position of the offending edge in the edge set.
        edge: usize,
    },

    /// A capacity hint could not be reserved.
    #[error("Capacity error: cannot reserve room for {requested} entries")]
    Capacity {
        /// Number of entries requested.
        requested: usize,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for digraph operations.
pub type Result<T> = std::result::Result<T, Error>;

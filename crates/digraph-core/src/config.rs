//! Graph construction configuration.
//!
//! Values are layered with `figment`, later sources overriding earlier ones:
//!
//! 1. Built-in defaults ([`GraphConfig::default`])
//! 2. `digraph.toml` in the working directory (optional)
//! 3. Environment variables prefixed with `DIGRAPH_`, nested keys separated
//!    by `__` (e.g. `DIGRAPH_INDEX__SHADOWED_EDGES=warn`)
//!
//! # Example
//!
//! ```toml
//! [capacity]
//! edges = 4096
//! vertices = 1024
//!
//! [index]
//! shadowed_edges = "warn"
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "digraph.toml";

/// Prefix of the environment variables read by [`GraphConfig::load`].
pub const ENV_PREFIX: &str = "DIGRAPH_";

/// Log level used when an edge is shadowed in the adjacency index.
///
/// Two distinct edges sharing the same ordered `(from, to)` pair both stay in
/// the edge set, but only the one indexed last is reachable through
/// `find_edge`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowedEdgeLog {
    /// Do not report shadowed edges.
    Silent,
    /// Report at `DEBUG` level.
    #[default]
    Debug,
    /// Report at `WARN` level.
    Warn,
}

/// Pre-allocation hints for the edge and vertex sets.
///
/// Zero means "grow on demand".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapacityConfig {
    /// Expected number of distinct edges.
    pub edges: usize,
    /// Expected number of distinct vertices.
    pub vertices: usize,
}

/// Adjacency index settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// How shadowed multi-edges are reported while indexing.
    pub shadowed_edges: ShadowedEdgeLog,
}

/// Top-level configuration for building a [`Digraph`](crate::Digraph).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Pre-allocation hints.
    pub capacity: CapacityConfig,
    /// Adjacency index settings.
    pub index: IndexConfig,
}

impl GraphConfig {
    /// Returns the layered figment (defaults, `digraph.toml`, environment).
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(GraphConfig::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads the configuration from all layered sources.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a source holds a value of the wrong type.
    pub fn load() -> Result<Self> {
        Ok(Self::figment().extract()?)
    }

    /// Loads the configuration from a single TOML file on top of the defaults.
    ///
    /// Environment variables are not consulted.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file is missing, unreadable or holds a
    /// value of the wrong type.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Figment::from(Serialized::defaults(GraphConfig::default()))
            .merge(Toml::file_exact(path.as_ref()))
            .extract()?;
        Ok(config)
    }

    /// Sets the capacity hints (builder pattern).
    #[must_use]
    pub fn with_capacity(mut self, edges: usize, vertices: usize) -> Self {
        self.capacity = CapacityConfig { edges, vertices };
        self
    }

    /// Sets the shadowed-edge log level (builder pattern).
    #[must_use]
    pub fn with_shadowed_edges(mut self, level: ShadowedEdgeLog) -> Self {
        self.index.shadowed_edges = level;
        self
    }
}

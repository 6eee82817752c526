//! Graph model for the crate.
//!
//! This module defines the adjacency-list representation of a package
//! dependency graph (`DepGraph`) consumed by every algorithmic component:
//! the iterative traversal in `traverse`, the load-order resolver in
//! `resolver`, the ASCII tree in `crate::tree` and the PlantUML exporter in
//! `crate::visualization`.
//!
//! You typically obtain a graph via `crate::registry::fetch_graph` or
//! `DepGraph::load_json` and then pass it read-only to the algorithms.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub mod resolver;
pub mod traverse;

/// Adjacency-list dependency graph: package name → direct dependencies.
///
/// Keys are case-sensitive and dependency lists keep their insertion order;
/// duplicates and self-references are stored as-is. A dependency name that
/// never appears as a key is a leaf package with zero children.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepGraph {
    packages: HashMap<String, Vec<String>>,
}

impl DepGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the direct dependencies of `package`, replacing any previous
    /// entry for the same (case-sensitive) name.
    pub fn insert<S: Into<String>>(&mut self, package: S, deps: Vec<String>) {
        self.packages.insert(package.into(), deps);
    }

    /// The lookup contract every algorithm honors: the ordered dependency
    /// list of `node`, or an empty slice when `node` is not a key.
    #[must_use]
    pub fn children(&self, node: &str) -> &[String] {
        self.packages.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    #[must_use]
    pub fn contains(&self, node: &str) -> bool {
        self.packages.contains_key(node)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Iterate over (package, dependencies) entries in unspecified order.
    /// Callers needing determinism sort the keys themselves.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.packages.iter()
    }

    /// Load an adjacency graph from a JSON file previously written by
    /// `save_json` (or assembled by hand: `{"name": ["dep", ...], ...}`).
    ///
    /// # Errors
    /// Returns `DepVizError::GraphFile` when the file cannot be read or is
    /// not a valid adjacency mapping.
    pub fn load_json(path: &Path) -> Result<Self, crate::errors::DepVizError> {
        let data = std::fs::read_to_string(path).map_err(|e| {
            crate::errors::DepVizError::GraphFile { file: path.to_path_buf(), message: e.to_string() }
        })?;
        serde_json::from_str::<Self>(&data).map_err(|e| crate::errors::DepVizError::GraphFile {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Persist the adjacency mapping as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns `DepVizError::Io` when the file cannot be written.
    pub fn save_json(&self, path: &Path) -> Result<(), crate::errors::DepVizError> {
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| crate::errors::DepVizError::GraphFile {
                file: path.to_path_buf(),
                message: e.to_string(),
            })?;
        crate::utils::paths::ensure_parent_dir(path)?;
        std::fs::write(path, data)?;
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<String>)> for DepGraph {
    fn from_iter<T: IntoIterator<Item = (S, Vec<String>)>>(iter: T) -> Self {
        let mut g = Self::new();
        for (k, v) in iter {
            g.insert(k, v);
        }
        g
    }
}

/// Case-insensitive substring filter used by the CLI to prune subtrees.
///
/// An empty pattern matches nothing, so filtering is effectively disabled.
#[derive(Debug, Clone, Default)]
pub struct NameFilter {
    pattern: String,
}

impl NameFilter {
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        Self { pattern: pattern.to_ascii_lowercase() }
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.pattern.is_empty()
    }

    /// True when `name` contains the pattern, ignoring ASCII case.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        !self.pattern.is_empty() && name.to_ascii_lowercase().contains(&self.pattern)
    }
}

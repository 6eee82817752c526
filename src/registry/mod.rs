//! Dependency lookup against an npm-style registry and graph assembly.
//!
//! The network edge sits behind the `DependencySource` trait so the graph
//! builder (and everything downstream) can be exercised against an
//! in-memory stub. The HTTP client is a thin blocking `reqwest` wrapper
//! around `GET <registry>/<package>/<version>`, reading the `dependencies`
//! object of the response in declaration order.
use std::collections::{HashSet, VecDeque};

use crate::errors::DepVizError;
use crate::graph::DepGraph;

pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Version used for transitive packages, whose exact pins are out of scope.
pub const LATEST: &str = "latest";

/// Anything that can answer "direct dependencies of (package, version)".
pub trait DependencySource {
    /// Ordered direct dependency names, empty when the package has none.
    ///
    /// # Errors
    /// Returns `DepVizError::Registry` when the lookup fails; callers log
    /// and continue rather than aborting the run.
    fn dependencies(&self, package: &str, version: &str) -> Result<Vec<String>, DepVizError>;
}

/// Blocking HTTP client for an npm-style registry.
pub struct NpmRegistry {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl NpmRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_REGISTRY_URL)
    }

    /// Point the client at a different registry endpoint (mirrors, tests).
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for NpmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencySource for NpmRegistry {
    fn dependencies(&self, package: &str, version: &str) -> Result<Vec<String>, DepVizError> {
        let registry_err = |message: String| DepVizError::Registry {
            package: package.to_string(),
            version: version.to_string(),
            message,
        };

        let url = format!("{}/{package}/{version}", self.base_url);
        let response = self.client.get(&url).send().map_err(|e| registry_err(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(registry_err(format!("registry returned {status}")));
        }
        let body: serde_json::Value =
            response.json().map_err(|e| registry_err(format!("invalid JSON body: {e}")))?;

        // No dependencies section means a leaf package, not an error.
        let deps = body
            .get("dependencies")
            .and_then(serde_json::Value::as_object)
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default();
        Ok(deps)
    }
}

/// Assemble the adjacency graph for `root` by querying `source`
/// breadth-first.
///
/// The root is fetched at `version`; transitive packages are fetched at
/// `latest` since version-range resolution is out of scope. Fetching stops
/// descending past `max_depth` (the root is depth 0) and each package is
/// fetched at most once, compared case-insensitively. A package whose
/// lookup fails is reported through `eprintln!` and kept as a leaf; the
/// build always completes.
pub fn fetch_graph(
    source: &dyn DependencySource,
    root: &str,
    version: &str,
    max_depth: usize,
) -> DepGraph {
    let mut graph = DepGraph::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<(String, String, usize)> = VecDeque::new();

    seen.insert(root.to_ascii_lowercase());
    queue.push_back((root.to_string(), version.to_string(), 0));

    while let Some((package, version, depth)) = queue.pop_front() {
        let deps = match source.dependencies(&package, &version) {
            Ok(deps) => deps,
            Err(e) => {
                eprintln!("warning: {e}");
                graph.insert(package, Vec::new());
                continue;
            }
        };
        for dep in &deps {
            if depth < max_depth && seen.insert(dep.to_ascii_lowercase()) {
                queue.push_back((dep.clone(), LATEST.to_string(), depth + 1));
            }
        }
        graph.insert(package, deps);
    }
    graph
}

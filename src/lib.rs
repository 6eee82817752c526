//! depviz — package dependency graph visualizer
//!
//! Fetch (or load) a package's dependency graph as an adjacency mapping and
//! inspect it from the command line or as a library.
//!
//! # Features
//! - Dependency-first load order via three-color DFS, with cycle collection
//! - Iterative depth-first traversal with case-insensitive substring filtering
//! - ASCII dependency tree with depth limiting and cycle markers
//! - PlantUML export, with optional SVG rasterization through the external
//!   `plantuml` tool
//! - Graph assembly from an npm-style registry, or from adjacency JSON files
//!
//! # Quickstart (Library)
//! ```
//! use depviz::graph::{resolver, DepGraph};
//!
//! let graph: DepGraph = [
//!     ("app", vec!["http".to_string(), "fs".to_string()]),
//!     ("http", vec!["fs".to_string()]),
//! ]
//! .into_iter()
//! .collect();
//!
//! let res = resolver::resolve_all("app", &graph);
//! assert_eq!(res.order.last().map(String::as_str), Some("app"));
//! assert!(res.cycles.is_empty());
//! ```
//!
//! # Quickstart (CLI)
//! ```text
//! depviz order express --max-depth 3
//! depviz tree express --exclude types
//! depviz export express --puml deps.puml --svg deps.svg
//! depviz run --config depviz.toml
//! ```
pub mod app;
pub mod cli;
pub mod errors;
pub mod graph;
pub mod registry;
pub mod tree;
pub mod utils;
pub mod visualization;

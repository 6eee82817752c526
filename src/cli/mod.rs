use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "depviz",
    version,
    about = "Package dependency graph visualizer",
    long_about = "Fetch a package's dependency graph from an npm-style registry (or load a prebuilt adjacency JSON) and compute its load order, detect cycles, print an ASCII tree, and export a PlantUML diagram with optional SVG rasterization via the external `plantuml` tool."
)]
pub struct Cli {
    /// Suppress progress messages (data output is unaffected)
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run one full pipeline per TOML config file
    Run {
        /// Config files to process, in order
        #[arg(long, required = true, num_args = 1..)]
        config: Vec<PathBuf>,
    },
    /// Compute and print the dependency load order
    Order {
        /// Root package name
        package: String,
        /// Package version to fetch for the root (transitive packages use "latest")
        #[arg(long, default_value = "latest")]
        version: String,
        /// Maximum depth to descend (root is depth 0; default unbounded)
        #[arg(long)]
        max_depth: Option<usize>,
        /// Prune packages whose name contains this substring (case-insensitive)
        #[arg(long)]
        exclude: Option<String>,
        /// Prebuilt adjacency JSON to load instead of contacting the registry
        #[arg(long)]
        graph: Option<PathBuf>,
        /// Registry base URL
        #[arg(long, env = "DEPVIZ_REGISTRY")]
        registry: Option<String>,
        /// Save the graph used for this run as adjacency JSON
        #[arg(long)]
        save_graph: Option<PathBuf>,
        /// Write the order to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Output format: text or json
        #[arg(long, value_parser = ["text", "json"], default_value = "text")]
        format: String,
    },
    /// Print the dependency tree as ASCII art
    Tree {
        /// Root package name
        package: String,
        /// Package version to fetch for the root (transitive packages use "latest")
        #[arg(long, default_value = "latest")]
        version: String,
        /// Maximum depth to descend (root is depth 0; default unbounded)
        #[arg(long)]
        max_depth: Option<usize>,
        /// Prune packages whose name contains this substring (case-insensitive)
        #[arg(long)]
        exclude: Option<String>,
        /// Prebuilt adjacency JSON to load instead of contacting the registry
        #[arg(long)]
        graph: Option<PathBuf>,
        /// Registry base URL
        #[arg(long, env = "DEPVIZ_REGISTRY")]
        registry: Option<String>,
        /// Save the graph used for this run as adjacency JSON
        #[arg(long)]
        save_graph: Option<PathBuf>,
    },
    /// Print the iterative depth-first visit order with cycle notices
    Walk {
        /// Start package name
        package: String,
        /// Package version to fetch for the root (transitive packages use "latest")
        #[arg(long, default_value = "latest")]
        version: String,
        /// Skip packages whose name contains this substring (case-insensitive)
        #[arg(long)]
        exclude: Option<String>,
        /// Prebuilt adjacency JSON to load instead of contacting the registry
        #[arg(long)]
        graph: Option<PathBuf>,
        /// Registry base URL
        #[arg(long, env = "DEPVIZ_REGISTRY")]
        registry: Option<String>,
        /// Save the graph used for this run as adjacency JSON
        #[arg(long)]
        save_graph: Option<PathBuf>,
    },
    /// Export the graph as PlantUML, optionally rasterized to SVG
    Export {
        /// Root package name (highlighted in the diagram)
        package: String,
        /// Package version to fetch for the root (transitive packages use "latest")
        #[arg(long, default_value = "latest")]
        version: String,
        /// Maximum depth to descend when fetching (default unbounded)
        #[arg(long)]
        max_depth: Option<usize>,
        /// Prebuilt adjacency JSON to load instead of contacting the registry
        #[arg(long)]
        graph: Option<PathBuf>,
        /// Registry base URL
        #[arg(long, env = "DEPVIZ_REGISTRY")]
        registry: Option<String>,
        /// Save the graph used for this run as adjacency JSON
        #[arg(long)]
        save_graph: Option<PathBuf>,
        /// PlantUML output file path
        #[arg(long)]
        puml: PathBuf,
        /// SVG output file path (requires the external `plantuml` tool)
        #[arg(long)]
        svg: Option<PathBuf>,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

//! CLI orchestration: turns parsed arguments into pipeline runs.
//!
//! Data goes to stdout, diagnostics to stderr. Cycle reports and rasterizer
//! failures are reportable conditions, not aborts: a `run` invocation keeps
//! processing its remaining config files after a failed one.
use std::io::Write as _;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, Commands};
use crate::errors::DepVizError;
use crate::graph::traverse::{Dfs, Visit};
use crate::graph::{resolver, DepGraph, NameFilter};
use crate::registry::{fetch_graph, DependencySource, NpmRegistry};
use crate::tree;
use crate::utils::config;
use crate::visualization;
use clap::CommandFactory;
use clap_complete::generate;

/// Run the CLI logic in-process. Returns an exit code (0 = success).
#[must_use]
pub fn run_cli(cli: Cli) -> i32 {
    let quiet = cli.quiet;
    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let bin_name = env!("CARGO_PKG_NAME");
            let mut out = std::io::stdout();
            generate(shell, &mut cmd, bin_name, &mut out);
            0
        }
        Commands::Run { config } => {
            let mut code = 0;
            for path in config {
                if !quiet {
                    println!("Processing config: {}", path.display());
                }
                if let Err(e) = run_config(&path, quiet) {
                    eprintln!("{}: {e}", path.display());
                    code = 1;
                }
            }
            code
        }
        Commands::Order {
            package,
            version,
            max_depth,
            exclude,
            graph,
            registry,
            save_graph,
            out,
            format,
        } => {
            let graph = match obtain_graph(
                &package,
                &version,
                graph.as_deref(),
                registry.as_deref(),
                max_depth,
                save_graph.as_deref(),
                quiet,
            ) {
                Ok(g) => g,
                Err(e) => {
                    eprintln!("{e}");
                    return 1;
                }
            };
            let filter = NameFilter::new(exclude.as_deref().unwrap_or(""));
            let res = resolver::resolve(
                &package,
                &graph,
                max_depth.unwrap_or(usize::MAX),
                |n| filter.matches(n),
            );
            report_cycles(&res.cycles);
            if format == "json" {
                #[derive(serde::Serialize)]
                struct OrderOut<'a> {
                    order: &'a [String],
                    cycles: &'a [Vec<String>],
                }
                match serde_json::to_string_pretty(&OrderOut {
                    order: &res.order,
                    cycles: &res.cycles,
                }) {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("JSON encode error: {e}");
                        return 1;
                    }
                }
            } else if let Some(out_path) = out {
                if let Err(e) = write_order(&out_path, &res.order) {
                    eprintln!("Failed to write order file {}: {e}", out_path.display());
                    return 1;
                }
                if !quiet {
                    println!("Load order written to {}", out_path.display());
                }
            } else {
                for name in &res.order {
                    println!("{name}");
                }
            }
            0
        }
        Commands::Tree { package, version, max_depth, exclude, graph, registry, save_graph } => {
            let graph = match obtain_graph(
                &package,
                &version,
                graph.as_deref(),
                registry.as_deref(),
                max_depth,
                save_graph.as_deref(),
                quiet,
            ) {
                Ok(g) => g,
                Err(e) => {
                    eprintln!("{e}");
                    return 1;
                }
            };
            let filter = NameFilter::new(exclude.as_deref().unwrap_or(""));
            let lines =
                tree::render(&package, &graph, max_depth.unwrap_or(usize::MAX), |n| {
                    filter.matches(n)
                });
            for line in lines {
                println!("{line}");
            }
            0
        }
        Commands::Walk { package, version, exclude, graph, registry, save_graph } => {
            let graph = match obtain_graph(
                &package,
                &version,
                graph.as_deref(),
                registry.as_deref(),
                None,
                save_graph.as_deref(),
                quiet,
            ) {
                Ok(g) => g,
                Err(e) => {
                    eprintln!("{e}");
                    return 1;
                }
            };
            for step in Dfs::new(&graph, &package, exclude.as_deref().unwrap_or("")) {
                match step {
                    Visit::Node(name) => println!("{name}"),
                    Visit::Cycle(name) => println!("{name}  (cycle)"),
                }
            }
            0
        }
        Commands::Export {
            package,
            version,
            max_depth,
            graph,
            registry,
            save_graph,
            puml,
            svg,
        } => {
            let graph = match obtain_graph(
                &package,
                &version,
                graph.as_deref(),
                registry.as_deref(),
                max_depth,
                save_graph.as_deref(),
                quiet,
            ) {
                Ok(g) => g,
                Err(e) => {
                    eprintln!("{e}");
                    return 1;
                }
            };
            let source = visualization::to_plantuml(&graph, Some(&package));
            if let Err(e) = visualization::write_puml(&puml, &source) {
                eprintln!("Failed to write PlantUML {}: {e}", puml.display());
                return 1;
            }
            if !quiet {
                println!("PlantUML written to {}", puml.display());
            }
            if let Some(svg_path) = svg {
                if let Err(e) = visualization::render_svg(&puml, &svg_path) {
                    eprintln!("{e}");
                    return 1;
                }
                if !quiet {
                    println!("SVG written to {}", svg_path.display());
                }
            }
            0
        }
    }
}

/// Load a prebuilt graph or assemble one from the registry.
fn obtain_graph(
    package: &str,
    version: &str,
    graph_path: Option<&Path>,
    registry_url: Option<&str>,
    max_depth: Option<usize>,
    save_graph: Option<&Path>,
    quiet: bool,
) -> Result<DepGraph, DepVizError> {
    let graph = if let Some(path) = graph_path {
        DepGraph::load_json(path)?
    } else {
        let registry = match registry_url {
            Some(url) => NpmRegistry::with_base_url(url),
            None => NpmRegistry::new(),
        };
        let source: &dyn DependencySource = &registry;
        let graph = fetch_graph(source, package, version, max_depth.unwrap_or(usize::MAX));
        if !quiet {
            println!("Fetched {} packages from the registry", graph.len());
        }
        graph
    };
    if let Some(path) = save_graph {
        graph.save_json(path)?;
        if !quiet {
            println!("Graph saved to {}", path.display());
        }
    }
    Ok(graph)
}

/// One config-driven pipeline run. Config problems are fatal to this run
/// only; cycle reports and rasterizer failures are logged and the run
/// continues.
fn run_config(path: &Path, quiet: bool) -> Result<(), DepVizError> {
    let cfg = config::load_config_at(path)?;
    let package = cfg.package_name(path)?.to_string();
    let version = cfg.version.clone().unwrap_or_else(|| crate::registry::LATEST.to_string());
    let depth = cfg.max_depth.unwrap_or(usize::MAX);
    let filter = NameFilter::new(cfg.exclude.as_deref().unwrap_or(""));
    let output = cfg.output.clone().unwrap_or_default();

    let registry_url = cfg.registry.as_ref().and_then(|r| r.url.clone());
    let graph = obtain_graph(
        &package,
        &version,
        cfg.graph.as_deref(),
        registry_url.as_deref(),
        cfg.max_depth,
        None,
        quiet,
    )?;

    let res = resolver::resolve(&package, &graph, depth, |n| filter.matches(n));
    report_cycles(&res.cycles);
    if let Some(order_path) = &output.order {
        write_order(order_path, &res.order)?;
        if !quiet {
            println!("Load order written to {}", order_path.display());
        }
    } else {
        for name in &res.order {
            println!("{name}");
        }
    }

    if !quiet {
        for line in tree::render(&package, &graph, depth, |n| filter.matches(n)) {
            println!("{line}");
        }
    }

    // SVG needs a source file on disk; default it next to the SVG when only
    // the SVG output was configured.
    let puml_path: Option<PathBuf> = output
        .puml
        .clone()
        .or_else(|| output.svg.as_ref().map(|p| p.with_extension("puml")));
    if let Some(puml_path) = puml_path {
        let source = visualization::to_plantuml(&graph, Some(&package));
        visualization::write_puml(&puml_path, &source)?;
        if !quiet {
            println!("PlantUML written to {}", puml_path.display());
        }
        if let Some(svg_path) = &output.svg {
            match visualization::render_svg(&puml_path, svg_path) {
                Ok(()) => {
                    if !quiet {
                        println!("SVG written to {}", svg_path.display());
                    }
                }
                // Best effort: report and keep the rest of the outputs.
                Err(e) => eprintln!("{e}"),
            }
        }
    }
    Ok(())
}

/// Print each cycle to stderr, closing the loop for display.
fn report_cycles(cycles: &[Vec<String>]) {
    for cycle in cycles {
        let mut display = cycle.join(" -> ");
        if let Some(first) = cycle.first() {
            display.push_str(" -> ");
            display.push_str(first);
        }
        eprintln!("cycle: {display}");
    }
}

/// One package name per line, newline-terminated, UTF-8, no metadata.
fn write_order(path: &Path, order: &[String]) -> Result<(), DepVizError> {
    crate::utils::paths::ensure_parent_dir(path)?;
    let mut f = std::fs::File::create(path)?;
    for name in order {
        writeln!(f, "{name}")?;
    }
    Ok(())
}

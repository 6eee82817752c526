//! Print PlantUML source for a small graph with a cycle.
//!
//! Run with: `cargo run --example export_puml`
use depviz::graph::DepGraph;
use depviz::visualization::to_plantuml;

fn main() {
    let graph: DepGraph = [
        ("a", vec!["b".to_string()]),
        ("b", vec!["a".to_string(), "c".to_string()]),
    ]
    .into_iter()
    .collect();

    print!("{}", to_plantuml(&graph, Some("a")));
}

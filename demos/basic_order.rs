//! Resolve and print the load order of a small in-memory graph.
//!
//! Run with: `cargo run --example basic_order`
use depviz::graph::{resolver, DepGraph};

fn main() {
    let graph: DepGraph = [
        ("app", vec!["http".to_string(), "fs".to_string()]),
        ("http", vec!["net".to_string(), "fs".to_string()]),
        ("net", vec![]),
        ("fs", vec![]),
    ]
    .into_iter()
    .collect();

    let res = resolver::resolve_all("app", &graph);
    println!("load order:");
    for name in &res.order {
        println!("  {name}");
    }
    for cycle in &res.cycles {
        println!("cycle: {}", cycle.join(" -> "));
    }
}

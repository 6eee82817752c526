//! Iterative depth-first traversal with substring filtering.
//!
//! `Dfs` walks the graph with an explicit stack and yields visit steps
//! lazily, so callers can print, collect, or stop early without the engine
//! doing any I/O of its own.
use std::collections::HashSet;

use crate::graph::{DepGraph, NameFilter};

/// One step of an iterative traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit<'a> {
    /// First arrival at a node, in traversal order.
    Node(&'a str),
    /// The node was popped again after having been visited already.
    Cycle(&'a str),
}

impl<'a> Visit<'a> {
    #[must_use]
    pub fn name(&self) -> &'a str {
        match self {
            Visit::Node(n) | Visit::Cycle(n) => n,
        }
    }
}

/// Stack-based depth-first traversal over a `DepGraph`.
///
/// Children are pushed in adjacency-list order, so among unvisited siblings
/// the LAST-listed child is visited first. That reversed order is an
/// intentional artifact of the stack discipline and is kept for output
/// parity; the tree renderer is the component that reads in declaration
/// order.
pub struct Dfs<'a> {
    graph: &'a DepGraph,
    stack: Vec<&'a str>,
    visited: HashSet<String>,
    filter: NameFilter,
}

impl<'a> Dfs<'a> {
    /// Start a traversal at `start`. A node whose name contains
    /// `exclude_substring` (ignoring case) is skipped entirely: not
    /// emitted, not marked visited, its children never pushed. An empty
    /// substring disables filtering.
    #[must_use]
    pub fn new(graph: &'a DepGraph, start: &'a str, exclude_substring: &str) -> Self {
        Self {
            graph,
            stack: vec![start],
            visited: HashSet::new(),
            filter: NameFilter::new(exclude_substring),
        }
    }
}

impl<'a> Iterator for Dfs<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Visit<'a>> {
        while let Some(node) = self.stack.pop() {
            if self.filter.matches(node) {
                continue;
            }
            if !self.visited.insert(node.to_ascii_lowercase()) {
                // Popped again after a prior visit: report, do not expand.
                return Some(Visit::Cycle(node));
            }
            let graph = self.graph;
            for child in graph.children(node) {
                self.stack.push(child);
            }
            return Some(Visit::Node(node));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(entries: &[(&str, &[&str])]) -> DepGraph {
        entries
            .iter()
            .map(|(k, deps)| (*k, deps.iter().map(|d| (*d).to_string()).collect()))
            .collect()
    }

    fn names(graph: &DepGraph, start: &str, exclude: &str) -> Vec<String> {
        Dfs::new(graph, start, exclude)
            .filter_map(|v| match v {
                Visit::Node(n) => Some(n.to_string()),
                Visit::Cycle(_) => None,
            })
            .collect()
    }

    #[test]
    fn visits_last_listed_child_first() {
        let g = graph(&[("a", &["b", "c"]), ("b", &[]), ("c", &[])]);
        assert_eq!(names(&g, "a", ""), ["a", "c", "b"]);
    }

    #[test]
    fn start_without_children_is_just_start() {
        let g = DepGraph::new();
        assert_eq!(names(&g, "x", ""), ["x"]);
    }

    #[test]
    fn exclude_substring_prunes_whole_subtree() {
        let g = graph(&[("app", &["libc", "util"]), ("libc", &["m"]), ("util", &[])]);
        let visited = names(&g, "app", "lib");
        assert_eq!(visited, ["app", "util"]);
    }

    #[test]
    fn excluded_start_yields_nothing() {
        let g = graph(&[("libfoo", &["a"])]);
        assert!(Dfs::new(&g, "libfoo", "LIB").next().is_none());
    }

    #[test]
    fn revisit_is_reported_as_cycle_step() {
        let g = graph(&[("a", &["b"]), ("b", &["a"])]);
        let steps: Vec<Visit<'_>> = Dfs::new(&g, "a", "").collect();
        assert_eq!(steps, [Visit::Node("a"), Visit::Node("b"), Visit::Cycle("a")]);
    }

    #[test]
    fn diamond_reports_second_arrival_without_reexpansion() {
        let g = graph(&[("a", &["b", "c"]), ("b", &["d"]), ("c", &["d"]), ("d", &["e"])]);
        let steps: Vec<Visit<'_>> = Dfs::new(&g, "a", "").collect();
        // c is popped first (last-listed), so d and e are seen under c and
        // the arrival via b is only a notice.
        assert_eq!(
            steps,
            [
                Visit::Node("a"),
                Visit::Node("c"),
                Visit::Node("d"),
                Visit::Node("e"),
                Visit::Node("b"),
                Visit::Cycle("d"),
            ]
        );
    }

    #[test]
    fn visited_check_ignores_case() {
        let g = graph(&[("a", &["B", "b"]), ("B", &[]), ("b", &[])]);
        let steps: Vec<Visit<'_>> = Dfs::new(&g, "a", "").collect();
        assert_eq!(steps, [Visit::Node("a"), Visit::Node("b"), Visit::Cycle("B")]);
    }

    #[test]
    fn traversal_terminates_on_self_loop() {
        let g = graph(&[("a", &["a", "a"])]);
        let steps: Vec<Visit<'_>> = Dfs::new(&g, "a", "").collect();
        assert_eq!(steps, [Visit::Node("a"), Visit::Cycle("a"), Visit::Cycle("a")]);
    }
}

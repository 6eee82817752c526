//! ASCII-art rendering of a dependency tree.
//!
//! Output uses box-drawing branch glyphs, one line per node:
//!
//! ```text
//! app
//! ├─ http
//! │  └─ net
//! └─ fs
//! ```
//!
//! A child equal to an ancestor still open on the recursive path is printed
//! with a `(cycle)` marker and not expanded; the same package appearing in
//! two disjoint branches is rendered normally in both.
use std::collections::HashSet;

use crate::graph::DepGraph;

const BRANCH: &str = "├─ ";
const BRANCH_LAST: &str = "└─ ";
const INDENT: &str = "│  ";
const INDENT_LAST: &str = "   ";

struct Renderer<'a, F> {
    graph: &'a DepGraph,
    max_depth: usize,
    exclude: F,
    // lowercased names of the ancestors currently open
    open: HashSet<String>,
    lines: Vec<String>,
}

impl<F: Fn(&str) -> bool> Renderer<'_, F> {
    fn walk(&mut self, node: &str, prefix: &str, last: bool, depth: usize) {
        if depth > self.max_depth {
            return;
        }
        if (self.exclude)(node) {
            return;
        }

        let glyph = if last { BRANCH_LAST } else { BRANCH };
        let key = node.to_ascii_lowercase();
        if self.open.contains(&key) {
            self.lines.push(format!("{prefix}{glyph}{node}  (cycle)"));
            return;
        }
        self.lines.push(format!("{prefix}{glyph}{node}"));

        let children = self.graph.children(node);
        if children.is_empty() {
            return;
        }
        self.open.insert(key.clone());
        let child_prefix = format!("{prefix}{}", if last { INDENT_LAST } else { INDENT });
        for (i, child) in children.iter().enumerate() {
            self.walk(child, &child_prefix, i + 1 == children.len(), depth + 1);
        }
        self.open.remove(&key);
    }
}

/// Render the dependency tree rooted at `root` as a sequence of lines.
///
/// The root line is always emitted first, unconditionally: neither the
/// depth limit nor the exclusion predicate applies to it. Children are
/// rendered in adjacency-list order so the tree reads top to bottom in
/// declaration order.
pub fn render<F: Fn(&str) -> bool>(
    root: &str,
    graph: &DepGraph,
    max_depth: usize,
    exclude: F,
) -> Vec<String> {
    let mut r = Renderer {
        graph,
        max_depth,
        exclude,
        open: HashSet::from([root.to_ascii_lowercase()]),
        lines: vec![root.to_string()],
    };
    let children = graph.children(root);
    for (i, child) in children.iter().enumerate() {
        r.walk(child, "", i + 1 == children.len(), 1);
    }
    r.lines
}

/// `render` without depth or exclusion limits.
pub fn render_all(root: &str, graph: &DepGraph) -> Vec<String> {
    render(root, graph, usize::MAX, |_| false)
}

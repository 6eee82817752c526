//! PlantUML export and delegation to the external rasterizer.
//!
//! `to_plantuml` produces the textual diagram source; `render_svg` hands a
//! previously written source file to the `plantuml` executable. Rasterizer
//! problems (missing tool, non-zero exit) come back as a
//! `DepVizError::Render` value carrying the captured diagnostics, so a
//! pipeline can report the failure and keep going.
use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::Path;

use crate::errors::DepVizError;
use crate::graph::DepGraph;

/// Generate PlantUML source for the whole graph.
///
/// The node set is the union of all keys and all dependency values, so leaf
/// packages that are never keys still appear. Nodes and edges are emitted
/// in sorted-key order, which is stable for a given input but is not the
/// insertion order. When `highlight_root` names a node
/// (case-insensitively), that node is filled `#LightBlue`.
#[must_use]
pub fn to_plantuml(graph: &DepGraph, highlight_root: Option<&str>) -> String {
    let mut s = String::new();
    s.push_str("@startuml\n");
    s.push_str("skinparam dpi 160\n");
    s.push_str("skinparam linetype ortho\n");
    s.push_str("skinparam ArrowColor #777777\n");
    s.push_str("skinparam ArrowThickness 1\n");

    let mut nodes: BTreeSet<&str> = BTreeSet::new();
    for (pkg, deps) in graph.entries() {
        nodes.insert(pkg.as_str());
        for d in deps {
            nodes.insert(d.as_str());
        }
    }

    for n in &nodes {
        let is_root = highlight_root.is_some_and(|r| r.eq_ignore_ascii_case(n));
        if is_root {
            let _ = writeln!(s, "node \"{n}\" as {} #LightBlue", sanitize_id(n));
        } else {
            let _ = writeln!(s, "node \"{n}\" as {}", sanitize_id(n));
        }
    }

    let mut keys: Vec<&String> = graph.entries().map(|(k, _)| k).collect();
    keys.sort();
    for pkg in keys {
        for dep in graph.children(pkg) {
            let _ = writeln!(s, "{} --> {}", sanitize_id(pkg), sanitize_id(dep));
        }
    }

    s.push_str("@enduml\n");
    s
}

/// Write PlantUML source to `path`, creating parent directories as needed.
///
/// # Errors
/// Returns `DepVizError::Io` when the directory or file cannot be written.
pub fn write_puml(path: &Path, source: &str) -> Result<(), DepVizError> {
    crate::utils::paths::ensure_parent_dir(path)?;
    std::fs::write(path, source)?;
    Ok(())
}

/// Rasterize a previously written PlantUML file to SVG next to `svg_path`.
///
/// Invokes `plantuml -tsvg <puml_path> -o <dir of svg_path>` and blocks
/// until it exits. This is a single best-effort attempt: there is no
/// timeout and no retry.
///
/// # Errors
/// Returns `DepVizError::Render` when the tool cannot be spawned or exits
/// non-zero; the message carries the combined stderr and stdout text.
pub fn render_svg(puml_path: &Path, svg_path: &Path) -> Result<(), DepVizError> {
    let out_dir = svg_path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let output = std::process::Command::new("plantuml")
        .arg("-tsvg")
        .arg(puml_path)
        .arg("-o")
        .arg(out_dir)
        .output()
        .map_err(|e| DepVizError::Render(format!("failed to run 'plantuml': {e}")))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let diag = format!("{}\n{}", stderr.trim(), stdout.trim());
        return Err(DepVizError::Render(diag.trim().to_string()));
    }
    Ok(())
}

/// Map a package name to a diagram-safe identifier: letters, digits and
/// underscores pass through, everything else becomes an underscore. Two
/// names may collide after sanitization; the last declaration wins in the
/// generated source.
fn sanitize_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len() + 2);
    id.push_str("N_");
    id.extend(name.chars().map(|c| match c {
        'a'..='z' | 'A'..='Z' | '0'..='9' | '_' => c,
        _ => '_',
    }));
    id
}

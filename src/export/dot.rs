use std::fmt::Write;

use petgraph::stable_graph::NodeIndex;
use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use crate::graph::ResourceGraph;

/// Sanitize a string for use as a DOT node ID.
///
/// Replaces non-alphanumeric characters with `_`. Prepends `n` if the result
/// starts with a digit (DOT IDs must not start with a digit).
pub fn sanitize_dot_id(s: &str) -> String {
    let mut result: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, 'n');
    }
    if result.is_empty() {
        result = "node".to_string();
    }
    result
}

/// DOT ID for a vertex: its sanitized display name, suffixed with the vertex
/// index so nodes sharing a display name stay distinct.
fn node_id(idx: NodeIndex, name: &str) -> String {
    format!("{}_{}", sanitize_dot_id(name), idx.index())
}

/// Render the resource graph as DOT.
///
/// One node per vertex labelled with its display name, one edge per
/// DependsOn relation, dependent pointing at dependency. Debug aid for
/// inspecting what the transformers produced; the executor never reads this.
pub fn render_dot(graph: &ResourceGraph) -> String {
    let mut out = String::new();
    writeln!(out, "digraph resource_graph {{").unwrap();
    writeln!(out, "    rankdir=TB;").unwrap();
    writeln!(out, "    node [style=filled fontname=monospace fillcolor=\"#AED6F1\"];").unwrap();

    for idx in graph.graph.node_indices() {
        let label = graph.graph[idx].name();
        writeln!(
            out,
            "    {} [label=\"{}\"];",
            node_id(idx, &label),
            label.replace('"', "\\\"")
        )
        .unwrap();
    }

    for edge in graph.graph.edge_references() {
        let source = node_id(edge.source(), &graph.graph[edge.source()].name());
        let target = node_id(edge.target(), &graph.graph[edge.target()].name());
        writeln!(out, "    {} -> {};", source, target).unwrap();
    }

    writeln!(out, "}}").unwrap();
    out
}

use std::collections::HashMap;

use anyhow::Result;
use petgraph::stable_graph::NodeIndex;

use crate::graph::ResourceGraph;
use crate::graph::node::GraphNode;
use crate::path::{module_prefix_str, normalize_module_path};
use crate::transform::GraphTransformer;

/// Connects every node that references another node by name, turning the
/// symbolic references in the configuration into the directed edges the
/// execution engine orders itself by.
///
/// Running the transformer twice over an unchanged vertex set yields the same
/// dependency relation: the index and the resolver are pure functions of the
/// vertex snapshot, and edge insertion is idempotent.
pub struct ReferenceTransformer;

impl GraphTransformer for ReferenceTransformer {
    fn transform(&self, graph: &mut ResourceGraph) -> Result<()> {
        // Resolve against a snapshot of the vertex set, collecting the edges
        // to insert before mutating (the map borrows the graph immutably).
        let vertices = graph.vertices();
        let resolved: Vec<(NodeIndex, Vec<NodeIndex>)> = {
            let map = ReferenceMap::new(graph, &vertices);
            vertices
                .iter()
                .map(|&v| (v, map.references(v).0))
                .collect()
        };

        for (dependent, dependencies) in resolved {
            for dependency in dependencies {
                graph.connect(dependent, dependency)?;
            }
        }

        Ok(())
    }
}

/// A per-pass index from fully qualified referenceable name to the vertices
/// registered under that name.
///
/// Built fresh from a vertex snapshot at the start of each transform pass and
/// discarded with it. A name maps to a *list* of vertices, not a set: several
/// nodes may legitimately register the same name (e.g. expanded instances of
/// one declared resource), and ambiguity is preserved rather than rejected.
/// Bucket order follows the snapshot's vertex order, so output is
/// deterministic given deterministic input.
pub struct ReferenceMap<'a> {
    graph: &'a ResourceGraph,
    buckets: HashMap<String, Vec<NodeIndex>>,
}

impl<'a> ReferenceMap<'a> {
    /// Index every referenceable name registered by the given vertices.
    /// Vertices without the `Referenceable` capability contribute nothing.
    pub fn new(graph: &'a ResourceGraph, vertices: &[NodeIndex]) -> Self {
        let mut buckets: HashMap<String, Vec<NodeIndex>> = HashMap::new();

        for &v in vertices {
            let Some(node) = graph.node(v) else { continue };
            let Some(referenceable) = node.as_referenceable() else {
                continue;
            };

            let prefix = reference_prefix(node);
            for name in referenceable.referenceable_names() {
                buckets.entry(format!("{prefix}{name}")).or_default().push(v);
            }
        }

        Self { graph, buckets }
    }

    /// Resolve the references of one vertex.
    ///
    /// Returns the vertices it depends on and the qualified names that
    /// matched nothing. A vertex without the `Referencer` capability yields
    /// empty lists. Missing names are data, not errors: a reference may be
    /// satisfied by a later pass, or surfaced as a validation problem by a
    /// layer above.
    pub fn references(&self, v: NodeIndex) -> (Vec<NodeIndex>, Vec<String>) {
        let Some(node) = self.graph.node(v) else {
            return (Vec::new(), Vec::new());
        };
        let Some(referencer) = node.as_referencer() else {
            return (Vec::new(), Vec::new());
        };

        let mut matches = Vec::new();
        let mut missing = Vec::new();

        let prefix = reference_prefix(node);
        for raw in referencer.references() {
            let name = format!("{prefix}{raw}");
            let Some(bucket) = self.buckets.get(&name) else {
                missing.push(name);
                continue;
            };

            // A bucket containing the referencing vertex itself is a
            // self-reference: the node consumes a name it also registers.
            // The whole reference is discarded, including any other vertices
            // sharing the bucket, so no self-loop is ever introduced. This
            // can suppress a valid cross-dependency that shares a name with
            // a self-reference. Relaxing it to skip only the vertex itself
            // would change plan ordering for configurations that rely on
            // the current behavior, so keep it as-is.
            if bucket.contains(&v) {
                continue;
            }

            matches.extend_from_slice(bucket);
        }

        (matches, missing)
    }
}

/// The module prefix under which a node registers and resolves names.
///
/// A node claiming `GlobalReference` uses names verbatim, since they are
/// already fully qualified. Otherwise a node nested more than one level
/// deep (after normalization) gets its non-root path segments dot-joined
/// with a trailing dot; root-scope nodes get no prefix. The same rule
/// qualifies both the
/// names a node registers and the names it consumes, so references resolve
/// relative to the node's own scope unless it opts into global naming.
fn reference_prefix(node: &dyn GraphNode) -> String {
    if let Some(global) = node.as_global_reference()
        && global.reference_global()
    {
        return String::new();
    }

    if let Some(sub_path) = node.as_sub_path() {
        let path = normalize_module_path(sub_path.path());
        if path.len() > 1 {
            return format!("{}.", module_prefix_str(&path));
        }
    }

    String::new()
}

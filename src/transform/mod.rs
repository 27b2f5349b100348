pub mod reference;

pub use reference::{ReferenceMap, ReferenceTransformer};

use anyhow::Result;

use crate::graph::ResourceGraph;

/// A step that rewrites the resource graph in place.
///
/// Transformers run in sequence while the graph is being assembled; each one
/// sees the vertex set its predecessors left behind. A transformer may add
/// edges (or nodes) but is expected never to remove information another step
/// put there.
pub trait GraphTransformer {
    fn transform(&self, graph: &mut ResourceGraph) -> Result<()>;
}

pub mod edge;
pub mod node;

use anyhow::{Result, ensure};
use petgraph::Directed;
use petgraph::Direction;
use petgraph::stable_graph::StableGraph;
pub use petgraph::stable_graph::NodeIndex;

use edge::EdgeKind;
use node::GraphNode;

/// The in-memory resource graph: a directed petgraph StableGraph whose
/// vertices are trait objects supplied by the consumer.
///
/// `StableGraph` keeps node indices stable across mutation, so a `NodeIndex`
/// is the node's identity for the lifetime of the graph — two indices compare
/// equal exactly when they name the same logical node.
pub struct ResourceGraph {
    /// The underlying directed graph, parameterised over node and edge kinds.
    pub graph: StableGraph<Box<dyn GraphNode>, EdgeKind, Directed>,
}

impl ResourceGraph {
    /// Create an empty resource graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
        }
    }

    /// Add a node to the graph. Returns the new node's index.
    pub fn add_node(&mut self, node: Box<dyn GraphNode>) -> NodeIndex {
        self.graph.add_node(node)
    }

    /// Borrow the node behind an index, if it is still in the graph.
    pub fn node(&self, idx: NodeIndex) -> Option<&dyn GraphNode> {
        self.graph.node_weight(idx).map(|n| n.as_ref())
    }

    /// Snapshot of the current vertex set, in index order.
    pub fn vertices(&self) -> Vec<NodeIndex> {
        self.graph.node_indices().collect()
    }

    /// Insert a directed Dependent -> Dependency edge.
    ///
    /// Inserting the same edge twice is a no-op (`update_edge`), so callers
    /// may connect the same pair once per resolved reference without growing
    /// the edge set. Fails if either endpoint is no longer in the graph,
    /// the one structural failure this crate can surface.
    pub fn connect(&mut self, dependent: NodeIndex, dependency: NodeIndex) -> Result<()> {
        ensure!(
            self.graph.contains_node(dependent),
            "cannot connect: dependent vertex {:?} is not in the graph",
            dependent
        );
        ensure!(
            self.graph.contains_node(dependency),
            "cannot connect: dependency vertex {:?} is not in the graph",
            dependency
        );
        self.graph.update_edge(dependent, dependency, EdgeKind::DependsOn);
        Ok(())
    }

    /// Whether a DependsOn edge exists from `dependent` to `dependency`.
    pub fn depends_on(&self, dependent: NodeIndex, dependency: NodeIndex) -> bool {
        self.graph.contains_edge(dependent, dependency)
    }

    /// The direct dependencies of a node (targets of its outgoing edges).
    pub fn dependencies_of(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.graph
            .neighbors_directed(idx, Direction::Outgoing)
            .collect()
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for ResourceGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// The kind of directed edge between two nodes in the resource graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeKind {
    /// Dependent -> Dependency: the source node must be processed after the
    /// target node by whatever walks the graph (plan, apply, destroy).
    DependsOn,
}

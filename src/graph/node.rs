/// A vertex in the resource graph — a resource, module, input variable, or
/// any other configuration element the consumer defines.
///
/// Concrete node types live outside this crate. The base trait only demands a
/// display name; everything else is an optional capability that resolution
/// code discovers through the `as_*` accessors. The default accessors return
/// `None`, so a node type opts into exactly the capabilities it supports and
/// the resolver never has to inspect concrete types.
pub trait GraphNode {
    /// Display name used for diagnostics and DOT export.
    fn name(&self) -> String;

    /// The node can be depended upon by name.
    fn as_referenceable(&self) -> Option<&dyn Referenceable> {
        None
    }

    /// The node depends on other nodes by name.
    fn as_referencer(&self) -> Option<&dyn Referencer> {
        None
    }

    /// The node may opt out of hierarchical name prefixing.
    fn as_global_reference(&self) -> Option<&dyn GlobalReference> {
        None
    }

    /// The node knows which module scope it lives in.
    fn as_sub_path(&self) -> Option<&dyn SubPath> {
        None
    }
}

/// Implemented by nodes that other nodes may depend on.
pub trait Referenceable {
    /// The local names this node answers to. A node may register several —
    /// e.g. both `"aws_instance.web"` and `"aws_instance.web.id"`. Names are
    /// qualified with the node's module prefix before indexing.
    fn referenceable_names(&self) -> Vec<String>;
}

/// Implemented by nodes that depend on other nodes.
pub trait Referencer {
    /// The raw names this node consumes, in the same local form that
    /// [`Referenceable::referenceable_names`] produces. Each name is
    /// qualified with the node's own module prefix before lookup, so
    /// references resolve relative to the node's scope.
    fn references(&self) -> Vec<String>;
}

/// Opt-out of hierarchical prefixing.
///
/// When `reference_global` returns `true`, the node's referenceable names and
/// references are treated as already fully qualified (`"net.aws_subnet.a"`
/// rather than `"aws_subnet.a"` inside module `net`). This lets a node name
/// things across module boundaries; the primary use case is wiring module
/// input variables to values in the parent scope.
pub trait GlobalReference {
    fn reference_global(&self) -> bool;
}

/// Exposes the node's module path, e.g. `["root", "net"]` for a node declared
/// inside module `net`. Paths are normalized before use; see
/// [`crate::path::normalize_module_path`].
pub trait SubPath {
    fn path(&self) -> &[String];
}

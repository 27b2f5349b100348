//! Reference resolution for infrastructure dependency graphs.
//!
//! An infrastructure description is a set of nodes — resources, modules,
//! input variables — that name each other symbolically ("aws_instance.web",
//! "var.region", "module.net.output.id"). This crate turns those symbolic
//! names into directed edges so a downstream executor can walk the graph in
//! dependency order.
//!
//! The pipeline has three parts:
//!
//! 1. Node types implement the capability traits in [`graph::node`]
//!    ([`Referenceable`], [`Referencer`], [`GlobalReference`], [`SubPath`])
//!    to declare what names they answer to and what names they consume.
//! 2. [`interpolation::references_from_config`] translates a parsed
//!    configuration's interpolated variables into flat reference strings for
//!    [`Referencer`] implementations to hand out.
//! 3. [`ReferenceTransformer`] indexes every referenceable name in the graph
//!    and inserts a Dependent → Dependency edge for every reference that
//!    resolves, reporting the ones that don't.
//!
//! Cycle detection, execution order, and validation of unresolved names are
//! all left to the consumer — this crate only builds the edges.

pub mod export;
pub mod graph;
pub mod interpolation;
pub mod path;
pub mod transform;

pub use export::render_dot;
pub use graph::edge::EdgeKind;
pub use graph::{NodeIndex, ResourceGraph};
pub use graph::node::{GlobalReference, GraphNode, Referenceable, Referencer, SubPath};
pub use interpolation::{reference_from_interpolated_var, references_from_config};
pub use transform::GraphTransformer;
pub use transform::reference::{ReferenceMap, ReferenceTransformer};

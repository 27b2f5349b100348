//! Translation from a parsed configuration's interpolated variables to the
//! flat reference strings the resolver consumes.
//!
//! Configuration parsing happens upstream; what arrives here is the ordered
//! list of `${...}` variables a block interpolates, each tagged by kind.
//! [`Referencer`](crate::graph::node::Referencer) implementations call
//! [`references_from_config`] to turn that list into reference names; the
//! resolver itself never looks at configuration.

use serde::{Deserialize, Serialize};

/// The interpolation-relevant slice of a parsed configuration block: its
/// interpolated variables, in encounter order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawConfig {
    pub variables: Vec<InterpolatedVariable>,
}

/// One interpolated variable, tagged by kind. Closed set: new kinds get a
/// variant here, and kinds that don't name a dependency simply produce no
/// reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolatedVariable {
    /// An output of a child module: `${module.net.id}`.
    Module(ModuleVariable),
    /// An attribute of another resource: `${aws_instance.web.private_ip}`.
    Resource(ResourceVariable),
    /// An input variable: `${var.region}`.
    User(UserVariable),
    /// The expansion index of the current resource: `${count.index}`.
    Count(CountVariable),
    /// A filesystem path of the configuration: `${path.module}`.
    Path(PathVariable),
    /// A bare key with no recognized namespace: `${key}`.
    Simple(SimpleVariable),
}

/// Reference to an output of a child module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleVariable {
    /// The module's declared name.
    pub name: String,
    /// The output field being read.
    pub field: String,
}

/// Reference to an attribute of another resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceVariable {
    /// The resource type, e.g. `"aws_instance"`.
    pub resource_type: String,
    /// The resource's declared name.
    pub name: String,
    /// The attribute being read, if any.
    #[serde(default)]
    pub field: Option<String>,
    /// The instance index for multi-count resources, if written explicitly.
    #[serde(default)]
    pub index: Option<usize>,
}

impl ResourceVariable {
    /// The canonical identifier of the resource this variable reads, e.g.
    /// `"aws_instance.web"`. This is the name the resource registers as
    /// referenceable, regardless of which attribute or index is interpolated.
    pub fn resource_id(&self) -> String {
        format!("{}.{}", self.resource_type, self.name)
    }
}

/// Reference to an input variable of the current module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserVariable {
    pub name: String,
}

/// The `count.*` namespace. Never a dependency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountVariable {
    pub field: String,
}

/// The `path.*` namespace. Never a dependency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathVariable {
    pub field: String,
}

/// A bare interpolation key. Never a dependency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleVariable {
    pub key: String,
}

/// The reference names a configuration depends on, in encounter order.
/// Variable kinds that name no dependency are skipped.
pub fn references_from_config(config: &RawConfig) -> Vec<String> {
    config
        .variables
        .iter()
        .filter_map(reference_from_interpolated_var)
        .collect()
}

/// The reference name a single interpolated variable points at, or `None`
/// for kinds that don't name another node.
pub fn reference_from_interpolated_var(var: &InterpolatedVariable) -> Option<String> {
    match var {
        InterpolatedVariable::Module(v) => Some(format!("module.{}.output.{}", v.name, v.field)),
        InterpolatedVariable::Resource(v) => Some(v.resource_id()),
        InterpolatedVariable::User(v) => Some(format!("var.{}", v.name)),
        InterpolatedVariable::Count(_)
        | InterpolatedVariable::Path(_)
        | InterpolatedVariable::Simple(_) => None,
    }
}

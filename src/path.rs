//! Module path normalization.
//!
//! A node's scope is an ordered list of module names rooted at
//! [`ROOT_MODULE`]. Configuration loaders sometimes hand out paths without
//! the root segment, so every consumer normalizes before comparing or
//! deriving prefixes.

/// Name of the root module, the implicit top of every module path.
pub const ROOT_MODULE: &str = "root";

/// Normalize a module path so it always starts with [`ROOT_MODULE`].
///
/// `["net"]` and `["root", "net"]` describe the same scope; this collapses
/// them to the latter. An empty path normalizes to the root module itself.
pub fn normalize_module_path(path: &[String]) -> Vec<String> {
    if path.first().map(String::as_str) == Some(ROOT_MODULE) {
        return path.to_vec();
    }
    let mut normalized = Vec::with_capacity(path.len() + 1);
    normalized.push(ROOT_MODULE.to_string());
    normalized.extend_from_slice(path);
    normalized
}

/// Dot-join every segment of a normalized path except the root.
///
/// `["root", "net", "dmz"]` -> `"net.dmz"`. A path of depth <= 1 yields the
/// empty string: nodes at the root scope carry no prefix.
pub fn module_prefix_str(path: &[String]) -> String {
    path.get(1..).unwrap_or_default().join(".")
}

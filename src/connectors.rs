//! Built-in endpoint catalogs embedded in the binary
//!
//! Catalog YAML files are compiled in so that `--endpoints facebook-graph`
//! works without a file on disk.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Name of the catalog used when none is given
pub const DEFAULT_CATALOG: &str = "facebook-graph";

/// Built-in catalog YAML definitions
pub static BUILTIN_CATALOGS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();
        m.insert(
            "facebook-graph",
            include_str!("../connectors/facebook-graph.yaml"),
        );
        m
    });

/// Get a built-in catalog's YAML by name
pub fn get_builtin(name: &str) -> Option<&'static str> {
    BUILTIN_CATALOGS.get(name).copied()
}

/// List built-in catalog names, sorted
pub fn list_builtin() -> Vec<&'static str> {
    let mut names: Vec<_> = BUILTIN_CATALOGS.keys().copied().collect();
    names.sort_unstable();
    names
}

//! Externals classification for node and library bundles

use std::collections::BTreeMap;
use tracing::debug;

use crate::plugin::FRAMEWORK;
use crate::types::TargetDescriptor;

/// Framework runtime packages that must never end up inside a bundle when the
/// consumer is expected to provide them.
pub const EXTERNAL_MODULES: [&str; 1] = ["angular"];

/// Packages excluded from a bundle, keyed by name with their runtime format
/// declaration (`"commonjs <name>"`).
pub type Externals = BTreeMap<String, String>;

/// Exclude the framework runtime from node and library bundles.
///
/// Browser applications bundle the runtime and pass through unchanged. The
/// operation is idempotent: re-running writes the same key with the same
/// value, and entries added by the host are preserved.
pub fn classify_externals(externals: Externals, target: &TargetDescriptor) -> Externals {
    if !target.uses_framework(FRAMEWORK) || !(target.is.node || target.library) {
        return externals;
    }
    debug!("Excluding the framework runtime from the {} bundle", target.name);

    let mut externals = externals;
    for name in EXTERNAL_MODULES {
        externals.insert(name.to_string(), format!("commonjs {name}"));
    }
    externals
}

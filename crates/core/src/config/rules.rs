//! Module-rule rewriting for browser targets
//!
//! Injects the annotation loader at the head of the script rule's loader
//! chain. Loaders run bottom-up, so the entry at index zero is applied last
//! and sees code the transpiler has already down-leveled.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::presets::{merge_loader_entry, TranspilerOptions};
use crate::plugin::FRAMEWORK;
use crate::types::TargetDescriptor;

/// Loader that rewrites dependency-injection call sites with explicit names.
pub const ANNOTATION_LOADER: &str = "ng-annotate-loader";

/// General-purpose transpiler loader whose options may need adjusting.
pub const TRANSPILER_LOADER: &str = "babel-loader";

/// One entry of the bundler's module-rule list.
///
/// Only the loader chain is interpreted here; `test` patterns and anything
/// else the host configured pass through the flattened extras untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleRule {
    #[serde(rename = "use", default, skip_serializing_if = "Vec::is_empty")]
    pub loaders: Vec<LoaderEntry>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// A loader reference inside a module rule: a bare name, or a record with
/// inline options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LoaderEntry {
    Name(String),
    Configured(LoaderConfig),
}

impl LoaderEntry {
    /// The loader's name regardless of representation.
    pub fn loader_name(&self) -> &str {
        match self {
            LoaderEntry::Name(name) => name,
            LoaderEntry::Configured(config) => &config.loader,
        }
    }
}

/// A loader record carrying inline options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    pub loader: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<TranspilerOptions>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// Inject the annotation loader into a browser target's script rule.
///
/// Host contract: the first rule in the list is the one compiling script
/// files, so only that rule is touched. When its chain also carries the
/// transpiler loader, the transpiler's inline options are merged so the
/// injected annotations survive down-leveling. Targets that are not
/// browser-side AngularJS get the list back unchanged.
///
/// Each call prepends the annotation loader again; the host fires the rule
/// event once per configuration pass, so repeated application on one chain
/// is outside the contract.
pub fn rewrite_browser_rules(
    rules: Vec<ModuleRule>,
    target: &TargetDescriptor,
) -> Vec<ModuleRule> {
    if !target.is.browser || !target.uses_framework(FRAMEWORK) || rules.is_empty() {
        return rules;
    }
    debug!("Injecting {} into the script rule of {}", ANNOTATION_LOADER, target.name);

    let mut rules = rules;
    let first = &mut rules[0];

    let mut chain = Vec::with_capacity(first.loaders.len() + 1);
    chain.push(LoaderEntry::Name(ANNOTATION_LOADER.to_string()));
    chain.append(&mut first.loaders);

    for entry in chain.iter_mut() {
        if entry.loader_name() == TRANSPILER_LOADER {
            *entry = merge_loader_entry(entry.clone());
            break;
        }
    }

    first.loaders = chain;
    rules
}

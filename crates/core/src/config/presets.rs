//! Transpiler preset merging
//!
//! The annotation loader only understands plain `function` statements, so the
//! transpiler has to down-level arrow functions, classes and shorthand
//! parameters before annotations can be injected. The merge rules here add
//! those features to an existing preset configuration without duplicating or
//! reordering anything the user already wrote.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::rules::{LoaderConfig, LoaderEntry};
use crate::plugin::FRAMEWORK;
use crate::types::TargetDescriptor;

/// Preset id of the environment preset responsible for feature down-leveling.
pub const ENV_PRESET: &str = "env";

/// Features the environment preset must include for annotation injection to work.
pub const REQUIRED_ENV_FEATURES: [&str; 3] = [
    "transform-es2015-arrow-functions",
    "transform-es2015-classes",
    "transform-es2015-parameters",
];

/// Id of the compiler plugin that rewrites dependency-injection call sites.
pub const ANNOTATION_PLUGIN: &str = "angularjs-annotate";

/// Inline options of the transpiler, as found on a loader entry or handed over
/// directly by the compiler-configuration event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranspilerOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presets: Option<Vec<TransformEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<TransformEntry>>,
    /// Fields this plugin does not interpret; passed through untouched.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// A preset or plugin reference: either a bare id or an `[id, options]` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransformEntry {
    Id(String),
    Configured(String, TransformOptions),
}

impl TransformEntry {
    /// The entry's id regardless of representation.
    pub fn id(&self) -> &str {
        match self {
            TransformEntry::Id(id) => id,
            TransformEntry::Configured(id, _) => id,
        }
    }
}

/// Options attached to a preset or plugin entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl TranspilerOptions {
    /// Merge the required environment-preset features into these options.
    ///
    /// When no presets are configured the environment preset is synthesized
    /// with the features as its `include` list. When presets exist but none
    /// uses the reserved id, the list is deliberately left alone: appending a
    /// preset would mean guessing where the user wants it to run.
    pub fn with_env_features(mut self, features: &[&str]) -> Self {
        if self.presets.is_none() {
            self.presets = Some(vec![env_preset_entry(features)]);
        } else if let Some(presets) = self.presets.as_mut() {
            if presets.is_empty() {
                presets.push(env_preset_entry(features));
            } else if let Some(entry) =
                presets.iter_mut().find(|entry| entry.id() == ENV_PRESET)
            {
                *entry = merge_env_entry(entry.clone(), features);
            }
        }
        self
    }

    /// Append a compiler plugin unless one with the same id is already listed.
    pub fn with_plugin(mut self, plugin: TransformEntry) -> Self {
        let plugins = self.plugins.get_or_insert_with(Vec::new);
        if !plugins.iter().any(|entry| entry.id() == plugin.id()) {
            plugins.push(plugin);
        }
        self
    }
}

/// Build the environment preset entry with the given `include` list.
fn env_preset_entry(features: &[&str]) -> TransformEntry {
    TransformEntry::Configured(
        ENV_PRESET.to_string(),
        TransformOptions {
            include: Some(features.iter().map(|feature| (*feature).to_string()).collect()),
            rest: Map::new(),
        },
    )
}

/// Fold the required features into an existing environment preset entry.
///
/// A pre-existing `include` list keeps its order; missing features are
/// appended at the end. Every other option field on the entry is preserved.
fn merge_env_entry(entry: TransformEntry, features: &[&str]) -> TransformEntry {
    let (id, mut options) = match entry {
        TransformEntry::Id(id) => (id, TransformOptions::default()),
        TransformEntry::Configured(id, options) => (id, options),
    };

    if options.include.is_none() {
        options.include = Some(features.iter().map(|feature| (*feature).to_string()).collect());
    } else if let Some(include) = options.include.as_mut() {
        for feature in features {
            if !include.iter().any(|existing| existing == feature) {
                include.push((*feature).to_string());
            }
        }
    }

    TransformEntry::Configured(id, options)
}

/// The annotation compiler plugin in its `[id, options]` form.
///
/// `explicitOnly` limits the rewrite to call sites marked for injection.
pub fn annotation_plugin() -> TransformEntry {
    let mut rest = Map::new();
    rest.insert("explicitOnly".to_string(), Value::Bool(true));
    TransformEntry::Configured(
        ANNOTATION_PLUGIN.to_string(),
        TransformOptions { include: None, rest },
    )
}

/// Rework a transpiler loader entry so annotation injection will work.
///
/// A bare loader name or a record without inline options means the transpiler
/// is configured from an external file; those pass through unchanged since no
/// configuration should be synthesized on the loader's behalf.
pub fn merge_loader_entry(entry: LoaderEntry) -> LoaderEntry {
    match entry {
        LoaderEntry::Configured(config) if config.options.is_some() => {
            let LoaderConfig { loader, options, rest } = config;
            debug!("Merging required env features into the {loader} options");
            let options = options.map(|options| options.with_env_features(&REQUIRED_ENV_FEATURES));
            LoaderEntry::Configured(LoaderConfig { loader, options, rest })
        }
        other => other,
    }
}

/// Reducer for the compiler-configuration event.
///
/// Applies the same environment-feature merge as the loader path, then
/// registers the annotation plugin on the configuration's plugin list.
pub fn update_compiler_configuration(
    configuration: TranspilerOptions,
    target: &TargetDescriptor,
) -> TranspilerOptions {
    if !target.uses_framework(FRAMEWORK) {
        return configuration;
    }
    debug!("Adding annotation support to the compiler configuration of {}", target.name);
    configuration
        .with_env_features(&REQUIRED_ENV_FEATURES)
        .with_plugin(annotation_plugin())
}

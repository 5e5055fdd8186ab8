//! Configuration reducers that add AngularJS dependency-injection annotation
//! support to targets built through an event-driven bundler host.
//!
//! The host fires named configuration events; this crate provides:
//! - Loader-chain rewriting so script sources run through the annotation loader
//! - Transpiler preset merging so feature down-leveling keeps annotations injectable
//! - Default-HTML bootstrap markup derivation for browser targets
//! - Externals classification so node and library bundles leave the runtime out
pub mod config;
pub mod error;
pub mod events;
pub mod plugin;
pub mod types;

// Re-export commonly used types and the reducer entry points
pub use error::{Error, Result};
pub use events::Events;
pub use types::*;

pub use config::externals::{classify_externals, Externals};
pub use config::html::{compose_html_settings, HtmlSettings};
pub use config::presets::{
    merge_loader_entry, update_compiler_configuration, TransformEntry, TransformOptions,
    TranspilerOptions,
};
pub use config::rules::{rewrite_browser_rules, LoaderConfig, LoaderEntry, ModuleRule};
pub use plugin::{load, AngularJsPlugin};

//! Configuration surfaces the plugin rewrites

pub mod externals;
pub mod html;
pub mod presets;
pub mod rules;

// Re-export main types
pub use externals::Externals;
pub use html::HtmlSettings;
pub use presets::{TransformEntry, TransformOptions, TranspilerOptions};
pub use rules::{LoaderConfig, LoaderEntry, ModuleRule};

pub mod options;
pub mod target;

// Re-export commonly used types
pub use options::{BootstrapOptions, BootstrapOverrides};
pub use target::{PlatformFlags, TargetDescriptor};

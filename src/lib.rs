//! Workspace facade for the AngularJS configuration plugin.
//!
//! Re-exports the core crate so integration tests and demos use the same
//! surface a host application would.
pub use angularjs_plugin_core::*;

//! Event wiring for the AngularJS configuration plugin

use serde_json::Value;
use tracing::debug;

use crate::config::externals::classify_externals;
use crate::config::html::{compose_html_settings, HtmlSettings};
use crate::config::presets::update_compiler_configuration;
use crate::config::rules::{rewrite_browser_rules, ModuleRule};
use crate::error::{Error, Result};
use crate::events::Events;
use crate::types::TargetDescriptor;

/// Framework tag a target must declare before any reducer takes action.
pub const FRAMEWORK: &str = "angularjs";

/// Event carrying the module-rule list of browser targets.
pub const JS_RULES_EVENT: &str = "webpack-js-rules-configuration-for-browser";

/// Event carrying a target's default HTML settings.
pub const HTML_SETTINGS_EVENT: &str = "target-default-html-settings";

/// Event carrying the bundler's externals map.
pub const EXTERNALS_EVENT: &str = "webpack-externals-configuration";

/// Event carrying the raw compiler configuration of a target.
pub const COMPILER_CONFIGURATION_EVENT: &str = "babel-configuration";

/// Registers the configuration reducers that add AngularJS annotation support.
///
/// The plugin holds no state of its own; every reducer is a pure function of
/// the event payload and the target descriptor in its context.
#[derive(Debug, Clone, Copy, Default)]
pub struct AngularJsPlugin;

impl AngularJsPlugin {
    pub fn new() -> Self {
        Self
    }

    /// Attach every reducer this plugin provides to the host facility.
    pub fn register(&self, events: &mut Events) {
        debug!("Registering AngularJS configuration reducers");

        events.on(JS_RULES_EVENT, |rules, context| {
            let target = target_from_context(context)?;
            let rules: Vec<ModuleRule> = serde_json::from_value(rules)?;
            Ok(serde_json::to_value(rewrite_browser_rules(rules, &target))?)
        });

        events.on(HTML_SETTINGS_EVENT, |settings, context| {
            let target: TargetDescriptor = serde_json::from_value(context.clone())?;
            let settings: HtmlSettings = serde_json::from_value(settings)?;
            Ok(serde_json::to_value(compose_html_settings(settings, &target))?)
        });

        events.on(EXTERNALS_EVENT, |externals, context| {
            let target = target_from_context(context)?;
            let externals = serde_json::from_value(externals)?;
            Ok(serde_json::to_value(classify_externals(externals, &target))?)
        });

        events.on(COMPILER_CONFIGURATION_EVENT, |configuration, context| {
            let target: TargetDescriptor = serde_json::from_value(context.clone())?;
            let configuration = serde_json::from_value(configuration)?;
            Ok(serde_json::to_value(update_compiler_configuration(configuration, &target))?)
        });
    }
}

/// Bundler-scoped events wrap the descriptor as `{ "target": ... }`; the rest
/// hand it over directly.
fn target_from_context(context: &Value) -> Result<TargetDescriptor> {
    let target = context.get("target").ok_or_else(|| {
        Error::ConfigError("event context is missing a target descriptor".to_string())
    })?;
    Ok(serde_json::from_value(target.clone())?)
}

/// Create the plugin and register it in one call.
pub fn load(events: &mut Events) {
    AngularJsPlugin::new().register(events);
}

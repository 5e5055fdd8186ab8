use serde::{Deserialize, Serialize};

/// Options controlling the bootstrap markup generated for a browser target.
///
/// A fresh instance is built for every compose call so no defaults are shared
/// between targets; per-target adjustments come in through [`BootstrapOverrides`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapOptions {
    /// Custom `<title />` value; `None` keeps whatever the host generated.
    pub title: Option<String>,
    /// Value of the `ng-app` attribute; `None` falls back to the
    /// lowerCamelCase form of the target name.
    pub app_name: Option<String>,
    /// Include the `ng-strict-di` directive on the app tag.
    pub strict: bool,
    /// Include the `ng-cloak` directive on the app tag.
    pub cloak: bool,
    /// Mount the application on `<body>` instead of a wrapper element.
    pub use_body: bool,
    /// Component rendered inside the mount point.
    pub main_component: Option<String>,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            title: None,
            app_name: None,
            strict: true,
            cloak: true,
            use_body: true,
            main_component: None,
        }
    }
}

impl BootstrapOptions {
    /// Apply a target's partial overrides on top of these options.
    ///
    /// Only fields present on the overrides change; everything else keeps its
    /// current value.
    pub fn apply(mut self, overrides: &BootstrapOverrides) -> Self {
        if overrides.title.is_some() {
            self.title = overrides.title.clone();
        }
        if overrides.app_name.is_some() {
            self.app_name = overrides.app_name.clone();
        }
        if let Some(strict) = overrides.strict {
            self.strict = strict;
        }
        if let Some(cloak) = overrides.cloak {
            self.cloak = cloak;
        }
        if let Some(use_body) = overrides.use_body {
            self.use_body = use_body;
        }
        if overrides.main_component.is_some() {
            self.main_component = overrides.main_component.clone();
        }
        self
    }
}

/// Per-target overrides for [`BootstrapOptions`]; missing fields keep the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloak: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_body: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_component: Option<String>,
}

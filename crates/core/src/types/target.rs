use serde::{Deserialize, Serialize};

use super::BootstrapOverrides;

/// Platform flags the host derives from a target's build type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformFlags {
    #[serde(default)]
    pub browser: bool,
    #[serde(default)]
    pub node: bool,
}

/// Build-target metadata the host passes alongside every configuration event.
///
/// The descriptor is read-only input; reducers never write it back to the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetDescriptor {
    pub name: String,
    /// Framework tag the target was declared with, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
    #[serde(default)]
    pub is: PlatformFlags,
    /// Whether the target is built as a distributable library.
    #[serde(default)]
    pub library: bool,
    /// Partial overrides for the generated bootstrap markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework_options: Option<BootstrapOverrides>,
}

impl TargetDescriptor {
    /// Whether the target declared the given framework tag.
    pub fn uses_framework(&self, tag: &str) -> bool {
        self.framework.as_deref() == Some(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_deserialization() {
        let target: TargetDescriptor = serde_json::from_value(serde_json::json!({
            "name": "my-app",
            "framework": "angularjs",
            "is": { "browser": true },
            "library": false
        }))
        .unwrap();

        assert_eq!(target.name, "my-app");
        assert!(target.uses_framework("angularjs"));
        assert!(!target.uses_framework("react"));
        assert!(target.is.browser);
        assert!(!target.is.node);
        assert!(target.framework_options.is_none());
    }
}

//! Bootstrap markup for the default HTML file of a browser target

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::plugin::FRAMEWORK;
use crate::types::{BootstrapOptions, TargetDescriptor};

/// Settings the host uses to generate a browser target's default HTML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlSettings {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body_attributes: String,
    #[serde(default)]
    pub body_contents: String,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// Derive the bootstrap markup for an AngularJS browser target.
///
/// The app name defaults to the lowerCamelCase form of the target name. With
/// body mounting (the default) the app attributes land on `<body>` and the
/// main component replaces its contents; otherwise everything is wrapped in a
/// `<div id="app">` and only the body contents change.
pub fn compose_html_settings(
    settings: HtmlSettings,
    target: &TargetDescriptor,
) -> HtmlSettings {
    if !target.is.browser || !target.uses_framework(FRAMEWORK) {
        return settings;
    }
    debug!("Composing bootstrap markup for {}", target.name);

    let mut settings = settings;
    let mut options = BootstrapOptions {
        app_name: Some(lower_camel_case(&target.name)),
        ..Default::default()
    };
    if let Some(overrides) = target.framework_options.as_ref() {
        options = options.apply(overrides);
    }

    if let Some(title) = options.title.as_ref().filter(|title| !title.is_empty()) {
        settings.title = title.clone();
    }

    let mut attributes = vec![format!(
        "ng-app=\"{}\"",
        options.app_name.as_deref().unwrap_or_default()
    )];
    if options.strict {
        attributes.push("ng-strict-di".to_string());
    }
    if options.cloak {
        attributes.push("ng-cloak".to_string());
    }
    let attributes = attributes.join(" ");

    let main_component = match options.main_component.as_deref() {
        Some(tag) if !tag.is_empty() => format!("<{tag}></{tag}>"),
        _ => String::new(),
    };

    if options.use_body {
        settings.body_attributes = attributes;
        settings.body_contents = main_component;
    } else {
        settings.body_contents = format!("<div id=\"app\" {attributes}>{main_component}</div>");
    }

    settings
}

/// Convert a kebab-case target name to lowerCamelCase.
///
/// Each `-x` pair collapses to an uppercase `x`; a dash not followed by a
/// word character stays put.
fn lower_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(ch) = chars.next() {
        match chars.peek() {
            Some(&next) if ch == '-' && (next.is_ascii_alphanumeric() || next == '_') => {
                out.extend(next.to_uppercase());
                chars.next();
            }
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BootstrapOverrides, PlatformFlags};

    fn browser_target(name: &str) -> TargetDescriptor {
        TargetDescriptor {
            name: name.to_string(),
            framework: Some("angularjs".to_string()),
            is: PlatformFlags { browser: true, node: false },
            ..Default::default()
        }
    }

    fn host_settings() -> HtmlSettings {
        HtmlSettings {
            title: "my-target".to_string(),
            body_attributes: String::new(),
            body_contents: "<script>legacy</script>".to_string(),
            rest: Map::new(),
        }
    }

    #[test]
    fn test_compose_defaults_mount_on_body() {
        let settings = compose_html_settings(host_settings(), &browser_target("my-target"));

        assert_eq!(settings.body_attributes, "ng-app=\"myTarget\" ng-strict-di ng-cloak");
        assert_eq!(settings.body_contents, "");
        // No title override, so the host's value stays
        assert_eq!(settings.title, "my-target");
    }

    #[test]
    fn test_compose_wrapper_mount() {
        let mut target = browser_target("my-target");
        target.framework_options = Some(BootstrapOverrides {
            app_name: Some("myCustomApp".to_string()),
            use_body: Some(false),
            main_component: Some("root-container".to_string()),
            ..Default::default()
        });
        let mut current = host_settings();
        current.body_attributes = "data-theme=\"dark\"".to_string();

        let settings = compose_html_settings(current, &target);

        assert_eq!(
            settings.body_contents,
            "<div id=\"app\" ng-app=\"myCustomApp\" ng-strict-di ng-cloak>\
             <root-container></root-container></div>"
        );
        // Body attributes are not the mount point in this branch
        assert_eq!(settings.body_attributes, "data-theme=\"dark\"");
    }

    #[test]
    fn test_compose_custom_title_and_markers_off() {
        let mut target = browser_target("my-target");
        target.framework_options = Some(BootstrapOverrides {
            title: Some("My App".to_string()),
            strict: Some(false),
            cloak: Some(false),
            ..Default::default()
        });

        let settings = compose_html_settings(host_settings(), &target);

        assert_eq!(settings.title, "My App");
        assert_eq!(settings.body_attributes, "ng-app=\"myTarget\"");
    }

    #[test]
    fn test_compose_main_component_on_body() {
        let mut target = browser_target("my-target");
        target.framework_options = Some(BootstrapOverrides {
            main_component: Some("main".to_string()),
            ..Default::default()
        });

        let settings = compose_html_settings(host_settings(), &target);

        assert_eq!(settings.body_contents, "<main></main>");
    }

    #[test]
    fn test_compose_ignores_non_browser_targets() {
        let mut target = browser_target("my-target");
        target.is = PlatformFlags { browser: false, node: true };

        let settings = compose_html_settings(host_settings(), &target);

        assert_eq!(settings, host_settings());
    }

    #[test]
    fn test_compose_ignores_other_frameworks() {
        let mut target = browser_target("my-target");
        target.framework = Some("react".to_string());

        let settings = compose_html_settings(host_settings(), &target);

        assert_eq!(settings, host_settings());
    }

    #[test]
    fn test_compose_preserves_unknown_settings() {
        let mut current = host_settings();
        current
            .rest
            .insert("headAttributes".to_string(), Value::String("lang=\"en\"".to_string()));

        let settings = compose_html_settings(current, &browser_target("my-target"));

        assert_eq!(
            settings.rest.get("headAttributes"),
            Some(&Value::String("lang=\"en\"".to_string()))
        );
    }

    #[test]
    fn test_lower_camel_case() {
        assert_eq!(lower_camel_case("my-target"), "myTarget");
        assert_eq!(lower_camel_case("a-b-c"), "aBC");
        assert_eq!(lower_camel_case("plain"), "plain");
        assert_eq!(lower_camel_case("with-2-numbers"), "with2Numbers");
        // A dash without a following word character is kept
        assert_eq!(lower_camel_case("odd-"), "odd-");
    }
}

//! Shows the two mounting modes of the bootstrap markup composer using the
//! typed API directly.
//!
//! Run with: cargo run --example bootstrap_markup

use angularjs_plugin::{
    compose_html_settings, BootstrapOverrides, HtmlSettings, PlatformFlags, TargetDescriptor,
};

fn main() -> anyhow::Result<()> {
    let mut target = TargetDescriptor {
        name: "contact-book".to_string(),
        framework: Some("angularjs".to_string()),
        is: PlatformFlags {
            browser: true,
            node: false,
        },
        ..Default::default()
    };

    let mounted_on_body = compose_html_settings(HtmlSettings::default(), &target);
    println!("body mount:");
    println!("  bodyAttributes: {}", mounted_on_body.body_attributes);
    println!("  bodyContents:   {:?}", mounted_on_body.body_contents);

    target.framework_options = Some(BootstrapOverrides {
        app_name: Some("contactBook".to_string()),
        use_body: Some(false),
        main_component: Some("contact-list".to_string()),
        ..Default::default()
    });

    let wrapped = compose_html_settings(HtmlSettings::default(), &target);
    println!("wrapper mount:");
    println!("  bodyAttributes: {:?}", wrapped.body_attributes);
    println!("  bodyContents:   {}", wrapped.body_contents);

    Ok(())
}

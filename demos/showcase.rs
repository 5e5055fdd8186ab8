//! Walks a browser target through every configuration event the plugin
//! listens to and prints the reduced values.
//!
//! Run with: cargo run --example showcase

use angularjs_plugin::{load, Events};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let mut events = Events::new();
    load(&mut events);

    let target = json!({
        "name": "contact-book",
        "framework": "angularjs",
        "is": { "browser": true, "node": false },
        "library": false,
        "frameworkOptions": {
            "title": "Contact Book",
            "mainComponent": "contact-list"
        }
    });

    let rules = json!([{
        "test": "\\.jsx?$",
        "use": [{ "loader": "babel-loader", "options": {} }]
    }]);
    let rules = events.reduce(
        "webpack-js-rules-configuration-for-browser",
        rules,
        &json!({ "target": target.clone() }),
    )?;
    println!("module rules:\n{}\n", serde_json::to_string_pretty(&rules)?);

    let settings = json!({
        "title": "contact-book",
        "bodyAttributes": "",
        "bodyContents": ""
    });
    let settings = events.reduce("target-default-html-settings", settings, &target)?;
    println!("html settings:\n{}\n", serde_json::to_string_pretty(&settings)?);

    let configuration = events.reduce("babel-configuration", json!({}), &target)?;
    println!(
        "compiler configuration:\n{}\n",
        serde_json::to_string_pretty(&configuration)?
    );

    // A node build of the same project leaves the runtime out of the bundle
    let node_target = json!({
        "name": "contact-book-api",
        "framework": "angularjs",
        "is": { "browser": false, "node": true }
    });
    let externals = events.reduce(
        "webpack-externals-configuration",
        json!({}),
        &json!({ "target": node_target }),
    )?;
    println!("externals:\n{}", serde_json::to_string_pretty(&externals)?);

    Ok(())
}

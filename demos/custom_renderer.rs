//! # Custom Renderer Demo
//!
//! Shows how a host plugs its own rendering into the registry: a renderer
//! that produces plain-text output instead of the generic JSON artifact,
//! registered up front so no dynamic loading happens.

use std::sync::Arc;

use serde_json::{json, Map, Value};
use textloom_core::{parse_sync, ComponentRegistry, Definitions, Renderer};

/// Renders a Card block as a one-line text banner.
struct BannerRenderer;

impl Renderer for BannerRenderer {
    fn render(&self, data: &Map<String, Value>) -> Value {
        let title = data.get("title").and_then(Value::as_str).unwrap_or("(untitled)");
        json!({ "banner": format!("=== {title} ===") })
    }
}

const DEFINITIONS: &str = r#"{
  "version": "1.0",
  "components": [{
    "uid": "Card",
    "type": "display",
    "description": "A titled card",
    "componentPath": "cards/Card",
    "inputs": {
      "title": { "type": "string", "required": true }
    }
  }]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let definitions: Definitions = serde_json::from_str(DEFINITIONS)?;

    let registry = ComponentRegistry::default();
    registry.register("Card", Arc::new(BannerRenderer));

    let reply = "```block\n{\"uid\":\"Card\",\"data\":{\"title\":\"Hello\"}}\n```";
    let segments = parse_sync(reply, &definitions, &registry);

    println!("{}", serde_json::to_string_pretty(&segments)?);
    Ok(())
}

//! # Basic Parse Demo
//!
//! The simplest possible end-to-end run: parse a streamed reply containing
//! one component block against inline definitions and print the resulting
//! segments.
//!
//! ## Usage
//!
//! ```bash
//! rustc --edition 2021 demos/basic_parse.rs  # or add as a bin target
//! ```

use textloom_core::{DefinitionSource, Definitions, Pipeline, Segment};

const DEFINITIONS: &str = r#"{
  "version": "1.0",
  "components": [{
    "uid": "Card",
    "type": "display",
    "description": "A titled card",
    "componentPath": "cards/Card",
    "inputs": {
      "title": { "type": "string", "description": "Heading", "required": true }
    }
  }]
}"#;

const REPLY: &str = "Here is your summary:\n\
```block\n\
{\"uid\":\"Card\",\"data\":{\"title\":\"Quarterly report\"}}\n\
```\n\
Let me know if you need anything else.";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let definitions: Definitions = serde_json::from_str(DEFINITIONS)?;
    let pipeline = Pipeline::default();

    let segments = pipeline
        .run(REPLY, &DefinitionSource::Inline(definitions))
        .await?;

    for segment in &segments {
        match segment {
            Segment::Text { key, content } => println!("[{key}] {content}"),
            Segment::Component { key, artifact } => {
                println!("[{key}] {}", serde_json::to_string_pretty(artifact)?)
            }
        }
    }

    Ok(())
}

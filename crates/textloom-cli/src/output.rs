//! JSON rendering for command results.

use serde_json::Value;

use crate::error::CliError;

pub fn render(body: &Value, pretty: bool) -> Result<(), CliError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(body)?
    } else {
        serde_json::to_string(body)?
    };
    println!("{rendered}");
    Ok(())
}

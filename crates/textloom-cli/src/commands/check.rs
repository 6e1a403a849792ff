use serde_json::json;
use textloom_core::contains_block_marker;

use crate::cli::InputArgs;
use crate::commands::{read_input, CommandResult};
use crate::error::CliError;

pub async fn run(args: &InputArgs) -> Result<CommandResult, CliError> {
    let text = read_input(&args.input).await?;

    Ok(CommandResult::ok(json!({
        "contains_blocks": contains_block_marker(&text),
    })))
}

use serde_json::json;
use textloom_core::extract_blocks;

use crate::cli::InputArgs;
use crate::commands::{read_input, CommandResult};
use crate::error::CliError;

pub async fn run(args: &InputArgs) -> Result<CommandResult, CliError> {
    let text = read_input(&args.input).await?;
    let extraction = extract_blocks(&text);

    Ok(CommandResult::ok(json!({
        "blocks": extraction.blocks,
        "text": extraction.text,
    })))
}

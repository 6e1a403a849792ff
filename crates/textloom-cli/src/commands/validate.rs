use std::time::Duration;

use serde_json::json;
use textloom_core::{extract_blocks, validate_block, DefinitionSource, DefinitionsLoader};

use crate::cli::ParseArgs;
use crate::commands::{read_input, CommandResult};
use crate::error::CliError;

pub async fn run(args: &ParseArgs) -> Result<CommandResult, CliError> {
    let text = read_input(&args.input).await?;

    let loader = DefinitionsLoader::default();
    let source = DefinitionSource::from_locator(&args.definitions);
    let definitions = loader
        .load_cached(&source, Duration::from_millis(args.ttl_ms))
        .await?;

    let extraction = extract_blocks(&text);
    let mut invalid = 0;
    let reports: Vec<_> = extraction
        .blocks
        .iter()
        .map(|block| {
            let report = validate_block(block, &definitions);
            if !report.valid {
                invalid += 1;
            }
            json!({
                "uid": block.uid,
                "valid": report.valid,
                "errors": report.errors,
            })
        })
        .collect();

    Ok(CommandResult::ok(json!({
        "version": definitions.version,
        "blocks": reports,
    }))
    .with_degraded(invalid))
}

use std::time::Duration;

use serde_json::json;
use textloom_core::{
    ComponentArtifact, ComponentRegistry, DefinitionSource, DefinitionsLoader, Pipeline, Segment,
};

use crate::cli::ParseArgs;
use crate::commands::{read_input, CommandResult};
use crate::error::CliError;

pub async fn run(args: &ParseArgs) -> Result<CommandResult, CliError> {
    let text = read_input(&args.input).await?;

    let pipeline = Pipeline::new(DefinitionsLoader::default(), ComponentRegistry::default())
        .with_base_path(args.base_path.clone())
        .with_ttl(Duration::from_millis(args.ttl_ms));
    let source = DefinitionSource::from_locator(&args.definitions);

    let segments = pipeline.run(&text, &source).await?;
    let degraded = segments
        .iter()
        .filter(|segment| {
            matches!(
                segment,
                Segment::Component { artifact, .. }
                    if !matches!(artifact, ComponentArtifact::Rendered { .. })
            )
        })
        .count();

    Ok(CommandResult::ok(json!({ "segments": segments })).with_degraded(degraded))
}

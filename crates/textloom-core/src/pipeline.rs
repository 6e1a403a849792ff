//! Pipeline orchestration: definitions loading, extraction, validation,
//! renderer resolution, and ordered reassembly.
//!
//! Two variants share one reassembly algorithm. The asynchronous
//! [`Pipeline::run`] resolves definitions through the cache and eagerly
//! loads renderers; the synchronous [`parse_sync`] assumes pre-registered
//! renderers and a directly supplied definitions document.

use std::collections::HashSet;
use std::sync::LazyLock;
use std::time::Duration;

use futures::future::join_all;
use regex::Regex;

use crate::domain::{Block, ComponentArtifact, Definitions, Segment};
use crate::error::LoadError;
use crate::extract::{contains_block_marker, extract_blocks, Extraction};
use crate::loader::{DefinitionsLoader, DEFAULT_TTL};
use crate::registry::ComponentRegistry;
use crate::source::DefinitionSource;
use crate::validate::validate_block;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"BLOCK_(\d+)").expect("placeholder pattern is valid"));

/// Default root under which component paths are resolved.
pub const DEFAULT_BASE_PATH: &str = "components";

/// Orchestrates the full extraction → validation → resolution pass over a
/// streamed document.
#[derive(Clone)]
pub struct Pipeline {
    loader: DefinitionsLoader,
    registry: ComponentRegistry,
    base_path: String,
    ttl: Duration,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(DefinitionsLoader::default(), ComponentRegistry::default())
    }
}

impl Pipeline {
    pub fn new(loader: DefinitionsLoader, registry: ComponentRegistry) -> Self {
        Self {
            loader,
            registry,
            base_path: String::from(DEFAULT_BASE_PATH),
            ttl: DEFAULT_TTL,
        }
    }

    /// Override the renderer base path.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Override the definitions cache TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    pub fn loader(&self) -> &DefinitionsLoader {
        &self.loader
    }

    /// Asynchronous variant: resolve definitions through the cache, extract
    /// blocks, eagerly load renderers for every known uid, validate, and
    /// reassemble in document order.
    ///
    /// Only a definitions load failure is fatal; every block-level failure
    /// degrades to a visible in-place artifact.
    pub async fn run(
        &self,
        text: &str,
        source: &DefinitionSource,
    ) -> Result<Vec<Segment>, LoadError> {
        if !contains_block_marker(text) {
            return Ok(plain_segments(text));
        }

        let definitions = self.loader.load_cached(source, self.ttl).await?;
        let extraction = extract_blocks(text);
        self.resolve_renderers(&extraction.blocks, &definitions).await;

        Ok(assemble(&extraction, &definitions, &self.registry))
    }

    /// Fan out one renderer load per known-but-unregistered uid and join
    /// the whole batch before reassembly. Failures are isolated per item:
    /// the affected blocks degrade to missing-renderer artifacts while the
    /// rest of the document renders normally.
    async fn resolve_renderers(&self, blocks: &[Block], definitions: &Definitions) {
        let mut seen = HashSet::new();
        let mut loads = Vec::new();

        for block in blocks {
            if !seen.insert(block.uid.as_str()) {
                continue;
            }
            let Some(definition) = definitions.find(&block.uid) else {
                continue;
            };
            if self.registry.get(&block.uid).is_some() {
                continue;
            }
            loads.push(self.registry.load_component(
                &definition.uid,
                &definition.component_path,
                &self.base_path,
            ));
        }

        // Load failures are not surfaced here; reassembly reports them per
        // block as missing-renderer artifacts.
        let _ = join_all(loads).await;
    }
}

/// Synchronous variant: identical reassembly, but renderers must already be
/// registered and the definitions document is supplied directly. No dynamic
/// loading or fetching is attempted.
pub fn parse_sync(
    text: &str,
    definitions: &Definitions,
    registry: &ComponentRegistry,
) -> Vec<Segment> {
    if !contains_block_marker(text) {
        return plain_segments(text);
    }

    let extraction = extract_blocks(text);
    assemble(&extraction, definitions, registry)
}

/// Marker-free fast path: the whole input is a single text segment,
/// unchanged.
fn plain_segments(text: &str) -> Vec<Segment> {
    vec![Segment::text(0, text)]
}

/// Split the placeholder-substituted text and interleave text spans with
/// resolved component artifacts, preserving original document order.
fn assemble(
    extraction: &Extraction,
    definitions: &Definitions,
    registry: &ComponentRegistry,
) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut text_index = 0;
    let mut cursor = 0;

    for captures in PLACEHOLDER.captures_iter(&extraction.text) {
        let token = captures.get(0).expect("capture 0 is the whole match");

        // Digits that do not name an extracted block are ordinary text the
        // document happened to contain.
        let Some(index) = captures[1].parse::<usize>().ok() else {
            continue;
        };
        let Some(block) = extraction.blocks.get(index) else {
            continue;
        };

        push_text(&mut segments, &mut text_index, &extraction.text[cursor..token.start()]);
        segments.push(Segment::component(
            index,
            resolve_artifact(block, definitions, registry),
        ));
        cursor = token.end();
    }

    push_text(&mut segments, &mut text_index, &extraction.text[cursor..]);
    segments
}

/// Non-empty (after trimming) spans become text segments with positional
/// keys.
fn push_text(segments: &mut Vec<Segment>, text_index: &mut usize, span: &str) {
    let trimmed = span.trim();
    if trimmed.is_empty() {
        return;
    }
    segments.push(Segment::text(*text_index, trimmed));
    *text_index += 1;
}

fn resolve_artifact(
    block: &Block,
    definitions: &Definitions,
    registry: &ComponentRegistry,
) -> ComponentArtifact {
    let report = validate_block(block, definitions);
    if !report.valid {
        return ComponentArtifact::Invalid {
            uid: block.uid.clone(),
            errors: report.errors,
        };
    }

    match registry.get(&block.uid) {
        Some(renderer) => ComponentArtifact::Rendered {
            uid: block.uid.clone(),
            data: block.data.clone(),
            output: renderer.render(&block.data),
        },
        None => ComponentArtifact::MissingRenderer {
            uid: block.uid.clone(),
        },
    }
}

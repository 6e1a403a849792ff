//! # Textloom Core
//!
//! Core extraction, validation, and rendering pipeline for textloom.
//!
//! ## Overview
//!
//! Textloom consumes freeform streamed text (such as incrementally generated
//! model output), extracts self-describing component blocks embedded in it,
//! validates each block against a versioned definitions document, resolves
//! renderers through a registry, and produces an ordered sequence of
//! interleaved text and component segments.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | Time-bounded memoization of resolved definitions |
//! | [`domain`] | Wire types: blocks, definitions, segments |
//! | [`error`] | Load and registry error taxonomies |
//! | [`extract`] | Fenced-block extraction and streaming truncation |
//! | [`http`] | HTTP transport abstraction |
//! | [`loader`] | Definition source resolution |
//! | [`pipeline`] | Orchestration and ordered reassembly |
//! | [`registry`] | Component registry and renderer capabilities |
//! | [`source`] | Source locators and the storage capability |
//! | [`validate`] | Block validation against declared inputs |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use textloom_core::{DefinitionSource, Pipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pipeline = Pipeline::default();
//!     let source = DefinitionSource::from_locator("https://example.test/definitions.json");
//!
//!     let segments = pipeline
//!         .run("Intro ```block\n{\"uid\":\"Card\",\"data\":{\"title\":\"Hi\"}}\n``` outro", &source)
//!         .await?;
//!
//!     for segment in &segments {
//!         println!("{}", segment.key());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Failure Model
//!
//! Only a definitions load failure aborts a parse. Every block-level failure
//! degrades to a visible in-place artifact: malformed payloads stay literal
//! text, invalid blocks become structured error artifacts, and valid blocks
//! without a renderer become structured warning artifacts.
//!
//! ## Concurrency
//!
//! The definitions cache and component registry are shared instances with
//! interior mutability; renderer loads triggered by one orchestration pass
//! are issued concurrently and joined before reassembly. No cancellation is
//! wired into in-flight loads: an abandoned parse still populates the cache
//! and registry when its loads complete.

pub mod cache;
pub mod domain;
pub mod error;
pub mod extract;
pub mod http;
pub mod loader;
pub mod pipeline;
pub mod registry;
pub mod source;
pub mod validate;

// Re-export commonly used types at crate root for convenience

pub use cache::DefinitionsCache;
pub use domain::{Block, ComponentArtifact, ComponentDefinition, Definitions, InputSchema, Segment};
pub use error::{LoadError, RegistryError};
pub use extract::{contains_block_marker, extract_blocks, placeholder_token, Extraction};
pub use http::{FixedHttpClient, HttpClient, HttpError, HttpResponse, ReqwestHttpClient};
pub use loader::{DefinitionsLoader, DEFAULT_TTL};
pub use pipeline::{parse_sync, Pipeline, DEFAULT_BASE_PATH};
pub use registry::{
    join_component_path, ComponentRegistry, GenericRenderer, GenericRendererLoader, Renderer,
    RendererLoader, UnavailableRendererLoader,
};
pub use source::{ContentSource, DefinitionSource, FsContentSource, NoStorage};
pub use validate::{validate_block, ValidationReport};

//! Wire types shared across the pipeline: blocks, definitions documents, and
//! parsed segments.

mod block;
mod definitions;
mod segment;

pub use block::Block;
pub use definitions::{ComponentDefinition, Definitions, InputSchema};
pub use segment::{ComponentArtifact, Segment};

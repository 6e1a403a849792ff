use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One ordered piece of a parsed document.
///
/// Segment order reproduces the original document order exactly, with each
/// recognized block replaced in place. Keys are positional and deterministic
/// so hosts can keep stable external identity across re-renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    Text { key: String, content: String },
    Component { key: String, artifact: ComponentArtifact },
}

impl Segment {
    pub(crate) fn text(index: usize, content: impl Into<String>) -> Self {
        Self::Text {
            key: format!("text-{index}"),
            content: content.into(),
        }
    }

    pub(crate) fn component(index: usize, artifact: ComponentArtifact) -> Self {
        Self::Component {
            key: format!("component-{index}"),
            artifact,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Text { key, .. } | Self::Component { key, .. } => key,
        }
    }
}

/// What a recognized block resolved to.
///
/// Failure modes stay visible: an invalid block becomes a structured error
/// artifact and a valid block without a renderer becomes a structured
/// warning artifact. Neither aborts the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ComponentArtifact {
    Rendered {
        uid: String,
        /// The block's original input payload, preserved exactly.
        data: Map<String, Value>,
        /// Displayable artifact produced by the renderer capability.
        output: Value,
    },
    Invalid {
        uid: String,
        errors: Vec<String>,
    },
    MissingRenderer {
        uid: String,
    },
}

impl ComponentArtifact {
    pub fn uid(&self) -> &str {
        match self {
            Self::Rendered { uid, .. } | Self::Invalid { uid, .. } | Self::MissingRenderer { uid } => {
                uid
            }
        }
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One structured instruction found in streamed text.
///
/// A fenced payload is only promoted to a `Block` when both members are
/// present and well-typed; anything else stays visible as literal text.
/// Repeats of a `uid` within one document are independent instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Component identifier; matched against a definitions document.
    pub uid: String,
    /// Input payload handed to the renderer after validation.
    pub data: Map<String, Value>,
}

impl Block {
    pub fn new(uid: impl Into<String>, data: Map<String, Value>) -> Self {
        Self {
            uid: uid.into(),
            data,
        }
    }
}

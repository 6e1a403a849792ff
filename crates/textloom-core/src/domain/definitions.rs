use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declared contract for one input field of a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSchema {
    /// Expected runtime category: string, number, boolean, object, array.
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// When present, the field value must be a member of this set.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

/// Schema entry describing one renderable component kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDefinition {
    pub uid: String,
    #[serde(rename = "type")]
    pub component_type: String,
    #[serde(default)]
    pub description: String,
    /// Module path resolved against the configured renderer base path.
    #[serde(rename = "componentPath")]
    pub component_path: String,
    #[serde(default)]
    pub inputs: BTreeMap<String, InputSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

/// Versioned registry of known component identifiers and their input
/// contracts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definitions {
    pub version: String,
    pub components: Vec<ComponentDefinition>,
}

impl Definitions {
    /// Look up a component definition by uid.
    ///
    /// Duplicate uids within one document resolve deterministically to the
    /// first occurrence; later entries are ignored.
    pub fn find(&self, uid: &str) -> Option<&ComponentDefinition> {
        self.components.iter().find(|component| component.uid == uid)
    }

    /// Uids known to this document, in declaration order, first occurrence
    /// only.
    pub fn known_uids(&self) -> Vec<&str> {
        let mut uids = Vec::with_capacity(self.components.len());
        for component in &self.components {
            if !uids.contains(&component.uid.as_str()) {
                uids.push(component.uid.as_str());
            }
        }
        uids
    }
}

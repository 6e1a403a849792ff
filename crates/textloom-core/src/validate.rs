//! Validation of extracted blocks against a definitions document.
//!
//! Validation is non-fatal: it produces an ordered error list that the
//! orchestrator renders as a visible artifact in place of the component.

use serde::Serialize;
use serde_json::Value;

use crate::domain::{Block, Definitions};

/// Runtime categories a declared field type is checked against.
const KNOWN_CATEGORIES: [&str; 5] = ["string", "number", "boolean", "object", "array"];

/// Outcome of checking one block against a definitions document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Check `block` against the component its uid declares.
///
/// An unknown uid short-circuits with exactly one error. Otherwise all
/// applicable errors are collected: missing required fields, enum
/// violations, and type-category mismatches. Fields not declared in the
/// schema are ignored for forward compatibility, and null values are exempt
/// from type checks.
pub fn validate_block(block: &Block, definitions: &Definitions) -> ValidationReport {
    let Some(definition) = definitions.find(&block.uid) else {
        return ValidationReport::from_errors(vec![format!(
            "unknown component uid '{}'",
            block.uid
        )]);
    };

    let mut errors = Vec::new();

    for (field, schema) in &definition.inputs {
        if schema.required && !block.data.contains_key(field) {
            errors.push(format!("required field '{field}' is missing"));
        }
    }

    for (field, value) in &block.data {
        let Some(schema) = definition.inputs.get(field) else {
            continue;
        };
        if value.is_null() {
            continue;
        }

        if let Some(allowed) = &schema.enum_values {
            let member = value
                .as_str()
                .is_some_and(|candidate| allowed.iter().any(|entry| entry == candidate));
            if !member {
                errors.push(format!(
                    "field '{field}' must be one of [{}], got {value}",
                    allowed.join(", ")
                ));
            }
        }

        let category = value_category(value);
        if KNOWN_CATEGORIES.contains(&schema.field_type.as_str())
            && category != schema.field_type
        {
            errors.push(format!(
                "field '{field}' expected type '{}', got '{category}'",
                schema.field_type
            ));
        }
    }

    ValidationReport::from_errors(errors)
}

fn value_category(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ComponentDefinition, InputSchema};
    use serde_json::{json, Map};
    use std::collections::BTreeMap;

    fn input(field_type: &str, required: bool) -> InputSchema {
        InputSchema {
            field_type: field_type.to_string(),
            description: String::new(),
            required,
            default: None,
            enum_values: None,
        }
    }

    fn card_definitions() -> Definitions {
        let mut inputs = BTreeMap::new();
        inputs.insert(String::from("title"), input("string", true));
        inputs.insert(String::from("count"), input("number", false));
        inputs.insert(String::from("tags"), input("array", false));
        inputs.insert(
            String::from("tone"),
            InputSchema {
                field_type: String::from("string"),
                description: String::new(),
                required: false,
                default: Some(json!("neutral")),
                enum_values: Some(vec![
                    String::from("neutral"),
                    String::from("info"),
                    String::from("warning"),
                ]),
            },
        );

        Definitions {
            version: String::from("1.0"),
            components: vec![ComponentDefinition {
                uid: String::from("Card"),
                component_type: String::from("display"),
                description: String::new(),
                component_path: String::from("cards/Card"),
                inputs,
                example: None,
            }],
        }
    }

    fn block(data: Value) -> Block {
        let Value::Object(map) = data else {
            panic!("test data must be a mapping");
        };
        Block::new("Card", map)
    }

    #[test]
    fn unknown_uid_yields_exactly_one_error() {
        let report = validate_block(
            &Block::new("Nope", Map::new()),
            &card_definitions(),
        );

        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("Nope"));
    }

    #[test]
    fn missing_required_field_is_reported() {
        let report = validate_block(&block(json!({})), &card_definitions());

        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("title"));
    }

    #[test]
    fn valid_block_has_no_errors() {
        let report = validate_block(
            &block(json!({ "title": "Hi", "count": 3, "tags": ["a"] })),
            &card_definitions(),
        );

        assert!(report.valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn type_mismatches_are_all_collected() {
        let report = validate_block(
            &block(json!({ "title": 1, "count": "three", "tags": {} })),
            &card_definitions(),
        );

        assert!(!report.valid);
        assert_eq!(report.errors.len(), 3);
    }

    #[test]
    fn sequences_are_the_array_category() {
        let report = validate_block(
            &block(json!({ "title": "Hi", "tags": [1, 2] })),
            &card_definitions(),
        );

        assert!(report.valid);
    }

    #[test]
    fn enum_violation_is_reported() {
        let report = validate_block(
            &block(json!({ "title": "Hi", "tone": "loud" })),
            &card_definitions(),
        );

        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("tone"));
    }

    #[test]
    fn null_values_are_exempt_from_type_checks() {
        let report = validate_block(
            &block(json!({ "title": "Hi", "count": null })),
            &card_definitions(),
        );

        assert!(report.valid);
    }

    #[test]
    fn undeclared_fields_are_ignored() {
        let report = validate_block(
            &block(json!({ "title": "Hi", "extra": true })),
            &card_definitions(),
        );

        assert!(report.valid);
    }

    #[test]
    fn validation_is_idempotent() {
        let definitions = card_definitions();
        let candidate = block(json!({ "count": "three" }));

        let first = validate_block(&candidate, &definitions);
        let second = validate_block(&candidate, &definitions);
        assert_eq!(first, second);
    }
}

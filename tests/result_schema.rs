use jsonschema::validator_for;
use serde_json::Value;

use context7_mcp::context7::{ApiResult, Context7Error};

/// Result envelope schema — frozen.
const ENVELOPE_SCHEMA: &str = r#"{
  "$schema": "https://json-schema.org/draft/2020-12/schema",
  "title": "Context7 Result Envelope",
  "type": "object",
  "required": ["success"],
  "additionalProperties": false,
  "properties": {
    "success": {
      "type": "boolean"
    },
    "data": {},
    "error": {
      "type": "string",
      "minLength": 1
    }
  }
}"#;

#[test]
fn golden_failure_envelope_schema_validation() {
    // 1. Build a canonical failure envelope
    let envelope: ApiResult = Context7Error::LibraryNotFound.into();

    let json_str = serde_json::to_string_pretty(&envelope).unwrap();
    let json_value: Value = serde_json::from_str(&json_str).unwrap();

    // 2. Validate against schema
    let schema_json: Value = serde_json::from_str(ENVELOPE_SCHEMA).unwrap();
    let validator = validator_for(&schema_json).unwrap();
    assert!(
        validator.is_valid(&json_value),
        "envelope JSON must satisfy the frozen schema"
    );

    // 3. Golden snapshot (byte-identical, stable)
    let expected = r#"{
  "success": false,
  "error": "Library not found."
}"#;

    assert_eq!(json_str.trim(), expected.trim(), "envelope JSON snapshot mismatch");
}

#[test]
fn success_envelope_omits_absent_fields() {
    let envelope = ApiResult::success(serde_json::json!({ "message": "Found 1 matching libraries." }));
    let json_value = serde_json::to_value(&envelope).unwrap();

    let schema_json: Value = serde_json::from_str(ENVELOPE_SCHEMA).unwrap();
    let validator = validator_for(&schema_json).unwrap();
    assert!(validator.is_valid(&json_value));

    let object = json_value.as_object().unwrap();
    assert!(!object.contains_key("error"), "success carries no error field");

    // A success without data serializes to the bare flag
    let bare = ApiResult {
        success: true,
        data: None,
        error: None,
    };
    assert_eq!(serde_json::to_value(&bare).unwrap(), serde_json::json!({ "success": true }));
}

#[test]
fn canonical_messages_are_stable() {
    assert_eq!(
        Context7Error::RateLimited.to_string(),
        "Rate limited. Please try again later."
    );
    assert_eq!(
        Context7Error::Unauthorized.to_string(),
        "Unauthorized. Please check your API key."
    );
    assert_eq!(Context7Error::LibraryNotFound.to_string(), "Library not found.");
    assert!(Context7Error::NoDocumentation
        .to_string()
        .contains("resolve_library_id"));
}

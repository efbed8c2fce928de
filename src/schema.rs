//! JSON Schema validation of the manifest document.
//!
//! The schema's own `$schema` and `$id` keys are removed before compilation
//! so a schema that declares itself is not checked against its meta-schema.

use serde_json::Value;
use tracing::debug;

use crate::diagnostics::{Diagnostic, M000, M001};

/// Schema shipped with the crate, used when no schema file is given.
pub const BUILTIN_SCHEMA: &str = include_str!("../schemas/marketplace.schema.json");

/// Identity keys stripped from the schema root before compiling.
const IDENTITY_KEYS: &[&str] = &["$schema", "$id"];

/// Validate `document` against `schema` and return every violation.
///
/// Never fails: a schema that does not compile is reported as a single
/// `M000` diagnostic at `/`.
#[must_use]
pub fn validate_schema(schema: &Value, document: &Value) -> Vec<Diagnostic> {
    let schema = strip_identity(schema);

    let validator = match jsonschema::options()
        .with_draft(jsonschema::Draft::Draft7)
        .build(&schema)
    {
        Ok(v) => v,
        Err(e) => {
            return vec![Diagnostic::error(M000, "/", format!("invalid schema: {e}"))];
        }
    };

    let diags: Vec<Diagnostic> = validator
        .iter_errors(document)
        .map(|e| {
            let path = e.instance_path.to_string();
            let location = if path.is_empty() { "/".to_string() } else { path };
            Diagnostic::error(M001, location, e.to_string())
        })
        .collect();

    debug!(violations = diags.len(), "schema validation finished");
    diags
}

fn strip_identity(schema: &Value) -> Value {
    let mut schema = schema.clone();
    if let Value::Object(map) = &mut schema {
        for key in IDENTITY_KEYS {
            map.remove(*key);
        }
    }
    schema
}

//! Ambient application metadata — the parsed shape of `VCAP_APPLICATION`.

use serde::{Deserialize, Serialize};

use crate::catalog::ParseError;

/// Deployment facts about the running application, used only as the
/// fallback identity source. Every field is individually optional; a
/// missing field degrades identity derivation, it never fails it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationMetadata {
    /// Name of the space the application is deployed into.
    #[serde(default)]
    pub space_name: Option<String>,

    /// Name the application was pushed under.
    #[serde(default)]
    pub application_name: Option<String>,

    /// Zero-based instance index. Carried for index-qualified node naming;
    /// not consumed by the fixed-suffix scheme.
    #[serde(default)]
    pub instance_index: Option<u64>,
}

impl ApplicationMetadata {
    /// Parse a raw `VCAP_APPLICATION` document.
    ///
    /// Fields of unexpected type are treated as absent. An index given as
    /// a numeric string is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error when the document is not JSON or its root is not an
    /// object.
    pub fn from_json(text: &str) -> Result<Self, ParseError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let serde_json::Value::Object(fields) = value else {
            return Err(ParseError::NotAnObject);
        };
        let string_field = |name: &str| {
            fields
                .get(name)
                .and_then(serde_json::Value::as_str)
                .map(ToString::to_string)
        };
        let instance_index = fields.get("instance_index").and_then(|raw| {
            raw.as_u64()
                .or_else(|| raw.as_str().and_then(|text| text.parse().ok()))
        });
        Ok(Self {
            space_name: string_field("space_name"),
            application_name: string_field("application_name"),
            instance_index,
        })
    }
}

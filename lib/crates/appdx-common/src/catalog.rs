//! Service catalog types — the parsed shape of `VCAP_SERVICES`.
//!
//! The catalog maps service-type names to sequences of bindings, with one
//! reserved bucket (`user-provided`) whose entries are matched by name
//! rather than by type key. Parsing is lenient at the boundary: entries and
//! credential fields that do not have the expected shape are dropped, never
//! propagated as errors. Only input that is not a JSON object at all is
//! rejected.

use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bucket key under which generically-tagged services appear.
pub const USER_PROVIDED_KEY: &str = "user-provided";

/// Error parsing a catalog or metadata document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("document root is not a JSON object")]
    NotAnObject,
}

/// One scalar credential value, carried opaquely.
///
/// Bindings in the wild disagree about types (a port may arrive as a number
/// or as text); nothing here coerces or validates. `Display` renders the
/// value as it must appear in an environment variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CredentialValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl CredentialValue {
    /// Convert a JSON value, returning `None` for non-scalar shapes.
    #[must_use]
    pub fn from_scalar(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Bool(flag) => Some(Self::Bool(*flag)),
            serde_json::Value::Number(number) => number
                .as_i64()
                .map(Self::Int)
                .or_else(|| number.as_f64().map(Self::Float)),
            serde_json::Value::String(text) => Some(Self::Text(text.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for CredentialValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for CredentialValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for CredentialValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for CredentialValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// One bound service instance. Immutable once read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingEntry {
    /// Instance name chosen at bind time (arbitrary for user-provided
    /// services).
    pub name: String,

    /// Scalar credential payload. Defaults to empty when the binding
    /// carries no credentials block.
    #[serde(default)]
    pub credentials: BTreeMap<String, CredentialValue>,
}

impl BindingEntry {
    /// Create a binding with no credentials.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            credentials: BTreeMap::new(),
        }
    }

    /// Attach one credential field (builder style).
    #[must_use]
    pub fn with_credential(mut self, field: &str, value: impl Into<CredentialValue>) -> Self {
        self.credentials.insert(field.to_string(), value.into());
        self
    }

    /// Look up one credential field.
    #[must_use]
    pub fn credential(&self, field: &str) -> Option<&CredentialValue> {
        self.credentials.get(field)
    }
}

/// The parsed service catalog: service-type name → bindings, in catalog
/// order, plus the `user-provided` bucket. Read-only after construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceCatalog {
    buckets: BTreeMap<String, Vec<BindingEntry>>,
}

impl ServiceCatalog {
    /// Parse a raw `VCAP_SERVICES` document.
    ///
    /// Buckets that are not arrays, entries without a string `name`, and
    /// non-scalar credential values are silently dropped.
    ///
    /// # Errors
    ///
    /// Returns an error when the document is not JSON or its root is not an
    /// object.
    pub fn from_json(text: &str) -> Result<Self, ParseError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let serde_json::Value::Object(raw_buckets) = value else {
            return Err(ParseError::NotAnObject);
        };
        let mut catalog = Self::default();
        for (type_key, bucket) in raw_buckets {
            let serde_json::Value::Array(raw_entries) = bucket else {
                continue;
            };
            let entries = raw_entries.iter().filter_map(binding_from_value).collect();
            catalog.buckets.insert(type_key, entries);
        }
        Ok(catalog)
    }

    /// Insert a bucket of bindings under a service-type key.
    pub fn insert(&mut self, type_key: impl Into<String>, entries: Vec<BindingEntry>) {
        self.buckets.insert(type_key.into(), entries);
    }

    /// Bindings registered under `type_key`, in catalog order. A missing
    /// key yields an empty slice, never an error.
    #[must_use]
    pub fn typed_bindings(&self, type_key: &str) -> &[BindingEntry] {
        self.buckets.get(type_key).map_or(&[], Vec::as_slice)
    }

    /// Entries of the `user-provided` bucket whose name matches
    /// `name_pattern`, in bucket order. A missing bucket yields an empty
    /// vector.
    #[must_use]
    pub fn user_provided_candidates(&self, name_pattern: &Regex) -> Vec<&BindingEntry> {
        self.typed_bindings(USER_PROVIDED_KEY)
            .iter()
            .filter(|entry| name_pattern.is_match(&entry.name))
            .collect()
    }

    /// True when the catalog holds no buckets at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

fn binding_from_value(value: &serde_json::Value) -> Option<BindingEntry> {
    let object = value.as_object()?;
    let name = object.get("name")?.as_str()?.to_string();
    let mut credentials = BTreeMap::new();
    if let Some(serde_json::Value::Object(fields)) = object.get("credentials") {
        for (field, raw) in fields {
            if let Some(scalar) = CredentialValue::from_scalar(raw) {
                credentials.insert(field.clone(), scalar);
            }
        }
    }
    Some(BindingEntry { name, credentials })
}

//! Generic JSON round-tripping per [RFC 8259](https://www.rfc-editor.org/rfc/rfc8259).
//!
//! Thin wrappers over `serde_json` with one deliberate shape:
//! [`deserialize`] goes through an intermediate generic mapping before the
//! typed instance is built, so malformed *text* and a parsed value that does
//! not *fit the target shape* fail distinguishably. No constructor logic of
//! the target type runs; rebuilding is a pure shape + data merge.
//!
//! Unknown keys in the input are ignored by default. A type that needs to
//! retain every parsed key can carry a
//! `#[serde(flatten)] extras: HashMap<String, serde_json::Value>` field.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Failure modes of the round-trip helpers.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The value could not be encoded as JSON (e.g. a map with non-string
    /// keys).
    #[error("JSON encoding failed: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The input text is not valid JSON. Propagates the underlying parse
    /// failure unchanged as its source.
    #[error("malformed JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// The text parsed, but the resulting value cannot populate the target
    /// shape (wrong JSON type, missing field, out-of-range number).
    #[error("JSON value does not match the target shape: {0}")]
    SchemaMismatch(#[source] serde_json::Error),
}

/// Encode any serializable value as JSON text.
///
/// Key order in the output follows the value's serializer (declaration
/// order for struct fields); round-trip fidelity does not depend on it.
///
/// # Errors
///
/// [`JsonError::Serialize`] if the value has no JSON representation.
pub fn serialize<T>(value: &T) -> Result<String, JsonError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string(value).map_err(JsonError::Serialize)
}

/// Rebuild a typed instance from JSON text.
///
/// Parses `json` into a generic [`Value`] first, then assigns the parsed
/// data onto the target shape field by field.
///
/// # Errors
///
/// [`JsonError::Parse`] if `json` is not valid JSON;
/// [`JsonError::SchemaMismatch`] if the parsed value does not fit `T`.
pub fn deserialize<T>(json: &str) -> Result<T, JsonError>
where
    T: DeserializeOwned,
{
    let parsed: Value = serde_json::from_str(json).map_err(JsonError::Parse)?;
    serde_json::from_value(parsed).map_err(JsonError::SchemaMismatch)
}

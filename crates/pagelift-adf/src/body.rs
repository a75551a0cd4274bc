//! Encoding of `atlas_doc_format` page bodies.
//!
//! A page body arrives as a JSON document embedded in the `value` string of
//! the body payload. The patcher works on the decoded tree; these helpers
//! cover both directions of that boundary.

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

use crate::error::BodyError;

/// Decode an `atlas_doc_format` body value into a JSON tree.
pub fn decode_body(value: &str) -> Result<Value, BodyError> {
    Ok(serde_json::from_str(value)?)
}

/// Encode a JSON tree back into an `atlas_doc_format` body value.
///
/// Uses four-space indentation, matching what the platform hands out.
pub fn encode_body(content: &Value) -> Result<String, BodyError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    content.serialize(&mut serializer)?;
    Ok(String::from_utf8(buffer)?)
}

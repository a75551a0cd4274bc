//! ADF content tree node.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Opaque attribute bag on a node.
///
/// Only `id`, `type`, and `layout` are ever read; everything else must
/// round-trip untouched, so this stays a generic ordered map.
pub type Attrs = serde_json::Map<String, Value>;

/// One node of an ADF content tree.
///
/// Only includes the fields the transfer reads. Node kinds it does not know
/// pass through as opaque values. Serialization omits unset fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    /// Node type tag, e.g. "paragraph", "media", "mediaSingle".
    #[serde(rename = "type")]
    pub kind: String,
    /// Text payload of text-like leaf nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Attribute bag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Attrs>,
    /// Child nodes in document order.
    #[serde(
        default,
        deserialize_with = "content_or_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub content: Vec<Slice>,
}

impl Slice {
    /// Create a new slice with the given kind.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Default::default()
        }
    }

    /// Set text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set attributes.
    #[must_use]
    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = Some(attrs);
        self
    }

    /// Set children.
    #[must_use]
    pub fn with_content(mut self, content: Vec<Slice>) -> Self {
        self.content = content;
        self
    }
}

/// Accepts an absent or explicit-null `content` array as empty.
fn content_or_empty<'de, D>(deserializer: D) -> Result<Vec<Slice>, D::Error>
where
    D: Deserializer<'de>,
{
    let content = Option::<Vec<Slice>>::deserialize(deserializer)?;
    Ok(content.unwrap_or_default())
}

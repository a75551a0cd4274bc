//! Media-single view and identity rewriting.

use serde_json::Value;
use uuid::Uuid;

use crate::error::SliceError;
use crate::slice::{Attrs, Slice};

/// Node kind of a media-single wrapper.
pub const MEDIA_SINGLE: &str = "mediaSingle";

/// View over a [`Slice`] known to be a media-single wrapper.
///
/// The conventional shape is two children: the media node first, then a
/// caption node whose first child is a text node. Shorter forms occur for
/// freshly embedded images and are tolerated by every accessor.
#[derive(Debug, Clone, Copy)]
pub struct MediaSingle<'a> {
    slice: &'a Slice,
}

impl<'a> MediaSingle<'a> {
    /// Cast a generic slice to a media-single view.
    pub fn new(slice: &'a Slice) -> Result<Self, SliceError> {
        if slice.kind == MEDIA_SINGLE {
            Ok(Self { slice })
        } else {
            Err(SliceError::NotMediaSingle {
                kind: slice.kind.clone(),
            })
        }
    }

    /// Attributes of the media node, or an empty bag for a childless wrapper.
    #[must_use]
    pub fn content_attrs(&self) -> Attrs {
        self.slice
            .content
            .first()
            .and_then(|media| media.attrs.clone())
            .unwrap_or_default()
    }

    /// Caption text, if the wrapper carries a caption node with content.
    #[must_use]
    pub fn caption(&self) -> Option<&'a str> {
        let caption = self.slice.content.get(1)?;
        caption.content.first()?.text.as_deref()
    }

    /// Media file ID, when present and UUID-shaped.
    ///
    /// A malformed ID yields `None`, the same as an absent one.
    #[must_use]
    pub fn media_id(&self) -> Option<Uuid> {
        let media = self.slice.content.first()?;
        let id = media.attrs.as_ref()?.get("id")?.as_str()?;
        Uuid::parse_str(id).ok()
    }

    /// Media type tag ("file", "image", ...), empty when absent.
    #[must_use]
    pub fn media_kind(&self) -> String {
        self.content_attrs()
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned()
    }

    /// Rebuild this wrapper's children with a new media identity.
    ///
    /// Returns the replacement `[media, caption]` pair. Caption text
    /// round-trips verbatim. Width and height never carry over: explicit
    /// dimensions inflate the space the image occupies on the destination.
    #[must_use]
    pub fn rewritten_content(&self, media_id: Uuid, collection: &str) -> Vec<Slice> {
        let attrs = MediaAttrs {
            id: media_id,
            width: None,
            height: None,
            collection: collection.to_owned(),
            kind: self.media_kind(),
        };
        let media = Slice::new("media").with_attrs(attrs.into_attrs());
        let text = Slice {
            text: self.caption().map(str::to_owned),
            ..Slice::new("text")
        };
        let caption = Slice::new("caption").with_content(vec![text]);
        vec![media, caption]
    }
}

impl<'a> TryFrom<&'a Slice> for MediaSingle<'a> {
    type Error = SliceError;

    fn try_from(slice: &'a Slice) -> Result<Self, Self::Error> {
        Self::new(slice)
    }
}

/// Attribute payload of a rewritten media node.
///
/// Only set fields end up in the attribute bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAttrs {
    /// Media file ID on the destination.
    pub id: Uuid,
    /// Pixel width; never set by the rewriter.
    pub width: Option<u64>,
    /// Pixel height; never set by the rewriter.
    pub height: Option<u64>,
    /// Destination collection name, starts with `contentId-`.
    pub collection: String,
    /// Media type tag carried over from the source node.
    pub kind: String,
}

impl MediaAttrs {
    /// Serialize into an attribute bag, omitting unset fields.
    #[must_use]
    pub fn into_attrs(self) -> Attrs {
        let mut attrs = Attrs::new();
        attrs.insert("id".to_owned(), Value::String(self.id.to_string()));
        if let Some(width) = self.width {
            attrs.insert("width".to_owned(), Value::from(width));
        }
        if let Some(height) = self.height {
            attrs.insert("height".to_owned(), Value::from(height));
        }
        attrs.insert("collection".to_owned(), Value::String(self.collection));
        attrs.insert("type".to_owned(), Value::String(self.kind));
        attrs
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn media_single(node: Value) -> Slice {
        serde_json::from_value(node).unwrap()
    }

    #[test]
    fn test_cast_rejects_other_kinds() {
        let slice = Slice::new("paragraph");
        let error = MediaSingle::new(&slice).unwrap_err();
        assert_eq!(
            error.to_string(),
            "expected a mediaSingle node, got `paragraph`"
        );
    }

    #[test]
    fn test_content_attrs_empty_without_children() {
        let slice = media_single(json!({"type": "mediaSingle"}));
        let view = MediaSingle::new(&slice).unwrap();
        assert!(view.content_attrs().is_empty());
        assert_eq!(view.media_id(), None);
    }

    #[test]
    fn test_caption_none_with_single_child() {
        let slice = media_single(json!({
            "type": "mediaSingle",
            "content": [{"type": "media", "attrs": {"id": "x"}}],
        }));
        assert_eq!(MediaSingle::new(&slice).unwrap().caption(), None);
    }

    #[test]
    fn test_caption_none_with_empty_caption_node() {
        let slice = media_single(json!({
            "type": "mediaSingle",
            "content": [{"type": "media"}, {"type": "caption"}],
        }));
        assert_eq!(MediaSingle::new(&slice).unwrap().caption(), None);
    }

    #[test]
    fn test_caption_text() {
        let slice = media_single(json!({
            "type": "mediaSingle",
            "content": [
                {"type": "media"},
                {"type": "caption", "content": [{"type": "text", "text": "a cat"}]},
            ],
        }));
        assert_eq!(MediaSingle::new(&slice).unwrap().caption(), Some("a cat"));
    }

    #[test]
    fn test_media_id_rejects_malformed_uuid() {
        let slice = media_single(json!({
            "type": "mediaSingle",
            "content": [{"type": "media", "attrs": {"id": "not-a-uuid"}}],
        }));
        assert_eq!(MediaSingle::new(&slice).unwrap().media_id(), None);
    }

    #[test]
    fn test_rewritten_content_drops_dimensions() {
        let slice = media_single(json!({
            "type": "mediaSingle",
            "content": [
                {
                    "type": "media",
                    "attrs": {
                        "id": "11111111-1111-1111-1111-111111111111",
                        "type": "image",
                        "width": 640,
                        "height": 480,
                    },
                },
                {"type": "caption", "content": [{"type": "text", "text": "a cat"}]},
            ],
        }));
        let view = MediaSingle::new(&slice).unwrap();
        let new_id = Uuid::parse_str("22222222-2222-2222-2222-222222222222").unwrap();

        let content = view.rewritten_content(new_id, "contentId-987");

        assert_eq!(
            serde_json::to_value(content).unwrap(),
            json!([
                {
                    "type": "media",
                    "attrs": {
                        "id": "22222222-2222-2222-2222-222222222222",
                        "collection": "contentId-987",
                        "type": "image",
                    },
                },
                {"type": "caption", "content": [{"type": "text", "text": "a cat"}]},
            ])
        );
    }

    #[test]
    fn test_rewritten_content_without_caption_or_type() {
        let slice = media_single(json!({
            "type": "mediaSingle",
            "content": [{"type": "media", "attrs": {"id": "x"}}],
        }));
        let view = MediaSingle::new(&slice).unwrap();
        let new_id = Uuid::parse_str("22222222-2222-2222-2222-222222222222").unwrap();

        let content = view.rewritten_content(new_id, "contentId-1");

        // The caption node survives with its text unset.
        assert_eq!(
            serde_json::to_value(content).unwrap(),
            json!([
                {
                    "type": "media",
                    "attrs": {
                        "id": "22222222-2222-2222-2222-222222222222",
                        "collection": "contentId-1",
                        "type": "",
                    },
                },
                {"type": "caption", "content": [{"type": "text"}]},
            ])
        );
    }
}

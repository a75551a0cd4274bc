//! ADF content model for Confluence page transfer.
//!
//! This crate models the pieces of the Atlassian Document Format that a page
//! transfer has to understand:
//! - [`Slice`]: one node of the content tree (type tag, text, attributes,
//!   children)
//! - [`MediaSingle`]: view over a `mediaSingle` wrapper node, with the
//!   identity rewrite used after media re-upload
//! - [`RemapTable`]: original media IDs mapped to their destination identity
//! - [`decode_body`] / [`encode_body`]: the `atlas_doc_format` body encoding
//!
//! Everything in here is pure data handling; fetching, uploading, and
//! writing pages back are the caller's business.

mod body;
mod error;
mod media;
mod remap;
mod slice;

pub use body::{decode_body, encode_body};
pub use error::{BodyError, SliceError};
pub use media::{MEDIA_SINGLE, MediaAttrs, MediaSingle};
pub use remap::{RemapEntry, RemapTable};
pub use slice::{Attrs, Slice};

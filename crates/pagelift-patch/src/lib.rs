//! Recursive ADF body patching for page transfer.
//!
//! When a page moves between Confluence instances, its embedded media get
//! re-uploaded and come back with fresh file IDs. This crate walks the
//! decoded `atlas_doc_format` body tree and rewrites every `mediaSingle`
//! node whose media ID appears in a [`RemapTable`](pagelift_adf::RemapTable),
//! copying everything else into the destination unchanged.
//!
//! The walk is pure, synchronous computation: no I/O, no suspension points.
//! Recursion depth equals document nesting depth, and a cyclic source tree
//! is a caller contract violation.
//!
//! # Example
//!
//! ```
//! use pagelift_adf::{RemapEntry, RemapTable};
//! use pagelift_patch::patch;
//! use serde_json::json;
//! use uuid::Uuid;
//!
//! let source = json!({
//!     "type": "mediaSingle",
//!     "content": [
//!         {"type": "media", "attrs": {"id": "11111111-1111-1111-1111-111111111111"}},
//!     ],
//! });
//! let mut destination = json!({});
//!
//! let mut remap = RemapTable::new();
//! remap.insert(
//!     Uuid::parse_str("11111111-1111-1111-1111-111111111111").unwrap(),
//!     RemapEntry {
//!         media_id: Uuid::parse_str("22222222-2222-2222-2222-222222222222").unwrap(),
//!         collection: "contentId-42".to_owned(),
//!     },
//! );
//!
//! patch(&source, &mut destination, &remap).unwrap();
//! assert_eq!(
//!     destination["content"][0]["attrs"]["id"],
//!     "22222222-2222-2222-2222-222222222222",
//! );
//! ```

mod error;
mod patch;

pub use error::PatchError;
pub use patch::patch;

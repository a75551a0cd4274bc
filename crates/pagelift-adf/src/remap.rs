//! Media identity remapping table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Destination identity of one re-uploaded media asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemapEntry {
    /// File ID the destination assigned on upload.
    pub media_id: Uuid,
    /// Destination collection name, starts with `contentId-`.
    pub collection: String,
}

/// Original media file IDs mapped to their destination identity.
///
/// Built by the upload step of a page transfer. Must be complete before the
/// body is patched; media without an entry stay untouched.
pub type RemapTable = HashMap<Uuid, RemapEntry>;

//! Error types for body patching.

/// Error during a patch walk.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PatchError {
    /// JSON error while encoding rewritten media content.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

//! Error types for the ADF model.

/// Error casting a generic slice to a specialized view.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SliceError {
    /// Node kind does not match the requested view.
    #[error("expected a mediaSingle node, got `{kind}`")]
    NotMediaSingle {
        /// Kind of the rejected node.
        kind: String,
    },
}

/// Error decoding or encoding a page body.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BodyError {
    /// JSON serialization/deserialization error.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// Encoded body was not valid UTF-8.
    #[error("invalid UTF-8 in encoded body")]
    Utf8(#[from] std::string::FromUtf8Error),
}

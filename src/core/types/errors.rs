//! Error handling for the client library
//!
//! Content normalization has its own error type so attachment failures carry
//! the offending source string and kind; everything else funnels into
//! [`ClientError`].

use thiserror::Error;

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, ClientError>;

/// Attachment kind, carried in content errors so the caller can locate the
/// failing entry in the attachment map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    /// Image attachment
    Image,
    /// Audio attachment
    Audio,
}

impl std::fmt::Display for AttachmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttachmentKind::Image => write!(f, "image"),
            AttachmentKind::Audio => write!(f, "audio"),
        }
    }
}

/// Errors raised while normalizing message content
///
/// Any of these aborts the whole content build; partially resolved content is
/// never returned.
///
/// `Display`/`Error` are implemented by hand rather than via `thiserror`'s
/// derive: the variants carry a field literally named `source` (the offending
/// source string), which the derive would try to treat as a `std::error::Error`
/// cause. The manual impls below produce the same messages while leaving the
/// field a plain `String`.
#[derive(Debug)]
pub enum ContentError {
    /// Local file missing or unreadable
    AttachmentRead {
        /// Attachment kind
        kind: AttachmentKind,
        /// Source string as supplied by the caller
        source: String,
        /// Underlying I/O failure
        detail: String,
    },

    /// Remote fetch failed (network error or non-2xx status)
    AttachmentFetch {
        /// Attachment kind
        kind: AttachmentKind,
        /// Source string as supplied by the caller
        source: String,
        /// Underlying transport failure or status
        detail: String,
    },

    /// Malformed or empty source string
    UnsupportedSource {
        /// Attachment kind
        kind: AttachmentKind,
        /// Source string as supplied by the caller
        source: String,
    },
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::AttachmentRead {
                kind,
                source,
                detail,
            } => write!(f, "failed to read local {kind} source '{source}': {detail}"),
            ContentError::AttachmentFetch {
                kind,
                source,
                detail,
            } => write!(
                f,
                "failed to fetch remote {kind} source '{source}': {detail}"
            ),
            ContentError::UnsupportedSource { kind, source } => {
                write!(f, "unsupported {kind} source '{source}'")
            }
        }
    }
}

impl std::error::Error for ContentError {}

/// Main error type for the client
#[derive(Error, Debug)]
pub enum ClientError {
    /// Content normalization errors
    #[error("content error: {0}")]
    Content(#[from] ContentError),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Content that the target provider family cannot represent
    #[error("unsupported content for provider {provider}: {message}")]
    UnsupportedContent {
        /// Provider family name
        provider: &'static str,
        /// What could not be mapped
        message: String,
    },

    /// Provider errors
    #[error("provider error: {0}")]
    Provider(String),

    /// Model not found
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// Feature not supported
    #[error("not supported: {0}")]
    NotSupported(String),

    /// Network errors
    #[error("network error: {0}")]
    Network(String),

    /// Parsing errors
    #[error("parsing error: {0}")]
    Parsing(String),
}

//! Attachment source classification and byte acquisition
//!
//! Sources are either remote URLs or local filesystem paths. Classification
//! is a literal prefix test on the `http` scheme marker; it intentionally
//! does no full URI parsing, so scheme-relative URLs and mixed-case schemes
//! are treated as local paths. Callers outside this module go through
//! [`is_remote`] only, so the predicate can be hardened in one place.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::core::types::errors::{AttachmentKind, ContentError};

#[cfg(test)]
use mockall::automock;

/// Transport-level failure reported by a [`Fetcher`]
#[derive(Error, Debug)]
#[error("{message}")]
pub struct FetchError {
    /// HTTP status code, when a response was received
    pub status: Option<u16>,
    /// Failure description
    pub message: String,
}

/// Byte-fetching capability injected into attachment resolution.
///
/// The call blocks until the body is fully buffered. Production code uses
/// [`HttpFetcher`]; tests inject a fake.
#[cfg_attr(test, automock)]
pub trait Fetcher: Send + Sync {
    /// Fetch the full body behind `url`
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Default [`Fetcher`] backed by a blocking HTTP client.
///
/// Must not be driven from inside an async runtime; wrap calls in
/// `spawn_blocking` there.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Create a fetcher with default client settings
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().map_err(|err| FetchError {
            status: None,
            message: err.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError {
                status: Some(status.as_u16()),
                message: format!("unexpected status {}", status),
            });
        }

        let body = response.bytes().map_err(|err| FetchError {
            status: Some(status.as_u16()),
            message: err.to_string(),
        })?;
        Ok(body.to_vec())
    }
}

/// Classify a source string as remote (URL) or local (filesystem path).
///
/// Literal prefix test, case-sensitive. Known limitation: rejects
/// scheme-relative URLs and uppercase schemes, and accepts local paths that
/// happen to start with "http".
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http")
}

/// Reject sources that cannot identify an attachment at all
pub fn validate_source(kind: AttachmentKind, source: &str) -> Result<(), ContentError> {
    if source.trim().is_empty() {
        return Err(ContentError::UnsupportedSource {
            kind,
            source: source.to_string(),
        });
    }
    Ok(())
}

/// Resolve a local source to an absolute path against the current working
/// directory. Never touches the filesystem and never fails; when the working
/// directory is unavailable the path is passed through unchanged.
pub fn resolve_local(source: &str) -> PathBuf {
    let path = Path::new(source);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Read the full contents of a local source into memory.
///
/// No size cap is enforced here; callers feeding large attachments must
/// impose their own limits upstream.
pub fn read_local(kind: AttachmentKind, source: &str) -> Result<Vec<u8>, ContentError> {
    let path = resolve_local(source);
    debug!(%kind, source, path = %path.display(), "reading local attachment");
    std::fs::read(&path).map_err(|err| ContentError::AttachmentRead {
        kind,
        source: source.to_string(),
        detail: err.to_string(),
    })
}

/// Fetch the full contents of a remote source into memory
pub fn fetch_remote(
    kind: AttachmentKind,
    source: &str,
    fetcher: &dyn Fetcher,
) -> Result<Vec<u8>, ContentError> {
    debug!(%kind, source, "fetching remote attachment");
    fetcher
        .fetch(source)
        .map_err(|err| ContentError::AttachmentFetch {
            kind,
            source: source.to_string(),
            detail: err.to_string(),
        })
}

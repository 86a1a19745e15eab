//! Content normalization: user-supplied text and attachments to wire parts
//!
//! The builder assembles an ordered [`Content`] value from raw text plus an
//! attachment map. Part order is fixed: text first (when non-empty), then
//! images in input order, then audio in input order. Resolution is inline and
//! strictly sequential; a failure on any attachment aborts the whole build.
//!
//! ```no_run
//! use polyllm::core::content::{Attachments, ContentBuilder};
//!
//! let builder = ContentBuilder::default();
//! let content = builder.build(
//!     Some("What is in this image?"),
//!     &Attachments::default().with_image("https://example.com/photo.png"),
//! )?;
//! # Ok::<(), polyllm::ContentError>(())
//! ```

pub mod encoder;
pub mod resolver;

pub use resolver::{FetchError, Fetcher, HttpFetcher};

use tracing::debug;

use crate::core::types::content::{Content, ContentPart};
use crate::core::types::errors::ContentError;

/// One or many attachment source strings, in caller order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sources {
    /// Single source
    One(String),
    /// Ordered list of sources
    Many(Vec<String>),
}

impl Sources {
    /// Iterate sources in input order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        match self {
            Sources::One(source) => std::slice::from_ref(source).iter(),
            Sources::Many(sources) => sources.iter(),
        }
        .map(String::as_str)
    }
}

impl From<&str> for Sources {
    fn from(source: &str) -> Self {
        Sources::One(source.to_string())
    }
}

impl From<String> for Sources {
    fn from(source: String) -> Self {
        Sources::One(source)
    }
}

impl From<Vec<String>> for Sources {
    fn from(sources: Vec<String>) -> Self {
        Sources::Many(sources)
    }
}

impl From<Vec<&str>> for Sources {
    fn from(sources: Vec<&str>) -> Self {
        Sources::Many(sources.into_iter().map(str::to_string).collect())
    }
}

/// Attachment map for one outgoing message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attachments {
    /// Image sources (local paths or URLs)
    pub image: Option<Sources>,
    /// Audio sources (local paths or URLs)
    pub audio: Option<Sources>,
}

impl Attachments {
    /// Set the image source(s)
    pub fn with_image(mut self, sources: impl Into<Sources>) -> Self {
        self.image = Some(sources.into());
        self
    }

    /// Set the audio source(s)
    pub fn with_audio(mut self, sources: impl Into<Sources>) -> Self {
        self.audio = Some(sources.into());
        self
    }
}

/// Builds [`Content`] values, resolving attachments through an injected
/// [`Fetcher`].
///
/// The default instance fetches remote audio over HTTP with a blocking
/// client; tests inject a fake fetcher for determinism.
pub struct ContentBuilder {
    fetcher: Box<dyn Fetcher>,
}

impl ContentBuilder {
    /// Create a builder with a custom fetcher
    pub fn with_fetcher(fetcher: Box<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    /// Assemble content from text plus attachments.
    ///
    /// All-or-nothing: the first failing attachment aborts the build and no
    /// partial content is returned.
    pub fn build(
        &self,
        text: Option<&str>,
        attachments: &Attachments,
    ) -> Result<Content, ContentError> {
        let mut parts = Vec::new();

        if let Some(text) = text {
            if !text.is_empty() {
                parts.push(ContentPart::text(text));
            }
        }

        if let Some(sources) = &attachments.image {
            for source in sources.iter() {
                parts.push(encoder::image_part(source)?);
            }
        }

        if let Some(sources) = &attachments.audio {
            for source in sources.iter() {
                parts.push(encoder::audio_part(source, self.fetcher.as_ref())?);
            }
        }

        debug!(parts = parts.len(), "assembled message content");
        Ok(Content::from_parts(parts))
    }
}

impl Default for ContentBuilder {
    fn default() -> Self {
        Self {
            fetcher: Box::new(HttpFetcher::new()),
        }
    }
}

/// Assemble content with the default HTTP fetcher.
///
/// Convenience wrapper over [`ContentBuilder::build`]; remote audio sources
/// trigger a blocking fetch, so call this off any async runtime.
pub fn build_content(
    text: Option<&str>,
    attachments: &Attachments,
) -> Result<Content, ContentError> {
    ContentBuilder::default().build(text, attachments)
}

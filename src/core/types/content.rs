//! Content part types for multimodal messages

use serde::{Deserialize, Serialize};

use super::message::MessageContent;

/// Content part (multimodal support)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContentPart {
    /// Text content
    #[serde(rename = "text")]
    Text { text: String },

    /// Image referenced by URL, dereferenced by the provider
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl },

    /// Base64 encoded image
    #[serde(rename = "image")]
    Image {
        /// Inline image data
        source: ImageSource,
    },

    /// Base64 encoded audio
    #[serde(rename = "audio")]
    Audio {
        /// Inline audio data
        audio: AudioData,
    },
}

impl ContentPart {
    /// Build a text part
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Build a URL-reference image part
    pub fn image_url(url: impl Into<String>) -> Self {
        Self::ImageUrl {
            image_url: ImageUrl {
                url: url.into(),
                detail: None,
            },
        }
    }
}

/// Image URL structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrl {
    /// Image URL
    pub url: String,
    /// Detail level ("auto", "low", "high")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Inline image data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSource {
    /// Media type (e.g. "image/png")
    pub media_type: String,
    /// Base64 encoded data
    pub data: String,
}

/// Inline audio data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioData {
    /// Base64 encoded audio data
    pub data: String,
    /// Audio container format (e.g. "wav", "mp3")
    pub format: String,
}

/// Ordered multimodal content for one outgoing message.
///
/// Built once by [`crate::core::content::build_content`] and never mutated
/// afterwards. Part order is fixed: text (when present), then images in input
/// order, then audio in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Content {
    parts: Vec<ContentPart>,
}

impl Content {
    pub(crate) fn from_parts(parts: Vec<ContentPart>) -> Self {
        Self { parts }
    }

    /// Parts in wire order
    pub fn parts(&self) -> &[ContentPart] {
        &self.parts
    }

    /// True when no parts were accumulated
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Number of parts
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Consume into the part sequence for transport, or `None` when empty.
    ///
    /// Empty content must serialize as an absent field, never as `[]`.
    pub fn into_wire_parts(self) -> Option<Vec<ContentPart>> {
        if self.parts.is_empty() {
            None
        } else {
            Some(self.parts)
        }
    }

    /// Consume into [`MessageContent`], collapsing a single text-only part to
    /// the bare string form accepted by most providers.
    pub fn into_message_content(self) -> Option<MessageContent> {
        let parts = self.into_wire_parts()?;
        if parts.len() == 1 {
            if let ContentPart::Text { text } = &parts[0] {
                return Some(MessageContent::Text(text.clone()));
            }
        }
        Some(MessageContent::Parts(parts))
    }
}

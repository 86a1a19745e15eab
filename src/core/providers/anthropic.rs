//! Anthropic-family wire shapes for content parts
//!
//! Pure mapping from the unified [`ContentPart`] model to Anthropic-style
//! content blocks, where inline payloads live under `source` with
//! `"type": "base64"`. This family has no audio block and no URL image
//! shorthand other than data URLs, so those map to typed errors instead of
//! being silently dropped.

use serde::{Deserialize, Serialize};

use crate::core::types::content::{Content, ContentPart};
use crate::core::types::errors::{ClientError, Result};
use crate::core::types::message::MessageContent;

const PROVIDER: &str = "anthropic";

/// Anthropic content block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AnthropicContentBlock {
    /// Text block
    #[serde(rename = "text")]
    Text { text: String },

    /// Image block with inline base64 source
    #[serde(rename = "image")]
    Image { source: AnthropicImageSource },
}

/// Inline image source for Anthropic image blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnthropicImageSource {
    /// Source encoding, always "base64"
    #[serde(rename = "type")]
    pub source_type: String,
    /// Media type (e.g. "image/png")
    pub media_type: String,
    /// Base64 encoded data
    pub data: String,
}

impl AnthropicImageSource {
    fn base64(media_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            source_type: "base64".to_string(),
            media_type: media_type.into(),
            data: data.into(),
        }
    }
}

/// Map one unified part to its Anthropic wire shape
pub fn to_anthropic_block(part: ContentPart) -> Result<AnthropicContentBlock> {
    match part {
        ContentPart::Text { text } => Ok(AnthropicContentBlock::Text { text }),
        ContentPart::Image { source } => Ok(AnthropicContentBlock::Image {
            source: AnthropicImageSource::base64(source.media_type, source.data),
        }),
        ContentPart::ImageUrl { image_url } => {
            if let Some(block) = data_url_to_block(&image_url.url) {
                Ok(block)
            } else {
                Err(ClientError::UnsupportedContent {
                    provider: PROVIDER,
                    message: format!(
                        "image URL references are not supported, inline the image bytes: {}",
                        image_url.url
                    ),
                })
            }
        }
        ContentPart::Audio { .. } => Err(ClientError::UnsupportedContent {
            provider: PROVIDER,
            message: "audio input is not supported by this provider family".to_string(),
        }),
    }
}

/// Map built content to an Anthropic content block list.
///
/// Empty content maps to `None` (field omitted). Anthropic has no bare-string
/// shorthand for multi-part messages, so even a single text part stays a
/// structured block list.
pub fn to_anthropic_blocks(content: Content) -> Result<Option<Vec<AnthropicContentBlock>>> {
    match content.into_wire_parts() {
        None => Ok(None),
        Some(parts) => parts
            .into_iter()
            .map(to_anthropic_block)
            .collect::<Result<Vec<_>>>()
            .map(Some),
    }
}

/// Map unified message content to Anthropic content blocks
pub fn to_anthropic_message_content(content: MessageContent) -> Result<Vec<AnthropicContentBlock>> {
    match content {
        MessageContent::Text(text) => Ok(vec![AnthropicContentBlock::Text { text }]),
        MessageContent::Parts(parts) => parts.into_iter().map(to_anthropic_block).collect(),
    }
}

/// Split a `data:<media>;base64,<payload>` URL into an inline image block
fn data_url_to_block(url: &str) -> Option<AnthropicContentBlock> {
    let rest = url.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    let media_type = header.strip_suffix(";base64")?;
    Some(AnthropicContentBlock::Image {
        source: AnthropicImageSource::base64(media_type, payload),
    })
}

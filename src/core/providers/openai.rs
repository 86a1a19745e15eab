//! OpenAI-family wire shapes for content parts
//!
//! Pure mapping from the unified [`ContentPart`] model to the
//! `image_url` / `input_audio` part objects used by OpenAI-compatible chat
//! APIs. Inline images are carried as `data:` URLs inside `image_url`,
//! matching how that family transports base64 payloads.

use serde::{Deserialize, Serialize};

use crate::core::types::content::{Content, ContentPart};
use crate::core::types::errors::{ClientError, Result};
use crate::core::types::message::MessageContent;

const PROVIDER: &str = "openai";

/// OpenAI content part
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OpenAIContentPart {
    /// Text part
    #[serde(rename = "text")]
    Text { text: String },

    /// Image part (URL or data URL)
    #[serde(rename = "image_url")]
    ImageUrl { image_url: OpenAIImageUrl },

    /// Inline audio part
    #[serde(rename = "input_audio")]
    InputAudio { input_audio: OpenAIInputAudio },
}

/// OpenAI image URL object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenAIImageUrl {
    /// URL or data URL
    pub url: String,
    /// Detail level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// OpenAI inline audio object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenAIInputAudio {
    /// Base64 encoded audio data
    pub data: String,
    /// Audio format
    pub format: String,
}

/// Map one unified part to its OpenAI wire shape
pub fn to_openai_part(part: ContentPart) -> Result<OpenAIContentPart> {
    match part {
        ContentPart::Text { text } => Ok(OpenAIContentPart::Text { text }),
        ContentPart::ImageUrl { image_url } => Ok(OpenAIContentPart::ImageUrl {
            image_url: OpenAIImageUrl {
                url: image_url.url,
                detail: image_url.detail,
            },
        }),
        ContentPart::Image { source } => Ok(OpenAIContentPart::ImageUrl {
            image_url: OpenAIImageUrl {
                url: format!("data:{};base64,{}", source.media_type, source.data),
                detail: None,
            },
        }),
        ContentPart::Audio { audio } => Ok(OpenAIContentPart::InputAudio {
            input_audio: OpenAIInputAudio {
                data: audio.data,
                format: audio.format,
            },
        }),
    }
}

/// Map built content to the OpenAI message `content` value.
///
/// Empty content maps to `None` (field omitted); a single text part collapses
/// to a bare JSON string, which this family accepts as shorthand.
pub fn to_openai_content(content: Content) -> Result<Option<serde_json::Value>> {
    match content.into_message_content() {
        None => Ok(None),
        Some(message_content) => to_openai_message_content(message_content).map(Some),
    }
}

/// Map unified message content to the OpenAI `content` value
pub fn to_openai_message_content(content: MessageContent) -> Result<serde_json::Value> {
    match content {
        MessageContent::Text(text) => Ok(serde_json::Value::String(text)),
        MessageContent::Parts(parts) => {
            let wire_parts = parts
                .into_iter()
                .map(to_openai_part)
                .collect::<Result<Vec<_>>>()?;
            serde_json::to_value(wire_parts).map_err(|err| ClientError::UnsupportedContent {
                provider: PROVIDER,
                message: format!("failed to serialize content parts: {}", err),
            })
        }
    }
}

//! # polyllm
//!
//! Unified client types for multiple LLM providers: one set of chat,
//! streaming, and tool-calling types, plus a content-normalization layer
//! that turns heterogeneous user input (text, image files, image URLs, audio
//! files) into each provider family's wire shape.
//!
//! ## Features
//!
//! - **Unified types**: one `ChatRequest`/`ChatResponse`/`ChatChunk` model
//!   for every provider
//! - **Multimodal content builder**: text plus image/audio attachments,
//!   local or remote, normalized into ordered content parts
//! - **Per-family wire mappings**: OpenAI-style `image_url`/`input_audio`
//!   and Anthropic-style `source.base64` shapes as pure functions
//! - **Provider seam**: an async `Provider` trait for transports to
//!   implement; no HTTP transport ships in this crate
//!
//! ## Quick Start
//!
//! ```no_run
//! use polyllm::{Attachments, build_content, user_message_with_content};
//!
//! fn main() -> Result<(), polyllm::ContentError> {
//!     let content = build_content(
//!         Some("Describe this"),
//!         &Attachments::default().with_image("https://example.com/a.png"),
//!     )?;
//!     let message = user_message_with_content(content);
//!     println!("{}", serde_json::to_string_pretty(&message).unwrap());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod core;

// Content normalization
pub use crate::core::content::{
    Attachments, ContentBuilder, FetchError, Fetcher, HttpFetcher, Sources, build_content,
};

// Unified type system
pub use crate::core::types::{
    AttachmentKind, AudioData, ChatChunk, ChatChoice, ChatDelta, ChatMessage, ChatRequest,
    ChatResponse, ChatStreamChoice, ClientError, Content, ContentError, ContentPart,
    FinishReason, FunctionCall, FunctionDefinition, ImageSource, ImageUrl, MessageContent,
    MessageRole, ModelInfo, ProviderCapability, Result, Tool, ToolCall, ToolChoice, ToolType,
    Usage, assistant_message, system_message, user_message, user_message_with_content,
};

// Provider seam and per-family mappings
pub use crate::core::providers::{ChatStream, Provider, ProviderType, split_model_name};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize default logging for binaries and examples
pub fn init() {
    tracing_subscriber::fmt::init();
}

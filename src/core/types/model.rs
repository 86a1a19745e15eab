//! Model information types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Provider capability enum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderCapability {
    /// Chat completion
    ChatCompletion,
    /// Streaming chat completion
    ChatCompletionStream,
    /// Tool calling
    ToolCalling,
    /// Image input
    Vision,
    /// Audio input
    AudioInput,
}

/// Model information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Model ID
    pub id: String,
    /// Model name
    pub name: String,
    /// Provider name
    pub provider: String,
    /// Maximum context length
    pub max_context_length: u32,
    /// Supports streaming
    pub supports_streaming: bool,
    /// Supports tool calling
    pub supports_tools: bool,
    /// Supports multimodal input
    pub supports_multimodal: bool,
    /// Supported features
    pub capabilities: Vec<ProviderCapability>,
    /// Extra metadata
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Default for ModelInfo {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            provider: String::new(),
            max_context_length: 4096,
            supports_streaming: false,
            supports_tools: false,
            supports_multimodal: false,
            capabilities: vec![ProviderCapability::ChatCompletion],
            metadata: HashMap::new(),
        }
    }
}

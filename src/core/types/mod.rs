//! Core type definition module
//!
//! Contains the unified data structures shared by all providers.

pub mod chat;
pub mod content;
pub mod errors;
pub mod message;
pub mod model;
pub mod tools;

// Re-export all public types
pub use chat::*;
pub use content::*;
pub use errors::*;
pub use message::*;
pub use model::*;
pub use tools::*;

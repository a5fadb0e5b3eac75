//! wachat-engine: Headless core of the wachat chat client
//!
//! This crate provides everything that does not touch the terminal:
//! - Message and role types
//! - Conversation state with the single-flight submit cycle
//! - The chat service client (trait plus HTTP implementation)
//! - Configuration loading and resolution

pub mod client;
pub mod config;
pub mod conversation;
pub mod message;

// Re-export commonly used types
pub use client::{chat_endpoint, ChatClient, ChatError, ChatRequest, HttpChatClient};
pub use config::{Config, ConfigError, ThemeName};
pub use conversation::{failure_reason, Conversation, Submission, FALLBACK_ERROR_REASON};
pub use message::{Message, Role, ERROR_PREFIX};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Message types for a conversation.
//!
//! A [`Message`] is immutable once created. Its id is a random UUID so two
//! messages created within the same clock tick never collide.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Content prefix that marks a message as a failed delivery.
pub const ERROR_PREFIX: &str = "Error:";

/// Author of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Typed by the local user.
    User,
    /// Produced by the chat service, or synthesized from a failure.
    Assistant,
}

impl Role {
    /// Wire name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single entry in the conversation log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: String,
    content: String,
    role: Role,
    timestamp: DateTime<Local>,
}

impl Message {
    fn new(role: Role, content: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content,
            role,
            timestamp: Local::now(),
        }
    }

    /// Create a user message. The content is kept exactly as typed.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content.into())
    }

    /// Create an assistant reply.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content.into())
    }

    /// Create the assistant message shown when a delivery fails.
    pub fn error(reason: &str) -> Self {
        Self::new(Role::Assistant, format!("{ERROR_PREFIX} {reason}"))
    }

    /// Replace the creation time. Only the display label depends on it.
    #[must_use]
    pub fn at(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Whether this message renders with the error style.
    ///
    /// Decided by content alone; the role is not consulted.
    pub fn is_error(&self) -> bool {
        self.content.starts_with(ERROR_PREFIX)
    }

    /// Creation time formatted as `HH:mm`.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_message_creation() {
        let user = Message::user("Hello");
        assert_eq!(user.role(), Role::User);
        assert_eq!(user.content(), "Hello");

        let reply = Message::assistant("Hi there!");
        assert_eq!(reply.role(), Role::Assistant);
        assert!(!reply.is_error());
    }

    #[test]
    fn test_user_content_is_not_trimmed() {
        let msg = Message::user("  padded  ");
        assert_eq!(msg.content(), "  padded  ");
    }

    #[test]
    fn test_error_message_format() {
        let msg = Message::error("rate limited");
        assert_eq!(msg.content(), "Error: rate limited");
        assert_eq!(msg.role(), Role::Assistant);
        assert!(msg.is_error());
    }

    #[test]
    fn test_error_style_is_content_based() {
        assert!(Message::user("Error: typed by hand").is_error());
        assert!(!Message::assistant("error: lowercase").is_error());
        assert!(!Message::assistant(" Error: leading space").is_error());
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: std::collections::HashSet<String> = (0..1000)
            .map(|_| Message::user("x").id().to_string())
            .collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_time_label() {
        let ts = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 59).unwrap();
        let msg = Message::assistant("hi").at(ts);
        assert_eq!(msg.time_label(), "07:05");
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(Role::User.as_str(), "user");
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
    }
}

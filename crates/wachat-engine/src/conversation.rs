//! Conversation state and the submit/settle cycle.
//!
//! A [`Conversation`] owns the message log, the draft and the pending flag.
//! Submitting is split in two so an event loop can keep running while the
//! request is outstanding:
//!
//! 1. [`Conversation::begin_submit`] appends the user's message, clears the
//!    draft and marks the conversation pending.
//! 2. [`Conversation::settle`] appends the reply or the error message and
//!    clears the pending flag.
//!
//! [`Conversation::submit`] runs both halves around an awaited call.

use crate::client::{ChatClient, ChatError};
use crate::message::Message;
use tracing::{debug, warn};

/// Reason shown when the service gives no detail for a failure.
pub const FALLBACK_ERROR_REASON: &str = "An error occurred while sending your message.";

/// Reason text for a failed delivery.
pub fn failure_reason(error: &ChatError) -> &str {
    error.detail().unwrap_or(FALLBACK_ERROR_REASON)
}

/// A request produced by [`Conversation::begin_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Id of the user message that was appended.
    pub message_id: String,
    /// Text to send, exactly as typed.
    pub content: String,
}

/// In-memory conversation state.
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    draft: String,
    pending: bool,
    closed: bool,
}

impl Conversation {
    /// Create an empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Whether a request is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Replace the draft. Allowed while pending.
    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Whether [`begin_submit`](Self::begin_submit) would accept the current draft.
    pub fn can_submit(&self) -> bool {
        !self.pending && !self.closed && !self.draft.trim().is_empty()
    }

    /// Start a submission.
    ///
    /// Returns `None` without touching any state if the draft is blank, a
    /// request is already pending, or the conversation is closed.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if !self.can_submit() {
            return None;
        }

        let content = std::mem::take(&mut self.draft);
        let message = Message::user(content.clone());
        let submission = Submission {
            message_id: message.id().to_string(),
            content,
        };

        self.messages.push(message);
        self.pending = true;
        debug!(id = %submission.message_id, len = submission.content.len(), "submission started");

        Some(submission)
    }

    /// Apply the outcome of the outstanding request.
    ///
    /// Returns the appended message, or `None` if the result was discarded
    /// because nothing was pending or the conversation is closed.
    pub fn settle(&mut self, result: Result<String, ChatError>) -> Option<&Message> {
        if self.closed {
            debug!("discarding result for closed conversation");
            return None;
        }
        if !self.pending {
            warn!("discarding result with no pending submission");
            return None;
        }

        let message = match result {
            Ok(reply) => Message::assistant(reply),
            Err(error) => {
                warn!(error = %error, "message delivery failed");
                Message::error(failure_reason(&error))
            }
        };

        self.messages.push(message);
        self.pending = false;
        self.messages.last()
    }

    /// Run a full submit cycle against `client`.
    pub async fn submit(&mut self, client: &dyn ChatClient) {
        let Some(submission) = self.begin_submit() else {
            return;
        };
        let result = client.complete(&submission.content).await;
        self.settle(result);
    }

    /// Mark the conversation as torn down. Later results are ignored.
    pub fn close(&mut self) {
        self.closed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Role;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Client that always returns a fixed outcome and counts calls.
    struct FixedClient {
        reply: Result<String, Option<String>>,
        calls: AtomicUsize,
    }

    impl FixedClient {
        fn ok(reply: &str) -> Self {
            Self {
                reply: Ok(reply.into()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(detail: Option<&str>) -> Self {
            Self {
                reply: Err(detail.map(String::from)),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ChatClient for FixedClient {
        async fn complete(&self, _content: &str) -> Result<String, ChatError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Ok(reply) => Ok(reply.clone()),
                Err(detail) => Err(ChatError::Status {
                    status: 500,
                    detail: detail.clone(),
                }),
            }
        }
    }

    fn contents(conv: &Conversation) -> Vec<(Role, &str)> {
        conv.messages()
            .iter()
            .map(|m| (m.role(), m.content()))
            .collect()
    }

    #[tokio::test]
    async fn test_submit_success() {
        let client = FixedClient::ok("Hi there!");
        let mut conv = Conversation::new();
        conv.set_draft("Hello");

        conv.submit(&client).await;

        assert_eq!(
            contents(&conv),
            vec![(Role::User, "Hello"), (Role::Assistant, "Hi there!")]
        );
        assert!(!conv.is_pending());
        assert_eq!(conv.draft(), "");
    }

    #[tokio::test]
    async fn test_submit_failure_with_detail() {
        let client = FixedClient::failing(Some("rate limited"));
        let mut conv = Conversation::new();
        conv.set_draft("Hello");

        conv.submit(&client).await;

        assert_eq!(conv.messages().len(), 2);
        assert_eq!(conv.messages()[1].content(), "Error: rate limited");
        assert_eq!(conv.messages()[1].role(), Role::Assistant);
        assert!(!conv.is_pending());
    }

    #[tokio::test]
    async fn test_submit_failure_without_detail() {
        let client = FixedClient::failing(None);
        let mut conv = Conversation::new();
        conv.set_draft("Hello");

        conv.submit(&client).await;

        assert_eq!(
            conv.messages()[1].content(),
            "Error: An error occurred while sending your message."
        );
    }

    #[tokio::test]
    async fn test_blank_draft_is_noop() {
        let client = FixedClient::ok("unused");
        let mut conv = Conversation::new();

        for draft in ["", "   ", "\n\t "] {
            conv.set_draft(draft);
            conv.submit(&client).await;
            assert!(conv.messages().is_empty());
            assert!(!conv.is_pending());
            assert_eq!(conv.draft(), draft);
        }
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_begin_submit_appends_user_message_immediately() {
        let mut conv = Conversation::new();
        conv.set_draft("  Hello  ");

        let submission = conv.begin_submit().unwrap();

        assert_eq!(submission.content, "  Hello  ");
        assert_eq!(conv.messages().len(), 1);
        assert_eq!(conv.messages()[0].id(), submission.message_id);
        assert_eq!(conv.messages()[0].content(), "  Hello  ");
        assert_eq!(conv.messages()[0].role(), Role::User);
        assert!(conv.is_pending());
        assert_eq!(conv.draft(), "");
    }

    #[test]
    fn test_single_flight() {
        let mut conv = Conversation::new();
        conv.set_draft("first");
        assert!(conv.begin_submit().is_some());

        // Typing while pending still edits the draft.
        conv.set_draft("second");
        assert!(!conv.can_submit());
        assert!(conv.begin_submit().is_none());
        assert_eq!(conv.messages().len(), 1);
        assert_eq!(conv.draft(), "second");

        conv.settle(Ok("reply".into()));
        assert!(conv.can_submit());
        assert!(conv.begin_submit().is_some());
        assert_eq!(conv.messages().len(), 3);
    }

    #[test]
    fn test_pairs_are_never_interleaved() {
        let mut conv = Conversation::new();
        for i in 0..5 {
            conv.set_draft(format!("q{i}"));
            conv.begin_submit().unwrap();
            if i % 2 == 0 {
                conv.settle(Ok(format!("a{i}")));
            } else {
                conv.settle(Err(ChatError::Other("down".into())));
            }
        }

        assert_eq!(conv.messages().len(), 10);
        for (i, pair) in conv.messages().chunks(2).enumerate() {
            assert_eq!(pair[0].role(), Role::User);
            assert_eq!(pair[0].content(), format!("q{i}"));
            assert_eq!(pair[1].role(), Role::Assistant);
        }
    }

    #[test]
    fn test_failure_text_is_stable() {
        let texts: Vec<String> = (0..3)
            .map(|_| {
                let mut conv = Conversation::new();
                conv.set_draft("Hello");
                conv.begin_submit();
                let err = ChatError::Status {
                    status: 503,
                    detail: Some("overloaded".into()),
                };
                conv.settle(Err(err))
                    .map(|m| m.content().to_string())
                    .unwrap_or_default()
            })
            .collect();
        assert!(texts.iter().all(|t| t == "Error: overloaded"));
    }

    #[test]
    fn test_settle_without_pending_is_ignored() {
        let mut conv = Conversation::new();
        assert!(conv.settle(Ok("stray".into())).is_none());
        assert!(conv.messages().is_empty());
    }

    #[test]
    fn test_closed_conversation_discards_late_result() {
        let mut conv = Conversation::new();
        conv.set_draft("Hello");
        conv.begin_submit();
        conv.close();

        assert!(conv.settle(Ok("late".into())).is_none());
        assert_eq!(conv.messages().len(), 1);

        conv.set_draft("again");
        assert!(conv.begin_submit().is_none());
    }

    #[test]
    fn test_failure_reason() {
        assert_eq!(
            failure_reason(&ChatError::Other("socket closed".into())),
            FALLBACK_ERROR_REASON
        );
        let err = ChatError::Status {
            status: 400,
            detail: Some("bad input".into()),
        };
        assert_eq!(failure_reason(&err), "bad input");
    }
}

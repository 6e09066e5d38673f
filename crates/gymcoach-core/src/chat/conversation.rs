//! Chat history and send state for the coach panel.

use super::message::ChatMessage;
use crate::error::CoachResult;

/// Assistant reply shown when the chat endpoint cannot be reached.
pub const CHAT_FALLBACK_REPLY: &str = "Sorry, could not reach the server.";

/// Ordered messages plus whether a reply is pending.
///
/// Sending is two-phase so the UI can show the user's message and a spinner
/// while the request is in flight:
///
/// ```
/// use gymcoach_core::chat::ChatLog;
///
/// let mut log = ChatLog::new();
/// let text = log.begin_send("  how deep should I squat? ").unwrap();
/// assert_eq!(text, "how deep should I squat?");
/// assert!(log.is_loading());
/// log.finish(Ok("Hip crease below the knee.".to_string()));
/// assert_eq!(log.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    loading: bool,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether `input` would be sent right now.
    pub fn can_send(&self, input: &str) -> bool {
        !self.loading && !input.trim().is_empty()
    }

    /// Record the user's message and mark a reply as pending.
    ///
    /// Returns the trimmed text to send, or `None` when the input is blank
    /// or a reply is already pending.
    pub fn begin_send(&mut self, input: &str) -> Option<String> {
        if !self.can_send(input) {
            return None;
        }
        let text = input.trim().to_string();
        self.messages.push(ChatMessage::user(text.clone()));
        self.loading = true;
        Some(text)
    }

    /// Append the assistant reply, or the fallback on failure.
    pub fn finish(&mut self, reply: CoachResult<String>) {
        let content = match reply {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Chat request failed: {}", e);
                CHAT_FALLBACK_REPLY.to_string()
            }
        };
        self.messages.push(ChatMessage::assistant(content));
        self.loading = false;
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.loading = false;
    }
}

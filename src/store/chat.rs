//! Chat transcript state

use crate::error::ApiError;
use crate::types::{ChatMessage, MessageRole};

const SEND_FAILED: &str = "Sorry, there was an error processing your request.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pub input: String,
    loading: bool,
}

impl ChatSession {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the send button is usable
    pub fn can_send(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    /// "Bot is typing" bubble: a send is running and the user spoke last
    pub fn show_typing(&self) -> bool {
        self.loading
            && self
                .messages
                .last()
                .is_some_and(|m| m.role == MessageRole::User)
    }

    /// Result of the one history fetch on page entry; failures leave the
    /// transcript empty
    pub fn load_history(&mut self, outcome: Result<Vec<ChatMessage>, ApiError>) {
        match outcome {
            Ok(messages) => self.messages = messages,
            Err(e) => tracing::error!("Error fetching chat history: {}", e),
        }
    }

    /// Append the user's message before the request goes out.
    ///
    /// Returns the text to send, or `None` when the input is blank or a
    /// send is already in flight.
    pub fn begin_send(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        let text = std::mem::take(&mut self.input);
        self.messages.push(ChatMessage::user(text.clone()));
        self.loading = true;
        Some(text)
    }

    /// Append the bot reply, or a bot-side error message in its place
    pub fn finish_send(&mut self, outcome: Result<String, ApiError>) {
        let message = match outcome {
            Ok(reply) => ChatMessage::bot(reply),
            Err(e) => {
                tracing::error!("Error sending message: {}", e);
                ChatMessage::error(e.error_or(SEND_FAILED))
            }
        };
        self.messages.push(message);
        self.loading = false;
    }
}

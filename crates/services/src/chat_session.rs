use chrono::{DateTime, Utc};
use thiserror::Error;

use ainstien_core::model::{ChatMessage, ChatTranscript};

use crate::error::ApiError;
use crate::generation::FetchTag;

/// Bot-side placeholder appended when a reply could not be obtained.
pub const CHAT_FALLBACK_TEXT: &str = "Sorry, I encountered an error.";

/// Bot-side placeholder appended when the backend reports itself offline.
pub const CHAT_OFFLINE_TEXT: &str = "Ainstien is currently offline. Please try again later.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChatError {
    #[error("message is empty")]
    EmptyMessage,
    #[error("Ainstien is offline; reconnect before sending")]
    Offline,
    #[error("a reply is still pending")]
    ReplyPending,
}

/// State machine for one chat conversation.
///
/// The transcript is append-only and session-scoped. Like [`crate::TestSession`],
/// the session does no I/O: `begin_send` appends the user message and tags the
/// request, `apply_reply` folds the outcome back in and discards stale tags.
///
/// An offline reply latches the session: further sends are rejected until
/// [`Self::reconnect`] clears the latch or a deemed-online reply arrives.
#[derive(Debug, Default)]
pub struct ChatSession {
    transcript: ChatTranscript,
    offline: bool,
    pending: bool,
    generation: u64,
}

impl ChatSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the user's message and tag the reply request that must follow.
    /// Returns the trimmed text to send.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::EmptyMessage` for empty or whitespace-only input,
    /// `ChatError::Offline` while the offline latch is set, and
    /// `ChatError::ReplyPending` while an earlier reply is still in flight.
    pub fn begin_send(
        &mut self,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<(String, FetchTag), ChatError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if self.offline {
            return Err(ChatError::Offline);
        }
        if self.pending {
            return Err(ChatError::ReplyPending);
        }

        self.transcript.push(ChatMessage::user(trimmed, now));
        self.pending = true;
        self.generation += 1;
        Ok((trimmed.to_string(), FetchTag::new(self.generation)))
    }

    /// Fold the reply outcome into the transcript. Stale tags are ignored.
    ///
    /// A successful reply clears the offline latch; an offline failure sets
    /// it. Transport and other non-offline failures append the fixed fallback
    /// text without touching the latch.
    pub fn apply_reply(
        &mut self,
        tag: FetchTag,
        outcome: Result<String, ApiError>,
        now: DateTime<Utc>,
    ) {
        if !tag.matches(self.generation) {
            return;
        }
        self.pending = false;
        match outcome {
            Ok(reply) => {
                self.offline = false;
                self.transcript.push(ChatMessage::bot(reply, now));
            }
            Err(err) if err.is_offline() => {
                self.offline = true;
                self.transcript.push(ChatMessage::bot_error(CHAT_OFFLINE_TEXT, now));
            }
            Err(_) => {
                self.transcript.push(ChatMessage::bot_error(CHAT_FALLBACK_TEXT, now));
            }
        }
    }

    /// Explicitly clear the offline latch so the user can try again.
    pub fn reconnect(&mut self) {
        self.offline = false;
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        self.transcript.messages()
    }

    #[must_use]
    pub fn transcript(&self) -> &ChatTranscript {
        &self.transcript
    }

    #[must_use]
    pub fn is_offline(&self) -> bool {
        self.offline
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

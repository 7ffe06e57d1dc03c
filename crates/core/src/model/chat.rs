use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Bot,
}

/// One entry in a chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    role: ChatRole,
    text: String,
    is_error: bool,
    sent_at: DateTime<Utc>,
}

impl ChatMessage {
    /// A message typed by the user.
    #[must_use]
    pub fn user(text: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            is_error: false,
            sent_at,
        }
    }

    /// A reply from the bot.
    #[must_use]
    pub fn bot(text: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self {
            role: ChatRole::Bot,
            text: text.into(),
            is_error: false,
            sent_at,
        }
    }

    /// A bot-side placeholder shown when a reply could not be obtained.
    #[must_use]
    pub fn bot_error(text: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self {
            role: ChatRole::Bot,
            text: text.into(),
            is_error: true,
            sent_at,
        }
    }

    #[must_use]
    pub fn role(&self) -> ChatRole {
        self.role
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.is_error
    }

    #[must_use]
    pub fn sent_at(&self) -> DateTime<Utc> {
        self.sent_at
    }
}

/// Ordered, append-only sequence of chat messages. Session-scoped; nothing is
/// ever edited or removed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

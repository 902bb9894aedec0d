//! Conversation model types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(pub i64);

impl ConversationId {
    /// Create a new conversation ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A conversation shown in the conversation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Stable identifier.
    pub id: ConversationId,
    /// Display title (contact name or group title).
    pub title: String,
    /// Preview of the latest message.
    #[serde(default)]
    pub snippet: String,
    /// Whether the user pinned this conversation to the top.
    #[serde(default)]
    pub pinned: bool,
    /// Whether the latest message has been read.
    #[serde(default = "default_read")]
    pub read: bool,
    /// Whether notifications are muted.
    #[serde(default)]
    pub muted: bool,
    /// Time of the last activity.
    pub timestamp: DateTime<Utc>,
}

const fn default_read() -> bool {
    true
}

impl Conversation {
    /// Creates a new, unpinned, read conversation.
    #[must_use]
    pub fn new(id: ConversationId, title: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            title: title.into(),
            snippet: String::new(),
            pinned: false,
            read: true,
            muted: false,
            timestamp,
        }
    }

    /// Returns this conversation with the pinned flag set.
    #[must_use]
    pub const fn with_pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    /// Returns this conversation with a message preview.
    #[must_use]
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = snippet.into();
        self
    }

    /// Returns this conversation with the read flag set.
    #[must_use]
    pub const fn with_read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }
}

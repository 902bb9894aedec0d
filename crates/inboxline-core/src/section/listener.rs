//! Notifications emitted while the section index mutates.

use super::SectionIndex;
use crate::Conversation;

/// Why a conversation is leaving the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalReason {
    /// The conversation is being deleted.
    Delete,
    /// The conversation is being moved to the archive.
    Archive,
}

impl RemovalReason {
    /// Parse from string representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "delete" => Some(Self::Delete),
            "archive" => Some(Self::Archive),
            _ => None,
        }
    }

    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Archive => "archive",
        }
    }
}

impl std::fmt::Display for RemovalReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives list changes in the same call that makes them.
///
/// Row notifications arrive first, then exactly one removal-reason callback.
/// Both run after the index has been updated, so a listener may query the
/// index it is handed.
pub trait ListListener {
    /// `count` flat rows starting at `start` were removed.
    fn rows_removed(&mut self, start: usize, count: usize) {
        let _ = (start, count);
    }

    /// A conversation was removed because it is being deleted.
    fn removed_for_delete(&mut self, index: &SectionIndex, conversation: &Conversation) {
        let _ = (index, conversation);
    }

    /// A conversation was removed because it is being archived.
    fn removed_for_archive(&mut self, index: &SectionIndex, conversation: &Conversation) {
        let _ = (index, conversation);
    }
}

/// A listener that ignores all notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopListener;

impl ListListener for NoopListener {}

/// A listener that logs notifications using tracing.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingListener;

impl ListListener for LoggingListener {
    fn rows_removed(&mut self, start: usize, count: usize) {
        tracing::debug!(start, count, "Rows removed");
    }

    fn removed_for_delete(&mut self, index: &SectionIndex, conversation: &Conversation) {
        tracing::debug!(id = %conversation.id, remaining = index.len(), "Conversation deleted");
    }

    fn removed_for_archive(&mut self, index: &SectionIndex, conversation: &Conversation) {
        tracing::debug!(id = %conversation.id, remaining = index.len(), "Conversation archived");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_roundtrip() {
        for reason in [RemovalReason::Delete, RemovalReason::Archive] {
            assert_eq!(RemovalReason::parse(reason.as_str()), Some(reason));
        }
        assert_eq!(RemovalReason::parse("ARCHIVE"), Some(RemovalReason::Archive));
        assert_eq!(RemovalReason::parse("mute"), None);
    }
}

//! Conversation snapshots read from JSON files.

use std::path::Path;

use anyhow::{Context, Result};
use inboxline_core::Conversation;

/// Reads a snapshot file: a JSON array of conversations.
pub fn load(path: &Path) -> Result<Vec<Conversation>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let mut conversations: Vec<Conversation> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse snapshot {}", path.display()))?;

    order_for_display(&mut conversations);
    tracing::info!(
        conversations = conversations.len(),
        "Loaded snapshot from {}",
        path.display()
    );
    Ok(conversations)
}

/// Orders conversations the way the message store returns them: pinned
/// first, then most recent activity first.
pub fn order_for_display(conversations: &mut [Conversation]) {
    conversations.sort_by(|a, b| {
        b.pinned
            .cmp(&a.pinned)
            .then_with(|| b.timestamp.cmp(&a.timestamp))
    });
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use inboxline_core::ConversationId;

    #[test]
    fn pinned_first_then_newest() {
        let at = |h| Utc.with_ymd_and_hms(2026, 1, 1, h, 0, 0).unwrap();
        let mut conversations = vec![
            Conversation::new(ConversationId::new(1), "old", at(1)),
            Conversation::new(ConversationId::new(2), "pinned", at(0)).with_pinned(true),
            Conversation::new(ConversationId::new(3), "new", at(5)),
        ];

        order_for_display(&mut conversations);

        let ids: Vec<i64> = conversations.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn load_rejects_missing_file() {
        let err = load(Path::new("/nonexistent/inboxline-snapshot.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read snapshot"));
    }
}

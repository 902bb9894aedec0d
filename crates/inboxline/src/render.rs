//! Plain-text rendering of the sectioned conversation list.

use std::fmt::Write as _;

use inboxline_core::{Classifier, Conversation, Row, SectionIndex, SectionKind};

/// Longest snippet shown on a conversation row.
const SNIPPET_CHARS: usize = 40;

/// Renders every row, one per line, prefixed with its flat position.
pub fn render_list(index: &SectionIndex, classifier: &Classifier) -> String {
    if index.row_count() == 0 {
        return "No conversations\n".to_string();
    }

    let mut out = String::new();
    for (position, row) in index.rows().enumerate() {
        let line = match row {
            Row::Header { kind, count } => header_line(kind, count),
            Row::Conversation(conversation) => conversation_line(conversation, classifier),
        };
        let _ = writeln!(out, "{position:>4}  {line}");
    }
    out
}

fn header_line(kind: SectionKind, count: usize) -> String {
    if kind == SectionKind::Promo {
        return format!("\u{2605} {}", kind.display_name());
    }
    format!("\u{2500}\u{2500} {} ({count}) \u{2500}\u{2500}", kind.display_name())
}

fn conversation_line(conversation: &Conversation, classifier: &Classifier) -> String {
    let marker = if conversation.read { ' ' } else { '\u{25CF}' }; // unread dot
    let mut line = format!("{marker} {}", conversation.title);
    if conversation.muted {
        line.push_str(" \u{1F507}");
    }
    if !conversation.snippet.is_empty() {
        let _ = write!(line, " \u{00B7} {}", truncate(&conversation.snippet));
    }
    let _ = write!(line, "  ({})", timestamp_label(conversation, classifier));
    line
}

fn truncate(snippet: &str) -> String {
    if snippet.chars().count() <= SNIPPET_CHARS {
        return snippet.to_string();
    }
    let mut short: String = snippet.chars().take(SNIPPET_CHARS - 1).collect();
    short.push('\u{2026}');
    short
}

/// Time of day for today's conversations, a date otherwise.
fn timestamp_label(conversation: &Conversation, classifier: &Classifier) -> String {
    let local = conversation
        .timestamp
        .with_timezone(classifier.now().offset());
    if classifier.days_ago(conversation) <= 0 {
        local.format("%H:%M").to_string()
    } else {
        local.format("%b %d").to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use inboxline_core::{ConversationId, SectionConfig};

    fn classifier() -> Classifier {
        Classifier::new(&Utc.with_ymd_and_hms(2026, 5, 20, 18, 0, 0).unwrap())
    }

    #[test]
    fn empty_list() {
        let index = SectionIndex::default();
        assert_eq!(render_list(&index, &classifier()), "No conversations\n");
    }

    #[test]
    fn renders_headers_and_rows() {
        let now = classifier().now().with_timezone(&Utc);
        let conversations = vec![
            Conversation::new(ConversationId::new(1), "Alice", now - Duration::hours(2))
                .with_pinned(true),
            Conversation::new(ConversationId::new(2), "Bob", now - Duration::hours(1))
                .with_read(false)
                .with_snippet("running late"),
            Conversation::new(ConversationId::new(3), "Carol", now - Duration::days(3)),
        ];
        let mut index = SectionIndex::new(SectionConfig::default());
        index.rebuild(conversations, &classifier()).unwrap();

        let text = render_list(&index, &classifier());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("Pinned (1)"));
        assert!(lines[1].contains("Alice"));
        assert!(lines[2].contains("Today (1)"));
        assert!(lines[3].contains("\u{25CF} Bob \u{00B7} running late  (17:00)"));
        assert!(lines[4].contains("Last Week (1)"));
        assert!(lines[5].contains("Carol  (May 17)"));
    }

    #[test]
    fn long_snippets_are_truncated() {
        let long = "x".repeat(100);
        let short = truncate(&long);
        assert_eq!(short.chars().count(), SNIPPET_CHARS);
        assert!(short.ends_with('\u{2026}'));
        assert_eq!(truncate("hi"), "hi");
    }

    #[test]
    fn promo_header() {
        assert!(header_line(SectionKind::Promo, 0).contains("Text from your computer"));
    }
}

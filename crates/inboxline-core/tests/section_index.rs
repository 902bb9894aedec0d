//! Property tests for the section index.
//!
//! Snapshots are generated from random (pinned, age) pairs and ordered the
//! way the data layer delivers them: pinned first, then newest to oldest.

#![allow(clippy::unwrap_used)]

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use proptest::prelude::*;

use inboxline_core::{
    Classifier, Conversation, ConversationId, ListListener, NoopListener, RemovalReason, Row,
    SectionConfig, SectionIndex, SectionKind,
};

fn now() -> DateTime<FixedOffset> {
    FixedOffset::west_opt(5 * 3600)
        .unwrap()
        .with_ymd_and_hms(2026, 10, 18, 15, 0, 0)
        .unwrap()
}

fn snapshot(entries: &[(bool, i64)]) -> Vec<Conversation> {
    let base = now().with_timezone(&Utc);
    let mut conversations: Vec<Conversation> = entries
        .iter()
        .enumerate()
        .map(|(i, &(pinned, minutes_ago))| {
            let id = ConversationId::new(i64::try_from(i).unwrap());
            Conversation::new(id, format!("conversation {i}"), base - Duration::minutes(minutes_ago))
                .with_pinned(pinned)
        })
        .collect();
    conversations.sort_by(|a, b| {
        b.pinned
            .cmp(&a.pinned)
            .then_with(|| b.timestamp.cmp(&a.timestamp))
    });
    conversations
}

fn entries() -> impl Strategy<Value = Vec<(bool, i64)>> {
    // Up to ~90 days back in minutes, with a little future skew.
    prop::collection::vec((prop::bool::weighted(0.2), -120i64..130_000), 0..60)
}

fn configs() -> impl Strategy<Value = SectionConfig> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(show_categories, show_promo, legacy_trailing_section)| SectionConfig {
            show_categories,
            show_promo,
            legacy_trailing_section,
        },
    )
}

fn build(config: SectionConfig, entries: &[(bool, i64)]) -> SectionIndex {
    let mut index = SectionIndex::new(config);
    index
        .rebuild(snapshot(entries), &Classifier::new(&now()))
        .unwrap();
    index
}

#[derive(Default)]
struct Counter {
    rows: Vec<(usize, usize)>,
    callbacks: usize,
}

impl ListListener for Counter {
    fn rows_removed(&mut self, start: usize, count: usize) {
        self.rows.push((start, count));
    }

    fn removed_for_delete(&mut self, _index: &SectionIndex, _conversation: &Conversation) {
        self.callbacks += 1;
    }

    fn removed_for_archive(&mut self, _index: &SectionIndex, _conversation: &Conversation) {
        self.callbacks += 1;
    }
}

proptest! {
    #[test]
    fn section_counts_sum_to_snapshot(config in configs(), entries in entries()) {
        let index = build(config, &entries);
        let total: usize = index.sections().iter().map(|s| s.count).sum();
        prop_assert_eq!(total, entries.len());
        prop_assert_eq!(index.len(), entries.len());
    }

    #[test]
    fn sections_follow_display_order(config in configs(), entries in entries()) {
        let index = build(config, &entries);
        let kinds: Vec<SectionKind> = index.sections().iter().map(|s| s.kind).collect();
        prop_assert!(kinds.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn position_roundtrip(config in configs(), entries in entries()) {
        let index = build(config, &entries);
        for conversation in index.conversations() {
            let position = index.flat_position_for_id(conversation.id).unwrap();
            prop_assert!(!index.is_header(position));
            let found = index.conversation_for_flat_position(position).unwrap();
            prop_assert_eq!(found.id, conversation.id);
        }
    }

    #[test]
    fn rows_iterator_matches_lookup(config in configs(), entries in entries()) {
        let index = build(config, &entries);
        let rows: Vec<Row<'_>> = index.rows().collect();
        prop_assert_eq!(rows.len(), index.row_count());
        for (position, row) in rows.into_iter().enumerate() {
            prop_assert_eq!(index.row(position), Some(row));
        }
    }

    #[test]
    fn removal_decrements_exactly_one_section(
        config in configs(),
        entries in entries(),
        pick in any::<prop::sample::Index>(),
        archive in any::<bool>(),
    ) {
        let mut index = build(config, &entries);
        prop_assume!(index.row_count() > 0);

        let position = pick.index(index.row_count());
        let before = index.sections().to_vec();
        let before_len = index.len();
        let header = index.is_header(position);
        let reason = if archive { RemovalReason::Archive } else { RemovalReason::Delete };
        let mut counter = Counter::default();

        let removed_header = index.remove_at(position, reason, &mut counter);

        if header {
            prop_assert_eq!(index.len(), before_len);
            prop_assert_eq!(index.sections(), before.as_slice());
            prop_assert_eq!(counter.callbacks, 0);
            prop_assert!(counter.rows.is_empty());
        } else {
            prop_assert_eq!(index.len(), before_len - 1);
            prop_assert_eq!(counter.callbacks, 1);
            let before_total: usize = before.iter().map(|s| s.count).sum();
            let after_total: usize = index.sections().iter().map(|s| s.count).sum();
            if config.show_categories {
                prop_assert_eq!(after_total, before_total - 1);
            }
            if removed_header {
                prop_assert_eq!(index.sections().len(), before.len() - 1);
                prop_assert_eq!(counter.rows.clone(), vec![(position - 1, 2)]);
            } else {
                prop_assert_eq!(index.sections().len(), before.len());
                let changed = before
                    .iter()
                    .zip(index.sections())
                    .filter(|(a, b)| a != b)
                    .count();
                prop_assert!(changed <= 1);
                prop_assert_eq!(counter.rows.clone(), vec![(position, 1)]);
            }
        }
    }

    #[test]
    fn stale_positions_are_noops(config in configs(), entries in entries(), past in 0usize..10) {
        let mut index = build(config, &entries);
        let before = index.sections().to_vec();
        let mut counter = Counter::default();

        prop_assert!(!index.remove_at(index.row_count() + past, RemovalReason::Delete, &mut counter));
        prop_assert!(!index.remove_at(usize::MAX, RemovalReason::Archive, &mut counter));

        prop_assert_eq!(index.len(), entries.len());
        prop_assert_eq!(index.sections(), before.as_slice());
        prop_assert_eq!(counter.callbacks, 0);
        prop_assert!(counter.rows.is_empty());
    }

    #[test]
    fn reversed_input_never_misbuckets(entries in entries(), reverse in any::<bool>()) {
        // Reversed input either fails or, when it happens to be contiguous
        // anyway, still partitions every conversation correctly.
        let classifier = Classifier::new(&now());
        let mut conversations = snapshot(&entries);
        if reverse {
            conversations.reverse();
        }
        let mut index = SectionIndex::default();
        if index.rebuild(conversations, &classifier).is_ok() {
            for (position, row) in index.rows().enumerate() {
                if let Row::Conversation(conversation) = row {
                    prop_assert_eq!(
                        index.section_kind_at(position),
                        Some(classifier.classify(conversation))
                    );
                }
            }
        }
    }
}

#[test]
fn draining_the_list_removes_every_header() {
    let entries: Vec<(bool, i64)> = (0..20).map(|i| (i % 7 == 0, i * 2_000)).collect();
    let mut index = build(SectionConfig::default(), &entries);
    let mut counter = Counter::default();

    while let Some(first) = index.conversations().first().map(|c| c.id) {
        index.remove_conversation(first, RemovalReason::Delete, &mut counter);
    }

    assert!(index.sections().is_empty());
    assert_eq!(index.row_count(), 0);
    assert_eq!(counter.callbacks, 20);
}

#[test]
fn promo_header_survives_draining() {
    let config = SectionConfig {
        show_promo: true,
        ..SectionConfig::default()
    };
    let mut index = build(config, &[(false, 10), (false, 3_000)]);

    while !index.is_empty() {
        let last = index.row_count() - 1;
        index.remove_at(last, RemovalReason::Archive, &mut NoopListener);
    }

    assert_eq!(index.sections().len(), 1);
    assert_eq!(index.sections()[0].kind, SectionKind::Promo);
    assert!(index.is_header(0));
}

//! Recency classification of conversations.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone};

use super::SectionKind;
use crate::Conversation;

/// Oldest age in days (inclusive) that still counts as last week.
const LAST_WEEK_DAYS: i64 = 7;

/// Oldest age in days (inclusive) that still counts as last month.
const LAST_MONTH_DAYS: i64 = 30;

/// Decides which section a conversation belongs to.
///
/// Buckets are calendar days in the offset of the injected "now", so a
/// conversation from 23:59 yesterday is in `Yesterday` even one minute later.
/// Every unpinned conversation matches exactly one recency kind and every
/// pinned conversation matches only [`SectionKind::Pinned`].
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    now: DateTime<FixedOffset>,
    today: NaiveDate,
}

impl Classifier {
    /// Creates a classifier for the given instant.
    #[must_use]
    pub fn new<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let now = now.fixed_offset();
        Self {
            now,
            today: now.date_naive(),
        }
    }

    /// Creates a classifier for the current local time.
    #[must_use]
    pub fn local() -> Self {
        Self::new(&Local::now())
    }

    /// The instant classification is relative to.
    #[must_use]
    pub const fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }

    /// Whole calendar days between the conversation's last activity and today.
    ///
    /// Negative for timestamps in the future.
    #[must_use]
    pub fn days_ago(&self, conversation: &Conversation) -> i64 {
        let date = conversation
            .timestamp
            .with_timezone(self.now.offset())
            .date_naive();
        self.today.signed_duration_since(date).num_days()
    }

    /// Membership predicate for a single section kind.
    #[must_use]
    pub fn belongs_to(&self, kind: SectionKind, conversation: &Conversation) -> bool {
        match kind {
            SectionKind::Promo => false,
            SectionKind::Pinned => conversation.pinned,
            _ if conversation.pinned => false,
            SectionKind::Today => self.days_ago(conversation) <= 0,
            SectionKind::Yesterday => self.days_ago(conversation) == 1,
            SectionKind::LastWeek => (2..=LAST_WEEK_DAYS).contains(&self.days_ago(conversation)),
            SectionKind::LastMonth => {
                (LAST_WEEK_DAYS + 1..=LAST_MONTH_DAYS).contains(&self.days_ago(conversation))
            }
            SectionKind::Older => self.days_ago(conversation) > LAST_MONTH_DAYS,
        }
    }

    /// The single kind this conversation belongs to.
    #[must_use]
    pub fn classify(&self, conversation: &Conversation) -> SectionKind {
        SectionKind::CLASSIFIED
            .into_iter()
            .find(|kind| self.belongs_to(*kind, conversation))
            .unwrap_or(SectionKind::Older)
    }
}

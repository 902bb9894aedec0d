//! Section kinds and section table entries.

use serde::{Deserialize, Serialize};

/// A group of conversations rendered under one header.
///
/// Variants are declared in display order; a section table never lists them
/// out of this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Promotional card shown above the list. Holds no conversations.
    Promo,
    /// Conversations pinned by the user.
    Pinned,
    /// Last activity today.
    Today,
    /// Last activity yesterday.
    Yesterday,
    /// Last activity two to seven days ago.
    LastWeek,
    /// Last activity eight to thirty days ago.
    LastMonth,
    /// Everything before that.
    Older,
}

impl SectionKind {
    /// Kinds a conversation can be classified into, in cursor order.
    pub const CLASSIFIED: [Self; 6] = [
        Self::Pinned,
        Self::Today,
        Self::Yesterday,
        Self::LastWeek,
        Self::LastMonth,
        Self::Older,
    ];

    /// The kind that follows this one during classification.
    ///
    /// Returns `None` after [`SectionKind::Older`].
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Promo => Some(Self::Pinned),
            Self::Pinned => Some(Self::Today),
            Self::Today => Some(Self::Yesterday),
            Self::Yesterday => Some(Self::LastWeek),
            Self::LastWeek => Some(Self::LastMonth),
            Self::LastMonth => Some(Self::Older),
            Self::Older => None,
        }
    }

    /// Parse from the string representation used in settings and the CLI.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "promo" => Some(Self::Promo),
            "pinned" => Some(Self::Pinned),
            "today" => Some(Self::Today),
            "yesterday" => Some(Self::Yesterday),
            "last_week" => Some(Self::LastWeek),
            "last_month" => Some(Self::LastMonth),
            "older" => Some(Self::Older),
            _ => None,
        }
    }

    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Promo => "promo",
            Self::Pinned => "pinned",
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::LastWeek => "last_week",
            Self::LastMonth => "last_month",
            Self::Older => "older",
        }
    }

    /// Header title for this section.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Promo => "Text from your computer",
            Self::Pinned => "Pinned",
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::LastWeek => "Last Week",
            Self::LastMonth => "Last Month",
            Self::Older => "Older",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SectionKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| crate::Error::Config(format!("unknown section kind: {s}")))
    }
}

/// One entry of the section table: a header row plus `count` conversation rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Which group this is.
    pub kind: SectionKind,
    /// Number of conversations in the group.
    pub count: usize,
}

impl Section {
    /// Creates a new section table entry.
    #[must_use]
    pub const fn new(kind: SectionKind, count: usize) -> Self {
        Self { kind, count }
    }

    /// Rows this section occupies in the flat list, header included.
    #[must_use]
    pub const fn row_span(&self) -> usize {
        self.count + 1
    }
}

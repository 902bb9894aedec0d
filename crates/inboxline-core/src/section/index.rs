//! Flat row positions over a sectioned conversation snapshot.

use tracing::{debug, warn};

use super::{Classifier, ListListener, RemovalReason, Section, SectionKind};
use crate::{Conversation, ConversationId, Error, Result, SectionConfig};

/// One rendered row of the conversation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row<'a> {
    /// Section header.
    Header {
        /// Section this header introduces.
        kind: SectionKind,
        /// Conversations listed under it.
        count: usize,
    },
    /// A conversation row.
    Conversation(&'a Conversation),
}

/// Where a flat row position lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Header {
        section: usize,
    },
    Item {
        /// Section table entry, `None` when categories are off.
        section: Option<usize>,
        index: usize,
    },
}

/// Sectioned view over an ordered conversation snapshot.
///
/// Holds the snapshot and a parallel table of section sizes. A flat row
/// position counts one header row per section followed by that section's
/// conversations. All operations are synchronous; the index performs no I/O.
#[derive(Debug, Clone, Default)]
pub struct SectionIndex {
    config: SectionConfig,
    conversations: Vec<Conversation>,
    sections: Vec<Section>,
}

impl SectionIndex {
    /// Creates an empty index.
    #[must_use]
    pub const fn new(config: SectionConfig) -> Self {
        Self {
            config,
            conversations: Vec::new(),
            sections: Vec::new(),
        }
    }

    /// Settings the index partitions with.
    #[must_use]
    pub const fn config(&self) -> &SectionConfig {
        &self.config
    }

    /// Replaces the settings. Takes effect on the next rebuild.
    pub const fn set_config(&mut self, config: SectionConfig) {
        self.config = config;
    }

    /// Replaces the snapshot and recomputes the section table.
    ///
    /// The input must already be ordered so that every section's members are
    /// contiguous: pinned first, then newest to oldest. The index only
    /// partitions; it never sorts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsortedInput`] if a conversation belongs to a section
    /// that was already closed. The index is left unchanged in that case.
    pub fn rebuild<I>(&mut self, conversations: I, classifier: &Classifier) -> Result<()>
    where
        I: IntoIterator<Item = Conversation>,
    {
        if !self.config.show_categories {
            self.conversations = conversations.into_iter().collect();
            self.sections.clear();
            debug!(
                conversations = self.conversations.len(),
                "Rebuilt uncategorized conversation list"
            );
            return Ok(());
        }

        let mut snapshot = Vec::new();
        let mut sections = Vec::new();
        if self.config.show_promo {
            sections.push(Section::new(SectionKind::Promo, 0));
        }

        let mut kind = SectionKind::Pinned;
        let mut count = 0;

        for (position, conversation) in conversations.into_iter().enumerate() {
            let arrived_in = kind;
            while !classifier.belongs_to(kind, &conversation) {
                if count > 0 {
                    sections.push(Section::new(kind, count));
                }
                count = 0;

                let Some(next) = kind.next() else {
                    let err = Error::UnsortedInput {
                        position,
                        id: conversation.id,
                        kind: classifier.classify(&conversation),
                        after: arrived_in,
                    };
                    warn!(%err, "Rejecting conversation snapshot");
                    return Err(err);
                };
                kind = next;
            }

            count += 1;
            snapshot.push(conversation);
        }

        if count > 0 || self.config.legacy_trailing_section {
            sections.push(Section::new(kind, count));
        }

        self.conversations = snapshot;
        self.sections = sections;
        debug!(
            conversations = self.conversations.len(),
            sections = ?self.sections,
            "Rebuilt conversation sections"
        );
        Ok(())
    }

    /// Conversations in display order.
    #[must_use]
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// The section table in display order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Number of conversations in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    /// Returns true if the snapshot holds no conversations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    /// Number of flat rows, headers included.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.conversations.len() + self.sections.len()
    }

    /// Conversation count for a section kind, 0 when the section is absent.
    #[must_use]
    pub fn count_for_section_kind(&self, kind: SectionKind) -> usize {
        self.sections
            .iter()
            .find(|section| section.kind == kind)
            .map_or(0, |section| section.count)
    }

    fn locate(&self, position: usize) -> Option<Slot> {
        if !self.config.show_categories {
            return (position < self.conversations.len()).then_some(Slot::Item {
                section: None,
                index: position,
            });
        }

        let mut total = 0;
        for (i, section) in self.sections.iter().enumerate() {
            let span = section.row_span();
            if position < total + span {
                return Some(if position == total {
                    Slot::Header { section: i }
                } else {
                    Slot::Item {
                        section: Some(i),
                        index: position - (i + 1),
                    }
                });
            }
            total += span;
        }
        None
    }

    /// The conversation shown at a flat row position.
    ///
    /// Returns `None` for header rows and out-of-range positions.
    #[must_use]
    pub fn conversation_for_flat_position(&self, position: usize) -> Option<&Conversation> {
        match self.locate(position)? {
            Slot::Item { index, .. } => self.conversations.get(index),
            Slot::Header { .. } => None,
        }
    }

    /// Flat row position of a conversation, or `None` if it is not listed.
    #[must_use]
    pub fn flat_position_for_id(&self, id: ConversationId) -> Option<usize> {
        let index = self.conversations.iter().position(|c| c.id == id)?;
        if !self.config.show_categories {
            return Some(index);
        }

        let mut start = 0;
        let mut headers = 0;
        for section in &self.sections {
            if start > index {
                break;
            }
            headers += 1;
            start += section.count;
        }
        Some(index + headers)
    }

    /// Returns true if the row at `position` is a section header.
    #[must_use]
    pub fn is_header(&self, position: usize) -> bool {
        matches!(self.locate(position), Some(Slot::Header { .. }))
    }

    /// Kind of the section a row belongs to, header rows included.
    #[must_use]
    pub fn section_kind_at(&self, position: usize) -> Option<SectionKind> {
        match self.locate(position)? {
            Slot::Header { section }
            | Slot::Item {
                section: Some(section),
                ..
            } => Some(self.sections[section].kind),
            Slot::Item { section: None, .. } => None,
        }
    }

    /// The row at a flat position.
    #[must_use]
    pub fn row(&self, position: usize) -> Option<Row<'_>> {
        match self.locate(position)? {
            Slot::Header { section } => {
                let Section { kind, count } = self.sections[section];
                Some(Row::Header { kind, count })
            }
            Slot::Item { index, .. } => self.conversations.get(index).map(Row::Conversation),
        }
    }

    /// All rows in display order.
    #[must_use]
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            sections: self.sections.iter(),
            conversations: self.conversations.iter(),
            remaining: 0,
            categorized: self.config.show_categories,
        }
    }

    /// Removes the conversation shown at a flat row position.
    ///
    /// Header rows and positions past the end are ignored: the list may have
    /// changed between a click and its handling. Returns true if the section
    /// header was removed along with its last conversation.
    ///
    /// The listener first receives the removed row range (one row, or the
    /// header plus its last row), then exactly one removal-reason callback.
    pub fn remove_at(
        &mut self,
        position: usize,
        reason: RemovalReason,
        listener: &mut impl ListListener,
    ) -> bool {
        let Some(Slot::Item { section, index }) = self.locate(position) else {
            debug!(position, rows = self.row_count(), "Ignoring stale removal");
            return false;
        };

        let removed = self.conversations.remove(index);
        let removed_header = section.is_some_and(|i| {
            let section = &mut self.sections[i];
            section.count -= 1;
            if section.count == 0 {
                self.sections.remove(i);
                true
            } else {
                false
            }
        });

        if removed_header {
            listener.rows_removed(position - 1, 2);
        } else {
            listener.rows_removed(position, 1);
        }

        debug!(
            id = %removed.id,
            position,
            %reason,
            removed_header,
            "Removed conversation from list"
        );

        match reason {
            RemovalReason::Delete => listener.removed_for_delete(self, &removed),
            RemovalReason::Archive => listener.removed_for_archive(self, &removed),
        }

        removed_header
    }

    /// Removes a conversation by id. Unknown ids are ignored.
    ///
    /// Returns true if its section header was removed as well.
    pub fn remove_conversation(
        &mut self,
        id: ConversationId,
        reason: RemovalReason,
        listener: &mut impl ListListener,
    ) -> bool {
        self.flat_position_for_id(id)
            .is_some_and(|position| self.remove_at(position, reason, listener))
    }
}

/// Iterator over the rows of a [`SectionIndex`].
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    sections: std::slice::Iter<'a, Section>,
    conversations: std::slice::Iter<'a, Conversation>,
    remaining: usize,
    categorized: bool,
}

impl<'a> Iterator for Rows<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.categorized || self.remaining > 0 {
            self.remaining = self.remaining.saturating_sub(1);
            return self.conversations.next().map(Row::Conversation);
        }

        let section = self.sections.next()?;
        self.remaining = section.count;
        Some(Row::Header {
            kind: section.kind,
            count: section.count,
        })
    }
}

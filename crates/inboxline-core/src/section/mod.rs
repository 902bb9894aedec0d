//! Sectioned conversation list.
//!
//! The conversation list is rendered as one flat sequence of rows: every
//! non-empty section contributes a header row followed by its conversations.
//! Sections are never stored as nested lists; a parallel table of
//! `(kind, count)` entries is enough to translate between flat row positions
//! and snapshot indices.
//!
//! ```text
//! row 0  [Pinned]
//! row 1    Alice          snapshot[0]
//! row 2  [Today]
//! row 3    Bob            snapshot[1]
//! row 4    Carol          snapshot[2]
//! ```
//!
//! - **Classifier**: decides which section a conversation belongs to
//! - **`SectionIndex`**: owns the snapshot and the section table
//! - **`ListListener`**: receives row removals and removal reasons

mod classifier;
mod index;
mod kind;
mod listener;

pub use classifier::Classifier;
pub use index::{Row, Rows, SectionIndex};
pub use kind::{Section, SectionKind};
pub use listener::{ListListener, LoggingListener, NoopListener, RemovalReason};

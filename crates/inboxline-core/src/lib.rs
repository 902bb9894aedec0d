//! # inboxline-core
//!
//! Conversation list bookkeeping for the `inboxline` messaging client.
//!
//! This crate provides:
//! - Conversation models
//! - **Recency classification** - Pinned / Today / Yesterday / Last Week / Last Month / Older
//! - **Section index** - Flat list positions with interleaved header rows
//! - **List listener** - Row and removal-reason notifications for the owning UI
//! - Section configuration
//!
//! # Example
//!
//! ```ignore
//! use inboxline_core::{Classifier, SectionConfig, SectionIndex};
//!
//! let mut index = SectionIndex::new(SectionConfig::default());
//! index.rebuild(conversations, &Classifier::local())?;
//!
//! for row in index.rows() {
//!     // Render a header or a conversation
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
pub mod conversation;
mod error;
pub mod section;

pub use config::SectionConfig;
pub use conversation::{Conversation, ConversationId};
pub use error::{Error, Result};
pub use section::{
    Classifier, ListListener, LoggingListener, NoopListener, RemovalReason, Row, Rows, Section,
    SectionIndex, SectionKind,
};

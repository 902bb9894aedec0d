//! Error types for the core library.

use thiserror::Error;

use crate::{ConversationId, SectionKind};

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A conversation arrived after the section it belongs to was closed.
    #[error(
        "Unsorted input: conversation {id} at position {position} belongs to {kind} but arrived after {after}"
    )]
    UnsortedInput {
        /// Position of the offending conversation in the input.
        position: usize,
        /// Identifier of the offending conversation.
        id: ConversationId,
        /// Section the conversation belongs to.
        kind: SectionKind,
        /// Section that was open when it arrived.
        after: SectionKind,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

//! Conversation records as delivered by the data layer.
//!
//! The list bookkeeping only reads these; it keeps its own ordered copy
//! (the snapshot) for as long as a list is displayed.

mod model;

pub use model::{Conversation, ConversationId};

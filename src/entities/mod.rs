//! Lightweight entity extraction from journal text.
//!
//! [`extract_entities`] finds people, goals, concerns, emotions, and activities
//! with fixed patterns and keyword lists, attaches a context snippet and a
//! sentiment guess, and deduplicates the result. No I/O; persisting the
//! entities is [`crate::memory`]'s job.

pub mod extract;
pub mod sentiment;
pub mod types;

pub use extract::{extract_context, extract_entities, is_common_word};
pub use sentiment::analyze_sentiment;
pub use types::{Entity, EntityType, Sentiment};

//! Narrow storage capability used by the persistence helpers.
//!
//! [`JournalStore`] exposes only the reads and writes the application actually
//! performs. [`SqliteStore`] backs it with SQLite; [`InMemoryStore`] is a
//! map-backed fake with failure injection for tests.

pub mod in_memory;
pub mod sqlite;
pub mod types;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::entities::EntityType;
use crate::personality::PersonalityProfile;

pub use in_memory::InMemoryStore;
pub use sqlite::SqliteStore;
pub use types::{
    Entry, EntryQuery, EntrySource, EntryUpdate, MemoryItem, MemoryItemUpdate, MemoryStats,
    NewMemoryItem, NewPrinciple, Principle, PrincipleCategory, SaveSummary, User,
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    /// Failure reported by the backend, carrying its message verbatim.
    #[error("{0}")]
    Backend(String),
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn not_found(kind: &'static str, id: &str) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

pub trait JournalStore {
    fn get_user(&self, user_id: &str) -> StoreResult<Option<User>>;

    /// Write the personality profile and onboarded flag. Missing user is `NotFound`.
    fn update_user_profile(
        &mut self,
        user_id: &str,
        profile: &PersonalityProfile,
        onboarded: bool,
    ) -> StoreResult<()>;

    fn get_entry(&self, entry_id: &str) -> StoreResult<Option<Entry>>;

    fn insert_entry(&mut self, entry: &Entry) -> StoreResult<()>;

    /// A user's entries, newest first, filtered and paged by `query`.
    fn list_entries(&self, user_id: &str, query: &EntryQuery) -> StoreResult<Vec<Entry>>;

    /// Update title, content, and word count. Missing entry is `NotFound`.
    fn update_entry(&mut self, entry_id: &str, update: &EntryUpdate) -> StoreResult<()>;

    /// Exact (case-sensitive) lookup on `(user_id, name, item_type)`.
    fn find_memory_item(
        &self,
        user_id: &str,
        name: &str,
        item_type: EntityType,
    ) -> StoreResult<Option<MemoryItem>>;

    /// Insert with `mention_count = 1`. Returns the new id.
    fn insert_memory_item(&mut self, item: &NewMemoryItem) -> StoreResult<String>;

    fn update_memory_item(&mut self, id: &str, update: &MemoryItemUpdate) -> StoreResult<()>;

    /// Record one mention per item, all or nothing.
    ///
    /// A known `(user_id, name, item_type)` gets the new context, sentiment and
    /// `last_mentioned` and its `mention_count` bumped; an unknown one is inserted
    /// with `mention_count = 1`. If any write fails, none are kept.
    fn record_mentions(&mut self, mentions: &[NewMemoryItem]) -> StoreResult<SaveSummary>;

    /// Most recently mentioned first.
    fn recent_memory_items(&self, user_id: &str, limit: usize) -> StoreResult<Vec<MemoryItem>>;

    fn memory_stats(&self, user_id: &str) -> StoreResult<MemoryStats>;

    fn insert_principle(&mut self, principle: &NewPrinciple) -> StoreResult<Principle>;

    /// Highest priority first, then oldest first.
    fn list_principles(&self, user_id: &str) -> StoreResult<Vec<Principle>>;

    /// Delete one of `user_id`'s principles. Missing principle is `NotFound`.
    fn delete_principle(&mut self, user_id: &str, id: &str) -> StoreResult<()>;
}

/// Fixed-width RFC 3339 timestamp, so stored times sort lexicographically.
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// New time-sortable record id.
pub(crate) fn new_id() -> String {
    uuid::Uuid::now_v7().to_string()
}

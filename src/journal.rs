//! Journal entry persistence.

use anyhow::{ensure, Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::store::{new_id, timestamp, Entry, EntryQuery, EntrySource, EntryUpdate, JournalStore};
use crate::text::calculate_word_count;

/// Outcome of saving an edited entry, suitable for showing to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveResult {
    pub success: bool,
    /// Storage error message when the save failed.
    pub error: Option<String>,
    /// Computed even when the save fails.
    pub word_count: usize,
}

/// Save an edited entry's title and content along with its word count.
///
/// Storage failures are reported in the returned [`SaveResult`] rather than
/// as an `Err`, so the caller can surface the message.
pub fn save_entry<S: JournalStore + ?Sized>(
    store: &mut S,
    entry_id: &str,
    title: &str,
    content: &str,
) -> SaveResult {
    let word_count = calculate_word_count(Some(content));
    let update = EntryUpdate {
        title: title.to_string(),
        content: content.to_string(),
        word_count,
    };

    match store.update_entry(entry_id, &update) {
        Ok(()) => {
            tracing::info!(entry_id, word_count, "entry saved");
            SaveResult {
                success: true,
                error: None,
                word_count,
            }
        }
        Err(e) => {
            tracing::warn!(entry_id, error = %e, "entry save failed");
            SaveResult {
                success: false,
                error: Some(e.to_string()),
                word_count,
            }
        }
    }
}

/// Title used when a new entry has none.
pub const DEFAULT_TITLE: &str = "Untitled Entry";

/// Fields supplied when creating an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEntry {
    /// Blank or missing becomes [`DEFAULT_TITLE`].
    pub title: Option<String>,
    /// Must contain at least one non-whitespace character.
    pub content: String,
    pub source: EntrySource,
}

/// Create a new entry for `user_id`. Blank content is rejected.
pub fn create_entry<S: JournalStore + ?Sized>(
    store: &mut S,
    user_id: &str,
    new: &NewEntry,
    now: DateTime<Utc>,
) -> Result<Entry> {
    ensure!(!new.content.trim().is_empty(), "entry content is required");

    let title = new
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TITLE);
    let now = timestamp(now);
    let entry = Entry {
        id: new_id(),
        user_id: user_id.to_string(),
        title: title.to_string(),
        content: new.content.clone(),
        source: new.source,
        word_count: calculate_word_count(Some(&new.content)),
        created_at: now.clone(),
        updated_at: now,
    };
    store
        .insert_entry(&entry)
        .with_context(|| format!("failed to create entry for user {user_id}"))?;

    tracing::info!(entry_id = %entry.id, user_id, word_count = entry.word_count, "entry created");
    Ok(entry)
}

/// A user's entries, newest first.
pub fn list_entries<S: JournalStore + ?Sized>(
    store: &S,
    user_id: &str,
    query: &EntryQuery,
) -> Result<Vec<Entry>> {
    let entries = store
        .list_entries(user_id, query)
        .with_context(|| format!("failed to list entries for user {user_id}"))?;
    tracing::debug!(user_id, count = entries.len(), "entries listed");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    fn new_entry(title: Option<&str>, content: &str) -> NewEntry {
        NewEntry {
            title: title.map(str::to_string),
            content: content.to_string(),
            source: EntrySource::Text,
        }
    }

    fn store_with_entry() -> (InMemoryStore, String) {
        let mut store = InMemoryStore::new();
        let entry = create_entry(&mut store, "u1", &new_entry(Some("Draft"), "draft"), Utc::now())
            .unwrap();
        (store, entry.id)
    }

    #[test]
    fn success_with_word_count() {
        let (mut store, id) = store_with_entry();
        let result = save_entry(&mut store, &id, "Test Title", "This is test content with five words");
        assert_eq!(
            result,
            SaveResult {
                success: true,
                error: None,
                word_count: 7
            }
        );

        let entry = store.get_entry(&id).unwrap().unwrap();
        assert_eq!(entry.title, "Test Title");
        assert_eq!(entry.word_count, 7);
    }

    #[test]
    fn whitespace_content() {
        let (mut store, id) = store_with_entry();
        assert_eq!(save_entry(&mut store, &id, "Title", "").word_count, 0);
        assert_eq!(save_entry(&mut store, &id, "Title", "   \n\t   ").word_count, 0);
        assert_eq!(
            save_entry(&mut store, &id, "Title", "word1    word2     word3").word_count,
            3
        );
    }

    #[test]
    fn failure_returns_message_and_word_count() {
        let (mut store, id) = store_with_entry();
        store.fail_with("Database connection failed");

        let result = save_entry(&mut store, &id, "Title", "one two three four");
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Database connection failed"));
        assert_eq!(result.word_count, 4);
    }

    #[test]
    fn missing_entry_is_reported() {
        let mut store = InMemoryStore::new();
        let result = save_entry(&mut store, "entry-456", "My Title", "My content here");
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("entry not found: entry-456"));
        assert_eq!(result.word_count, 3);
    }

    #[test]
    fn create_entry_counts_words() {
        let mut store = InMemoryStore::new();
        let entry = create_entry(&mut store, "u1", &new_entry(Some("Morning"), "one two three"), Utc::now())
            .unwrap();
        assert_eq!(entry.word_count, 3);
        assert_eq!(entry.source, EntrySource::Text);
        assert_eq!(entry.created_at, entry.updated_at);
        assert_eq!(store.get_entry(&entry.id).unwrap(), Some(entry));
    }

    #[test]
    fn create_entry_rejects_blank_content() {
        let mut store = InMemoryStore::new();
        for content in ["", "   \n\t"] {
            let err = create_entry(&mut store, "u1", &new_entry(None, content), Utc::now()).unwrap_err();
            assert_eq!(err.to_string(), "entry content is required");
        }
        assert!(list_entries(&store, "u1", &EntryQuery::default()).unwrap().is_empty());
    }

    #[test]
    fn create_entry_defaults_title() {
        let mut store = InMemoryStore::new();
        for title in [None, Some(""), Some("  ")] {
            let entry = create_entry(&mut store, "u1", &new_entry(title, "hello"), Utc::now()).unwrap();
            assert_eq!(entry.title, DEFAULT_TITLE);
        }
    }

    #[test]
    fn list_entries_filters_by_source_and_search() {
        let mut store = InMemoryStore::new();
        let voice = NewEntry {
            title: Some("Commute".into()),
            content: "Thinking about the garden".into(),
            source: EntrySource::Voice,
        };
        create_entry(&mut store, "u1", &voice, at("2026-02-01T08:00:00Z")).unwrap();
        create_entry(&mut store, "u1", &new_entry(Some("Garden plan"), "tomatoes"), at("2026-02-02T08:00:00Z"))
            .unwrap();
        create_entry(&mut store, "u1", &new_entry(None, "rainy day"), at("2026-02-03T08:00:00Z")).unwrap();

        let titles = |query: EntryQuery| -> Vec<String> {
            list_entries(&store, "u1", &query)
                .unwrap()
                .into_iter()
                .map(|e| e.title)
                .collect()
        };
        assert_eq!(titles(EntryQuery::default()), [DEFAULT_TITLE, "Garden plan", "Commute"]);
        assert_eq!(
            titles(EntryQuery { search: Some("GARDEN".into()), ..EntryQuery::default() }),
            ["Garden plan", "Commute"]
        );
        assert_eq!(
            titles(EntryQuery { source: Some(EntrySource::Voice), ..EntryQuery::default() }),
            ["Commute"]
        );
        assert_eq!(
            titles(EntryQuery { limit: 2, offset: 1, ..EntryQuery::default() }),
            ["Garden plan", "Commute"]
        );
    }

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }
}

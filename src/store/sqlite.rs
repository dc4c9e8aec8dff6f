//! SQLite-backed [`JournalStore`].

use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::str::FromStr;

use super::types::{
    Entry, EntryQuery, EntryUpdate, MemoryItem, MemoryItemUpdate, MemoryStats, NewMemoryItem,
    NewPrinciple, Principle, SaveSummary, User,
};
use super::{new_id, timestamp, JournalStore, StoreError, StoreResult};
use crate::entities::EntityType;
use crate::personality::PersonalityProfile;

const MEMORY_ITEM_COLUMNS: &str = "id, user_id, name, item_type, context, sentiment, \
     mention_count, last_mentioned, created_at";

const ENTRY_COLUMNS: &str =
    "id, user_id, title, content, source, word_count, created_at, updated_at";

const PRINCIPLE_COLUMNS: &str =
    "id, user_id, title, description, category, examples, priority, created_at";

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Open the database file at `path`, creating it and its tables if needed.
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        Ok(Self::new(crate::db::open_database(path)?))
    }

    pub fn open_in_memory() -> anyhow::Result<Self> {
        Ok(Self::new(crate::db::open_memory_database()?))
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Create or replace a user row. Users normally come from the auth provider.
    pub fn upsert_user(&self, user: &User) -> StoreResult<()> {
        let now = timestamp(chrono::Utc::now());
        let profile = user
            .personality_profile
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        self.conn.execute(
            "INSERT INTO users (id, email, full_name, personality_profile, onboarded, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6) \
             ON CONFLICT(id) DO UPDATE SET email = ?2, full_name = ?3, \
             personality_profile = ?4, onboarded = ?5, updated_at = ?6",
            params![user.id, user.email, user.full_name, profile, user.onboarded, now],
        )?;
        Ok(())
    }
}

/// Parse a text column through the type's `FromStr`.
fn text_column<T: FromStr<Err = String>>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T> {
    let raw: String = row.get(idx)?;
    raw.parse()
        .map_err(|e: String| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, e.into()))
}

/// SQLite integers are `i64`; counts in Rust are `usize`.
fn usize_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<usize> {
    let raw: i64 = row.get(idx)?;
    usize::try_from(raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Integer, Box::new(e)))
}

fn to_sql_int(n: usize) -> StoreResult<i64> {
    i64::try_from(n).map_err(|_| StoreError::Backend(format!("integer out of range: {n}")))
}

fn memory_item_from_row(row: &Row<'_>) -> rusqlite::Result<MemoryItem> {
    Ok(MemoryItem {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        item_type: text_column(row, 3)?,
        context: row.get(4)?,
        sentiment: text_column(row, 5)?,
        mention_count: row.get(6)?,
        last_mentioned: row.get(7)?,
        created_at: row.get(8)?,
    })
}

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<Entry> {
    Ok(Entry {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        content: row.get(3)?,
        source: text_column(row, 4)?,
        word_count: usize_column(row, 5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

fn principle_from_row(row: &Row<'_>) -> rusqlite::Result<Principle> {
    let examples: String = row.get(5)?;
    Ok(Principle {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        category: text_column(row, 4)?,
        examples: serde_json::from_str(&examples).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
        })?,
        priority: row.get(6)?,
        created_at: row.get(7)?,
    })
}

// Shared by the trait methods and `record_mentions`, which runs them inside a transaction.

fn find_memory_item_in(
    conn: &Connection,
    user_id: &str,
    name: &str,
    item_type: EntityType,
) -> rusqlite::Result<Option<MemoryItem>> {
    conn.query_row(
        &format!(
            "SELECT {MEMORY_ITEM_COLUMNS} FROM memory_items \
             WHERE user_id = ?1 AND name = ?2 AND item_type = ?3"
        ),
        params![user_id, name, item_type.as_str()],
        memory_item_from_row,
    )
    .optional()
}

fn insert_memory_item_in(conn: &Connection, item: &NewMemoryItem) -> rusqlite::Result<String> {
    let id = new_id();
    conn.execute(
        "INSERT INTO memory_items (id, user_id, name, item_type, context, sentiment, \
         mention_count, last_mentioned, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1, ?7, ?7)",
        params![
            id,
            item.user_id,
            item.name,
            item.item_type.as_str(),
            item.context,
            item.sentiment.as_str(),
            item.last_mentioned,
        ],
    )?;
    Ok(id)
}

impl JournalStore for SqliteStore {
    fn get_user(&self, user_id: &str) -> StoreResult<Option<User>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, email, full_name, personality_profile, onboarded FROM users WHERE id = ?1",
                params![user_id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, Option<String>>(2)?,
                        row.get::<_, Option<String>>(3)?,
                        row.get::<_, bool>(4)?,
                    ))
                },
            )
            .optional()?;

        let Some((id, email, full_name, profile, onboarded)) = row else {
            return Ok(None);
        };
        let personality_profile = profile
            .map(|p| serde_json::from_str::<PersonalityProfile>(&p))
            .transpose()?;

        Ok(Some(User {
            id,
            email,
            full_name,
            personality_profile,
            onboarded,
        }))
    }

    fn update_user_profile(
        &mut self,
        user_id: &str,
        profile: &PersonalityProfile,
        onboarded: bool,
    ) -> StoreResult<()> {
        let profile_json = serde_json::to_string(profile)?;
        let rows = self.conn.execute(
            "UPDATE users SET personality_profile = ?1, onboarded = ?2, updated_at = ?3 WHERE id = ?4",
            params![profile_json, onboarded, timestamp(chrono::Utc::now()), user_id],
        )?;
        if rows == 0 {
            return Err(StoreError::not_found("user", user_id));
        }
        Ok(())
    }

    fn get_entry(&self, entry_id: &str) -> StoreResult<Option<Entry>> {
        let entry = self
            .conn
            .query_row(
                &format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE id = ?1"),
                params![entry_id],
                entry_from_row,
            )
            .optional()?;
        Ok(entry)
    }

    fn insert_entry(&mut self, entry: &Entry) -> StoreResult<()> {
        self.conn.execute(
            &format!(
                "INSERT INTO entries ({ENTRY_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"
            ),
            params![
                entry.id,
                entry.user_id,
                entry.title,
                entry.content,
                entry.source.as_str(),
                to_sql_int(entry.word_count)?,
                entry.created_at,
                entry.updated_at,
            ],
        )?;
        Ok(())
    }

    fn list_entries(&self, user_id: &str, query: &EntryQuery) -> StoreResult<Vec<Entry>> {
        let search = query.search.as_deref().filter(|s| !s.is_empty());
        // lower() folds ASCII only, matching EntryQuery::matches
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ENTRY_COLUMNS} FROM entries WHERE user_id = ?1 \
             AND (?2 IS NULL OR source = ?2) \
             AND (?3 IS NULL OR instr(lower(title), lower(?3)) > 0 \
                  OR instr(lower(content), lower(?3)) > 0) \
             ORDER BY created_at DESC, id DESC LIMIT ?4 OFFSET ?5"
        ))?;
        let entries = stmt
            .query_map(
                params![
                    user_id,
                    query.source.map(|s| s.as_str()),
                    search,
                    to_sql_int(query.limit)?,
                    to_sql_int(query.offset)?,
                ],
                entry_from_row,
            )?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    fn update_entry(&mut self, entry_id: &str, update: &EntryUpdate) -> StoreResult<()> {
        let rows = self.conn.execute(
            "UPDATE entries SET title = ?1, content = ?2, word_count = ?3, updated_at = ?4 WHERE id = ?5",
            params![
                update.title,
                update.content,
                to_sql_int(update.word_count)?,
                timestamp(chrono::Utc::now()),
                entry_id,
            ],
        )?;
        if rows == 0 {
            return Err(StoreError::not_found("entry", entry_id));
        }
        Ok(())
    }

    fn find_memory_item(
        &self,
        user_id: &str,
        name: &str,
        item_type: EntityType,
    ) -> StoreResult<Option<MemoryItem>> {
        Ok(find_memory_item_in(&self.conn, user_id, name, item_type)?)
    }

    fn insert_memory_item(&mut self, item: &NewMemoryItem) -> StoreResult<String> {
        Ok(insert_memory_item_in(&self.conn, item)?)
    }

    fn update_memory_item(&mut self, id: &str, update: &MemoryItemUpdate) -> StoreResult<()> {
        let rows = self.conn.execute(
            "UPDATE memory_items SET context = ?1, sentiment = ?2, mention_count = ?3, \
             last_mentioned = ?4 WHERE id = ?5",
            params![
                update.context,
                update.sentiment.as_str(),
                update.mention_count,
                update.last_mentioned,
                id,
            ],
        )?;
        if rows == 0 {
            return Err(StoreError::not_found("memory item", id));
        }
        Ok(())
    }

    fn record_mentions(&mut self, mentions: &[NewMemoryItem]) -> StoreResult<SaveSummary> {
        let mut summary = SaveSummary::default();
        if mentions.is_empty() {
            return Ok(summary);
        }

        // Dropping the transaction on an early return rolls every write back.
        let tx = self.conn.transaction()?;
        for mention in mentions {
            match find_memory_item_in(&tx, &mention.user_id, &mention.name, mention.item_type)? {
                Some(existing) => {
                    tx.execute(
                        "UPDATE memory_items SET context = ?1, sentiment = ?2, \
                         mention_count = mention_count + 1, last_mentioned = ?3 WHERE id = ?4",
                        params![
                            mention.context,
                            mention.sentiment.as_str(),
                            mention.last_mentioned,
                            existing.id,
                        ],
                    )?;
                    summary.updated += 1;
                }
                None => {
                    insert_memory_item_in(&tx, mention)?;
                    summary.inserted += 1;
                }
            }
        }
        tx.commit()?;
        Ok(summary)
    }

    fn recent_memory_items(&self, user_id: &str, limit: usize) -> StoreResult<Vec<MemoryItem>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {MEMORY_ITEM_COLUMNS} FROM memory_items WHERE user_id = ?1 \
             ORDER BY last_mentioned DESC, id DESC LIMIT ?2"
        ))?;
        let items = stmt
            .query_map(params![user_id, to_sql_int(limit)?], memory_item_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }

    fn memory_stats(&self, user_id: &str) -> StoreResult<MemoryStats> {
        let (total_items, total_mentions, oldest_item, last_mentioned): (
            i64,
            i64,
            Option<String>,
            Option<String>,
        ) = self.conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(mention_count), 0), MIN(created_at), MAX(last_mentioned) \
             FROM memory_items WHERE user_id = ?1",
            params![user_id],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
        )?;

        let mut stmt = self.conn.prepare(
            "SELECT item_type, COUNT(*) FROM memory_items WHERE user_id = ?1 GROUP BY item_type",
        )?;
        let by_type = stmt
            .query_map(params![user_id], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)? as u64))
            })?
            .collect::<Result<_, _>>()?;

        Ok(MemoryStats {
            total_items: total_items as u64,
            total_mentions: total_mentions as u64,
            by_type,
            oldest_item,
            last_mentioned,
        })
    }

    fn insert_principle(&mut self, principle: &NewPrinciple) -> StoreResult<Principle> {
        let stored = Principle {
            id: new_id(),
            user_id: principle.user_id.clone(),
            title: principle.title.clone(),
            description: principle.description.clone(),
            category: principle.category,
            examples: principle.examples.clone(),
            priority: principle.priority,
            created_at: principle.created_at.clone(),
        };
        self.conn.execute(
            &format!(
                "INSERT INTO principles ({PRINCIPLE_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"
            ),
            params![
                stored.id,
                stored.user_id,
                stored.title,
                stored.description,
                stored.category.as_str(),
                serde_json::to_string(&stored.examples)?,
                stored.priority,
                stored.created_at,
            ],
        )?;
        Ok(stored)
    }

    fn list_principles(&self, user_id: &str) -> StoreResult<Vec<Principle>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {PRINCIPLE_COLUMNS} FROM principles WHERE user_id = ?1 \
             ORDER BY priority DESC, created_at ASC, id ASC"
        ))?;
        let principles = stmt
            .query_map(params![user_id], principle_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(principles)
    }

    fn delete_principle(&mut self, user_id: &str, id: &str) -> StoreResult<()> {
        let rows = self.conn.execute(
            "DELETE FROM principles WHERE id = ?1 AND user_id = ?2",
            params![id, user_id],
        )?;
        if rows == 0 {
            return Err(StoreError::not_found("principle", id));
        }
        Ok(())
    }
}

//! SQL DDL for the journal tables.
//!
//! Defines `users`, `entries`, `memory_items`, and `principles`. All DDL uses
//! `IF NOT EXISTS` for idempotent initialization.

use rusqlite::Connection;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    email TEXT NOT NULL,
    full_name TEXT,
    personality_profile TEXT,
    onboarded INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS entries (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    source TEXT NOT NULL DEFAULT 'text' CHECK(source IN ('text','voice','email','image')),
    word_count INTEGER NOT NULL DEFAULT 0 CHECK(word_count >= 0),
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_entries_user ON entries(user_id, created_at);

-- Long-term memory of things the user has mentioned
CREATE TABLE IF NOT EXISTS memory_items (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    item_type TEXT NOT NULL CHECK(item_type IN ('person','goal','concern','emotion','activity')),
    context TEXT NOT NULL,
    sentiment TEXT NOT NULL CHECK(sentiment IN ('positive','negative','neutral')),
    mention_count INTEGER NOT NULL DEFAULT 1 CHECK(mention_count >= 1),
    last_mentioned TEXT NOT NULL,
    created_at TEXT NOT NULL,
    UNIQUE(user_id, name, item_type)
);

CREATE INDEX IF NOT EXISTS idx_memory_items_recent ON memory_items(user_id, last_mentioned);

CREATE TABLE IF NOT EXISTS principles (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    category TEXT NOT NULL CHECK(category IN ('core_value','life_principle','decision_rule','aspiration')),
    examples TEXT NOT NULL DEFAULT '[]',   -- JSON array of strings
    priority INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_principles_user ON principles(user_id, priority);
"#;

/// Initialize all schema tables. Idempotent (uses IF NOT EXISTS).
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(tables, vec!["entries", "memory_items", "principles", "users"]);
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        init_schema(&conn).unwrap(); // second call should not error
    }

    #[test]
    fn memory_items_reject_unknown_type() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn.execute(
            "INSERT INTO users (id, email, created_at, updated_at) VALUES ('u1', 'a@b.c', 't', 't')",
            [],
        )
        .unwrap();

        let result = conn.execute(
            "INSERT INTO memory_items (id, user_id, name, item_type, context, sentiment, last_mentioned, created_at) \
             VALUES ('m1', 'u1', 'Paris', 'place', '', 'neutral', 't', 't')",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn entries_reject_unknown_source() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn.execute(
            "INSERT INTO users (id, email, created_at, updated_at) VALUES ('u1', 'a@b.c', 't', 't')",
            [],
        )
        .unwrap();

        let result = conn.execute(
            "INSERT INTO entries (id, user_id, title, content, source, created_at, updated_at) \
             VALUES ('e1', 'u1', 'T', 'c', 'fax', 't', 't')",
            [],
        );
        assert!(result.is_err());
    }
}

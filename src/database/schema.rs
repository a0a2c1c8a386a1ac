use anyhow::Result;
use rusqlite::Connection;

pub fn create_tables(conn: &Connection) -> Result<()> {
    // Derived-pattern cache
    conn.execute(
        "CREATE TABLE IF NOT EXISTS stored_patterns (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL,
            pattern_type TEXT NOT NULL,
            category TEXT NOT NULL,
            identity_key TEXT NOT NULL,
            payload TEXT NOT NULL,
            confidence REAL NOT NULL,
            generated_at INTEGER NOT NULL,
            expires_at INTEGER,
            first_detected INTEGER NOT NULL,
            last_observed INTEGER NOT NULL,
            UNIQUE(user_id, pattern_type, identity_key)
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_stored_patterns_user ON stored_patterns(user_id, category)",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_stored_patterns_expires ON stored_patterns(expires_at)",
        [],
    )?;

    // Natal placements, one row per body
    conn.execute(
        "CREATE TABLE IF NOT EXISTS birth_charts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL,
            body TEXT NOT NULL,
            sign TEXT NOT NULL,
            degree REAL NOT NULL,
            ecliptic_longitude REAL,
            house INTEGER,
            UNIQUE(user_id, body)
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS user_profiles (
            user_id TEXT PRIMARY KEY,
            birthday TEXT,
            timezone TEXT,
            updated_at INTEGER NOT NULL
        )",
        [],
    )?;

    // Knowledge catalog vectors, little-endian f32 blobs
    conn.execute(
        "CREATE TABLE IF NOT EXISTS knowledge_embeddings (
            slug TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            category TEXT NOT NULL,
            content TEXT NOT NULL,
            embedding BLOB NOT NULL,
            dimensions INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_knowledge_category ON knowledge_embeddings(category)",
        [],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_tables_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        create_tables(&conn).unwrap();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'
                 AND name IN ('stored_patterns', 'birth_charts', 'user_profiles', 'knowledge_embeddings')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 4);
    }
}

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

pub mod schema;
pub mod queries;

/// The single connection shared by the store, chart source and retrieval.
pub type SharedConnection = Arc<Mutex<Connection>>;

pub fn shared(conn: Connection) -> SharedConnection {
    Arc::new(Mutex::new(conn))
}

pub fn init_database(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;

    // Enable WAL mode
    conn.pragma_update(None, "journal_mode", &"WAL")?;
    conn.pragma_update(None, "synchronous", &"NORMAL")?;
    conn.pragma_update(None, "foreign_keys", &"ON")?;

    schema::create_tables(&conn)?;

    Ok(conn)
}

/// Schema-initialized connection with no backing file, for tests and dry runs.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    conn.pragma_update(None, "foreign_keys", &"ON")?;
    schema::create_tables(&conn)?;
    Ok(conn)
}

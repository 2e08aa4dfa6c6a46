//! SQLite bootstrap shared by the user and kitten stores.

use anyhow::{Context, Result};
use parking_lot::Mutex;
use rusqlite::Connection;
use std::sync::Arc;
use tracing::info;

/// Connection handle shared between stores. Each store call holds the lock
/// for a single statement.
pub type SharedConnection = Arc<Mutex<Connection>>;

/// Path value that selects an in-memory database.
pub const IN_MEMORY: &str = ":memory:";

/// Open (or create) the database at `db_path` and ensure the schema exists.
pub fn open(db_path: &str) -> Result<SharedConnection> {
    let conn = if db_path == IN_MEMORY {
        Connection::open_in_memory().context("open in-memory db")?
    } else {
        let conn = Connection::open(db_path).context("open kittens db")?;
        conn.pragma_update(None, "journal_mode", "WAL").ok();
        conn.pragma_update(None, "synchronous", "NORMAL").ok();
        conn
    };

    init_schema(&conn)?;
    info!("🗄️  Database ready at: {}", db_path);

    Ok(Arc::new(Mutex::new(conn)))
}

/// Convenience for tests and ephemeral runs.
pub fn open_in_memory() -> Result<SharedConnection> {
    open(IN_MEMORY)
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", "ON")
        .context("enable foreign keys")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT UNIQUE NOT NULL,
            password_hash TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS kittens (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            owner_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            age INTEGER NOT NULL,
            color TEXT NOT NULL,
            FOREIGN KEY (owner_id) REFERENCES users(id)
        )",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_kittens_owner ON kittens(owner_id, id ASC)",
        [],
    )?;

    Ok(())
}

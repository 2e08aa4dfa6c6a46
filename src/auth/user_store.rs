//! User Storage
//! Mission: Store user accounts and their bcrypt password hashes in SQLite

use crate::auth::models::User;
use crate::db::SharedConnection;
use crate::error::StoreError;
use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};
use tracing::info;

/// Hash a password with bcrypt at the given cost. CPU-heavy; call from a
/// blocking thread.
pub fn hash_password(password: &str, cost: u32) -> Result<String> {
    bcrypt::hash(password, cost).context("Failed to hash password")
}

/// Compare a password with a stored bcrypt hash.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool> {
    bcrypt::verify(password, password_hash).context("Failed to verify password")
}

/// User storage with SQLite backend
#[derive(Clone)]
pub struct UserStore {
    conn: SharedConnection,
}

impl UserStore {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Insert a user with an already-hashed password
    pub fn create(&self, username: &str, password_hash: &str) -> Result<User, StoreError> {
        let created_at = Utc::now().to_rfc3339();

        let conn = self.conn.lock();
        let inserted = conn.execute(
            "INSERT INTO users (username, password_hash, created_at) VALUES (?1, ?2, ?3)",
            params![username, password_hash, created_at],
        );

        match inserted {
            Ok(_) => {}
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                return Err(StoreError::DuplicateUsername(username.to_string()));
            }
            Err(e) => return Err(e.into()),
        }

        let user = User {
            id: conn.last_insert_rowid(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at,
        };

        info!("✅ Created user: {} ({})", user.username, user.id);

        Ok(user)
    }

    /// Get user by username
    pub fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare_cached(
            "SELECT id, username, password_hash, created_at FROM users WHERE username = ?1",
        )?;

        let user = stmt
            .query_row(params![username], Self::row_to_user)
            .optional()?;
        Ok(user)
    }

    fn row_to_user(row: &Row) -> rusqlite::Result<User> {
        Ok(User {
            id: row.get(0)?,
            username: row.get(1)?,
            password_hash: row.get(2)?,
            created_at: row.get(3)?,
        })
    }
}

//! Kitten Storage
//! Mission: Persist owned kittens in SQLite

use crate::db::SharedConnection;
use crate::error::StoreError;
use crate::kittens::models::{Kitten, NewKitten};
use rusqlite::{params, OptionalExtension, Row};
use tracing::info;

#[derive(Clone)]
pub struct KittenStore {
    conn: SharedConnection,
}

impl KittenStore {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Insert a kitten owned by `owner_id`
    pub fn create(&self, owner_id: i64, new: &NewKitten) -> Result<Kitten, StoreError> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO kittens (owner_id, name, age, color) VALUES (?1, ?2, ?3, ?4)",
            params![owner_id, new.name, new.age, new.color],
        )?;

        Ok(Kitten {
            id: conn.last_insert_rowid(),
            owner_id,
            name: new.name.clone(),
            age: new.age,
            color: new.color.clone(),
        })
    }

    /// Oldest kitten owned by `owner_id`
    pub fn find_first_by_owner(&self, owner_id: i64) -> Result<Option<Kitten>, StoreError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare_cached(
            "SELECT id, owner_id, name, age, color FROM kittens
             WHERE owner_id = ?1 ORDER BY id ASC LIMIT 1",
        )?;
        let kitten = stmt
            .query_row(params![owner_id], Self::row_to_kitten)
            .optional()?;
        Ok(kitten)
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<Kitten>, StoreError> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare_cached("SELECT id, owner_id, name, age, color FROM kittens WHERE id = ?1")?;
        let kitten = stmt
            .query_row(params![id], Self::row_to_kitten)
            .optional()?;
        Ok(kitten)
    }

    /// Delete by id. Returns `false` if no row matched.
    pub fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let conn = self.conn.lock();
        let rows_affected = conn.execute("DELETE FROM kittens WHERE id = ?1", params![id])?;

        if rows_affected > 0 {
            info!("🗑️  Deleted kitten: {}", id);
        }
        Ok(rows_affected > 0)
    }

    fn row_to_kitten(row: &Row) -> rusqlite::Result<Kitten> {
        Ok(Kitten {
            id: row.get(0)?,
            owner_id: row.get(1)?,
            name: row.get(2)?,
            age: row.get(3)?,
            color: row.get(4)?,
        })
    }
}

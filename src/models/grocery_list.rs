//! Grocery list model

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;

/// A stored grocery list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroceryList {
    pub id: i64,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl GroceryList {
    /// Create from a database row
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    /// Insert a new grocery list
    pub fn create(conn: &Connection, name: &str) -> DbResult<Self> {
        conn.execute("INSERT INTO grocery_lists (name) VALUES (?1)", params![name])?;

        let id = conn.last_insert_rowid();
        Self::get_by_id(conn, id)?.ok_or(crate::db::DbError::NotFound)
    }

    /// Get a grocery list by ID
    pub fn get_by_id(conn: &Connection, id: i64) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM grocery_lists WHERE id = ?1")?;

        let result = stmt.query_row([id], Self::from_row);
        match result {
            Ok(list) => Ok(Some(list)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List all grocery lists, newest first
    pub fn list(conn: &Connection) -> DbResult<Vec<Self>> {
        let mut stmt =
            conn.prepare("SELECT * FROM grocery_lists ORDER BY created_at DESC, id DESC")?;

        let lists = stmt
            .query_map([], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(lists)
    }

    /// Bump the updated_at timestamp
    pub fn touch(conn: &Connection, id: i64) -> DbResult<()> {
        conn.execute(
            "UPDATE grocery_lists SET updated_at = datetime('now') WHERE id = ?1",
            [id],
        )?;
        Ok(())
    }

    /// Delete a grocery list; items and their sources cascade.
    /// Returns false if not found.
    pub fn delete(conn: &Connection, id: i64) -> DbResult<bool> {
        let rows = conn.execute("DELETE FROM grocery_lists WHERE id = ?1", [id])?;
        Ok(rows > 0)
    }
}

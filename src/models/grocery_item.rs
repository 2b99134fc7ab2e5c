//! Grocery item model
//!
//! Persisted grocery entries plus their recipe-source labels. The tool
//! layer treats a list's items as an immutable snapshot: it loads the
//! sequence, runs the pure aggregator, and writes the whole result back in
//! one transaction. Category is never stored; it is recomputed from the
//! name at read time.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;
use crate::nutrition::GroceryEntry;

/// A persisted grocery item with its source labels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: i64,
    pub list_id: i64,
    pub name: String,
    pub quantity: String,
    pub unit: Option<String>,
    pub checked: bool,
    pub position: i64,
    pub source_recipes: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl GroceryItem {
    /// Create from a database row (sources loaded separately)
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            list_id: row.get("list_id")?,
            name: row.get("name")?,
            quantity: row.get("quantity")?,
            unit: row.get("unit")?,
            checked: row.get::<_, i32>("checked")? != 0,
            position: row.get("position")?,
            source_recipes: Vec::new(),
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    /// Source labels for one item, in insertion order
    fn load_sources(conn: &Connection, item_id: i64) -> DbResult<Vec<String>> {
        let mut stmt = conn.prepare(
            "SELECT recipe_label FROM grocery_item_sources WHERE item_id = ?1 ORDER BY id ASC",
        )?;
        let labels = stmt
            .query_map([item_id], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(labels)
    }

    /// Get a single item with its sources
    pub fn get_by_id(conn: &Connection, id: i64) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM grocery_items WHERE id = ?1")?;

        let result = stmt.query_row([id], Self::from_row);
        match result {
            Ok(mut item) => {
                item.source_recipes = Self::load_sources(conn, item.id)?;
                Ok(Some(item))
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// All items of a list in display order (position 0 = newest)
    pub fn list_for_list(conn: &Connection, list_id: i64) -> DbResult<Vec<Self>> {
        let mut stmt = conn
            .prepare("SELECT * FROM grocery_items WHERE list_id = ?1 ORDER BY position ASC")?;

        let mut items = stmt
            .query_map([list_id], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        for item in &mut items {
            item.source_recipes = Self::load_sources(conn, item.id)?;
        }

        Ok(items)
    }

    /// Load a list's items as aggregator entries, in display order
    pub fn snapshot(conn: &Connection, list_id: i64) -> DbResult<Vec<GroceryEntry>> {
        let items = Self::list_for_list(conn, list_id)?;
        Ok(items
            .into_iter()
            .map(|item| GroceryEntry {
                name: item.name,
                quantity: item.quantity,
                unit: item.unit,
                source_recipes: item.source_recipes,
                checked: item.checked,
            })
            .collect())
    }

    /// Replace a list's items with a new aggregated sequence, atomically.
    /// Entry order becomes the stored position order.
    pub fn replace_for_list(
        conn: &mut Connection,
        list_id: i64,
        entries: &[GroceryEntry],
    ) -> DbResult<()> {
        let tx = conn.transaction()?;

        tx.execute("DELETE FROM grocery_items WHERE list_id = ?1", [list_id])?;

        for (position, entry) in entries.iter().enumerate() {
            tx.execute(
                "INSERT INTO grocery_items (list_id, name, quantity, unit, checked, position)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    list_id,
                    entry.name,
                    entry.quantity,
                    entry.unit,
                    entry.checked as i32,
                    position as i64,
                ],
            )?;

            let item_id = tx.last_insert_rowid();
            for label in &entry.source_recipes {
                tx.execute(
                    "INSERT OR IGNORE INTO grocery_item_sources (item_id, recipe_label)
                     VALUES (?1, ?2)",
                    params![item_id, label],
                )?;
            }
        }

        tx.execute(
            "UPDATE grocery_lists SET updated_at = datetime('now') WHERE id = ?1",
            [list_id],
        )?;

        tx.commit()?;
        Ok(())
    }

    /// Set an item's checked flag. Returns false if not found.
    pub fn set_checked(conn: &Connection, id: i64, checked: bool) -> DbResult<bool> {
        let rows = conn.execute(
            "UPDATE grocery_items SET checked = ?1, updated_at = datetime('now') WHERE id = ?2",
            params![checked as i32, id],
        )?;
        Ok(rows > 0)
    }

    /// Delete a single item; sources cascade. Returns false if not found.
    pub fn delete(conn: &Connection, id: i64) -> DbResult<bool> {
        let rows = conn.execute("DELETE FROM grocery_items WHERE id = ?1", [id])?;
        Ok(rows > 0)
    }

    /// Remove all checked items from a list, returning how many went away
    pub fn clear_checked(conn: &Connection, list_id: i64) -> DbResult<i64> {
        let rows = conn.execute(
            "DELETE FROM grocery_items WHERE list_id = ?1 AND checked = 1",
            [list_id],
        )?;
        Ok(rows as i64)
    }

    /// Count items in a list
    pub fn count_for_list(conn: &Connection, list_id: i64) -> DbResult<i64> {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM grocery_items WHERE list_id = ?1",
            [list_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

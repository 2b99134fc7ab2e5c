//! Recipe ingredient model
//!
//! Free-form {name, quantity, unit} tuples attached to a recipe. Quantity
//! stays text: parsing only happens inside the aggregator's summing path.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;
use crate::nutrition::IngredientInput;

/// One ingredient line of a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub id: i64,
    pub recipe_id: i64,
    pub name: String,
    pub quantity: String,
    pub unit: Option<String>,
    pub created_at: String,
}

/// Data for adding an ingredient to a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredientCreate {
    pub recipe_id: i64,
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: String,
    pub unit: Option<String>,
}

fn default_quantity() -> String {
    "1".to_string()
}

impl RecipeIngredient {
    /// Create from a database row
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            recipe_id: row.get("recipe_id")?,
            name: row.get("name")?,
            quantity: row.get("quantity")?,
            unit: row.get("unit")?,
            created_at: row.get("created_at")?,
        })
    }

    /// Insert a new ingredient line
    pub fn create(conn: &Connection, data: &RecipeIngredientCreate) -> DbResult<Self> {
        conn.execute(
            "INSERT INTO recipe_ingredients (recipe_id, name, quantity, unit)
             VALUES (?1, ?2, ?3, ?4)",
            params![data.recipe_id, data.name, data.quantity, data.unit],
        )?;

        let id = conn.last_insert_rowid();
        Self::get_by_id(conn, id)?.ok_or(crate::db::DbError::NotFound)
    }

    /// Get an ingredient line by ID
    pub fn get_by_id(conn: &Connection, id: i64) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM recipe_ingredients WHERE id = ?1")?;

        let result = stmt.query_row([id], Self::from_row);
        match result {
            Ok(ingredient) => Ok(Some(ingredient)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// All ingredient lines for a recipe, in insertion order
    pub fn list_for_recipe(conn: &Connection, recipe_id: i64) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT * FROM recipe_ingredients WHERE recipe_id = ?1 ORDER BY id ASC",
        )?;

        let ingredients = stmt
            .query_map([recipe_id], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ingredients)
    }

    /// Delete an ingredient line. Returns false if not found.
    pub fn delete(conn: &Connection, id: i64) -> DbResult<bool> {
        let rows = conn.execute("DELETE FROM recipe_ingredients WHERE id = ?1", [id])?;
        Ok(rows > 0)
    }

    /// Convert to the aggregator's input tuple
    pub fn to_input(&self) -> IngredientInput {
        IngredientInput {
            name: self.name.clone(),
            quantity: self.quantity.clone(),
            unit: self.unit.clone(),
        }
    }
}

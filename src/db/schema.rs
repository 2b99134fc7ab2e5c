//! Database schema and migrations
//!
//! Versioned schema creation for NutriMate.

use rusqlite::Connection;

use super::DbResult;

/// Current schema version
const SCHEMA_VERSION: i32 = 1;

/// Run all migrations to bring the database up to the current schema version
pub fn run_migrations(conn: &Connection) -> DbResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        [],
    )?;

    let current_version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    if current_version < 1 {
        migrate_v1(conn)?;
        conn.execute("INSERT INTO schema_migrations (version) VALUES (1)", [])?;
    }

    Ok(())
}

/// Migration v1: Initial schema
fn migrate_v1(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(
        r#"
        -- ============================================
        -- PROFILE
        -- Single-row biometric profile for target estimation
        -- ============================================
        CREATE TABLE profile (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            gender TEXT NOT NULL CHECK(gender IN ('male', 'female')),
            age INTEGER NOT NULL,
            weight_kg REAL NOT NULL,
            height_cm REAL NOT NULL,
            activity_level TEXT NOT NULL,
            goal TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- ============================================
        -- RECIPES
        -- Named ingredient collections (recipe-data source)
        -- ============================================
        CREATE TABLE recipes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            notes TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX idx_recipes_name ON recipes(name);

        -- ============================================
        -- RECIPE INGREDIENTS
        -- Free-form {name, quantity, unit} tuples per recipe
        -- ============================================
        CREATE TABLE recipe_ingredients (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            recipe_id INTEGER NOT NULL REFERENCES recipes(id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            quantity TEXT NOT NULL DEFAULT '1',   -- free-form numeric-ish text
            unit TEXT,                            -- nullable, no normalization
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX idx_recipe_ingredients_recipe ON recipe_ingredients(recipe_id);

        -- ============================================
        -- GROCERY LISTS
        -- ============================================
        CREATE TABLE grocery_lists (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- ============================================
        -- GROCERY ITEMS
        -- Aggregated entries; position 0 is the newest item.
        -- Category is computed from the name at read time, never stored.
        -- ============================================
        CREATE TABLE grocery_items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            list_id INTEGER NOT NULL REFERENCES grocery_lists(id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            quantity TEXT NOT NULL DEFAULT '1',
            unit TEXT,
            checked INTEGER NOT NULL DEFAULT 0,   -- boolean
            position INTEGER NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX idx_grocery_items_list ON grocery_items(list_id);

        -- ============================================
        -- GROCERY ITEM SOURCES
        -- Which recipes contributed each item (set semantics)
        -- ============================================
        CREATE TABLE grocery_item_sources (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            item_id INTEGER NOT NULL REFERENCES grocery_items(id) ON DELETE CASCADE,
            recipe_label TEXT NOT NULL,

            UNIQUE(item_id, recipe_label)
        );

        CREATE INDEX idx_grocery_item_sources_item ON grocery_item_sources(item_id);
        "#,
    )?;

    Ok(())
}

/// Get the current schema version
pub fn get_schema_version(conn: &Connection) -> DbResult<i32> {
    let version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);
    Ok(version)
}

/// Check if the database needs migration
pub fn needs_migration(conn: &Connection) -> DbResult<bool> {
    let current = get_schema_version(conn)?;
    Ok(current < SCHEMA_VERSION)
}

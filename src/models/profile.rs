//! User profile model
//!
//! Stores the single biometric profile used for calorie target estimation.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;
use crate::nutrition::{ActivityLevel, BiometricProfile, Gender, Goal};

/// Persisted biometric profile (single-row table, id = 1)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub gender: String,
    pub age: i64,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: String,
    pub goal: String,
    pub created_at: String,
    pub updated_at: String,
}

impl UserProfile {
    /// Create from a database row
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            gender: row.get("gender")?,
            age: row.get("age")?,
            weight_kg: row.get("weight_kg")?,
            height_cm: row.get("height_cm")?,
            activity_level: row.get("activity_level")?,
            goal: row.get("goal")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    /// Get the profile (single-row table)
    pub fn get(conn: &Connection) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM profile WHERE id = 1")?;

        let result = stmt.query_row([], Self::from_row);
        match result {
            Ok(profile) => Ok(Some(profile)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set or update the profile (upsert)
    pub fn set(
        conn: &Connection,
        gender: &str,
        age: i64,
        weight_kg: f64,
        height_cm: f64,
        activity_level: &str,
        goal: &str,
    ) -> DbResult<Self> {
        conn.execute(
            r#"
            INSERT INTO profile (id, gender, age, weight_kg, height_cm, activity_level, goal)
            VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(id) DO UPDATE SET
                gender = excluded.gender,
                age = excluded.age,
                weight_kg = excluded.weight_kg,
                height_cm = excluded.height_cm,
                activity_level = excluded.activity_level,
                goal = excluded.goal,
                updated_at = datetime('now')
            "#,
            params![gender, age, weight_kg, height_cm, activity_level, goal],
        )?;

        Self::get(conn)?.ok_or(crate::db::DbError::NotFound)
    }

    /// Convert the stored row into the typed biometric value used by the
    /// estimator. Activity and goal strings fall back leniently; the gender
    /// column is constrained by the schema.
    pub fn to_biometrics(&self) -> Option<BiometricProfile> {
        Some(BiometricProfile {
            gender: Gender::from_str(&self.gender)?,
            age: self.age.max(0) as u32,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            activity: ActivityLevel::from_str(&self.activity_level),
            goal: Goal::from_str(&self.goal),
        })
    }
}

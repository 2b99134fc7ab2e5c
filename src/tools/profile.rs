//! Profile MCP tools
//!
//! Get/set the single biometric profile backing target estimation.

use serde::Serialize;

use crate::db::Database;
use crate::models::UserProfile;
use crate::nutrition::{ActivityLevel, Gender, Goal};

/// Response for set_profile / get_profile
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub gender: String,
    pub age: i64,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: String,
    pub goal: String,
    pub updated_at: String,
}

impl From<UserProfile> for ProfileResponse {
    fn from(p: UserProfile) -> Self {
        Self {
            gender: p.gender,
            age: p.age,
            weight_kg: p.weight_kg,
            height_cm: p.height_cm,
            activity_level: p.activity_level,
            goal: p.goal,
            updated_at: p.updated_at,
        }
    }
}

/// Store the biometric profile (upsert)
pub fn set_profile(
    db: &Database,
    gender: &str,
    age: i64,
    weight_kg: f64,
    height_cm: f64,
    activity_level: &str,
    goal: &str,
) -> Result<ProfileResponse, String> {
    // Gender has no lenient fallback; reject unknown values here
    let gender = Gender::from_str(gender)
        .ok_or_else(|| format!("Unknown gender '{}', expected male or female", gender))?;

    // Activity and goal are stored in canonical spelling; unknown strings
    // fall back silently (sedentary / maintain)
    let activity = ActivityLevel::from_str(activity_level);
    let goal = Goal::from_str(goal);

    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let profile = UserProfile::set(
        &conn,
        gender.as_str(),
        age,
        weight_kg,
        height_cm,
        activity.as_str(),
        goal.as_str(),
    )
    .map_err(|e| format!("Failed to save profile: {}", e))?;

    Ok(profile.into())
}

/// Fetch the stored biometric profile, if any
pub fn get_profile(db: &Database) -> Result<Option<ProfileResponse>, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let profile = UserProfile::get(&conn).map_err(|e| format!("Failed to get profile: {}", e))?;

    Ok(profile.map(Into::into))
}

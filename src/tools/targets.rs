//! Calorie target MCP tools
//!
//! Estimation and meal-slot distribution. The math itself lives in
//! `crate::nutrition`; these functions only parse boundary strings, fetch
//! the stored profile when explicit biometrics are omitted, and shape
//! responses.

use serde::Serialize;

use crate::db::Database;
use crate::models::UserProfile;
use crate::nutrition::{
    bmr, distribute_calories, estimate_daily_calories, tdee, ActivityLevel, BiometricProfile,
    EnergyFormula, Gender, Goal, MealDistribution,
};

/// Response for estimate_calorie_target
#[derive(Debug, Serialize)]
pub struct CalorieTargetResponse {
    pub formula: String,
    pub bmr: f64,
    pub tdee: f64,
    pub daily_calories: i64,
    pub goal: String,
    pub activity_level: String,
}

/// Response for distribute_calories
#[derive(Debug, Serialize)]
pub struct MealTargetsResponse {
    pub daily_calories: i64,
    pub breakfast: i64,
    pub lunch: i64,
    pub dinner: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snack: Option<i64>,
    /// Sum of the slots; may drift from daily_calories by rounding
    pub allotted: i64,
}

fn meal_targets_response(total: i64, distribution: MealDistribution) -> MealTargetsResponse {
    MealTargetsResponse {
        daily_calories: total,
        breakfast: distribution.breakfast,
        lunch: distribution.lunch,
        dinner: distribution.dinner,
        snack: distribution.snack,
        allotted: distribution.total(),
    }
}

/// Explicit biometrics as passed over the tool boundary
#[derive(Debug, Clone)]
pub struct BiometricParams {
    pub gender: String,
    pub age: i64,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: String,
    pub goal: String,
}

impl BiometricParams {
    fn to_biometrics(&self) -> Result<BiometricProfile, String> {
        let gender = Gender::from_str(&self.gender)
            .ok_or_else(|| format!("Unknown gender '{}', expected male or female", self.gender))?;

        Ok(BiometricProfile {
            gender,
            age: self.age.max(0) as u32,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            activity: ActivityLevel::from_str(&self.activity_level),
            goal: Goal::from_str(&self.goal),
        })
    }
}

/// Resolve biometrics: explicit parameters win, otherwise the saved profile
fn resolve_biometrics(
    db: &Database,
    explicit: Option<&BiometricParams>,
) -> Result<BiometricProfile, String> {
    match explicit {
        Some(params) => params.to_biometrics(),
        None => {
            let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;
            let profile = UserProfile::get(&conn)
                .map_err(|e| format!("Failed to get profile: {}", e))?
                .ok_or("No profile stored; pass biometrics or call set_profile first")?;
            profile
                .to_biometrics()
                .ok_or_else(|| "Stored profile has an invalid gender value".to_string())
        }
    }
}

/// Estimate the daily calorie target
pub fn estimate_calorie_target(
    db: &Database,
    biometrics: Option<&BiometricParams>,
    formula: &str,
) -> Result<CalorieTargetResponse, String> {
    let profile = resolve_biometrics(db, biometrics)?;
    let formula = EnergyFormula::from_str(formula);

    Ok(CalorieTargetResponse {
        formula: formula.as_str().to_string(),
        bmr: bmr(&profile, formula),
        tdee: tdee(&profile, formula),
        daily_calories: estimate_daily_calories(&profile, formula),
        goal: profile.goal.as_str().to_string(),
        activity_level: profile.activity.as_str().to_string(),
    })
}

/// Split an explicit daily total across meal slots
pub fn distribute(total: i64, include_snack: bool) -> MealTargetsResponse {
    meal_targets_response(total, distribute_calories(total, include_snack))
}

/// Estimate the daily target and distribute it in one call
pub fn plan_meal_targets(
    db: &Database,
    biometrics: Option<&BiometricParams>,
    formula: &str,
    include_snack: bool,
) -> Result<MealTargetsResponse, String> {
    let target = estimate_calorie_target(db, biometrics, formula)?;
    Ok(distribute(target.daily_calories, include_snack))
}

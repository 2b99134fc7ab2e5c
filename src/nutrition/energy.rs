//! Calorie target estimation
//!
//! Computes Basal Metabolic Rate (BMR) and Total Daily Energy Expenditure
//! (TDEE) from a biometric profile, then applies a goal adjustment to produce
//! a daily calorie target.
//!
//! Two formulas coexist as named strategies. Callers pick one; they differ in
//! coefficients and in how the goal adjustment is applied (multiplicative vs.
//! flat offset), so they must not be collapsed into a single formula.

use serde::{Deserialize, Serialize};

/// Biological sex used by the BMR formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// Activity level scaling BMR up to TDEE
///
/// "Intense"/"very intense" are accepted spellings for the top two levels;
/// the factors are identical across both formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    /// Parse from string. Unrecognized levels fall back to Sedentary, which
    /// keeps the estimator total: a bad level means the 1.2 multiplier, not
    /// an error.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "light" | "lightly_active" => ActivityLevel::Light,
            "moderate" | "moderately_active" => ActivityLevel::Moderate,
            "active" | "intense" => ActivityLevel::Active,
            "very_active" | "very_intense" => ActivityLevel::VeryActive,
            _ => ActivityLevel::Sedentary,
        }
    }

    /// TDEE multiplier for this level
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

/// Dietary goal applied on top of TDEE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Maintain,
    WeightLoss,
    MuscleGain,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Maintain => "maintain",
            Goal::WeightLoss => "weight_loss",
            Goal::MuscleGain => "muscle_gain",
        }
    }

    /// Parse from string. Unrecognized goals fall back to Maintain (no
    /// adjustment) rather than failing.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "weight_loss" | "lose" | "cut" => Goal::WeightLoss,
            "muscle_gain" | "gain" | "bulk" => Goal::MuscleGain,
            _ => Goal::Maintain,
        }
    }
}

/// Immutable biometric inputs for a single estimation call
///
/// No bounds are enforced: zero or negative weight/height/age produce
/// mathematically defined but meaningless output, and callers own any
/// validation they want on top.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BiometricProfile {
    pub gender: Gender,
    /// Age in whole years
    pub age: u32,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    pub activity: ActivityLevel,
    pub goal: Goal,
}

/// BMR formula strategy
///
/// Mifflin-St Jeor applies the goal multiplicatively (x0.8 loss, x1.1 gain);
/// Harris-Benedict applies a flat -400/+400 kcal offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyFormula {
    MifflinStJeor,
    HarrisBenedict,
}

impl EnergyFormula {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyFormula::MifflinStJeor => "mifflin_st_jeor",
            EnergyFormula::HarrisBenedict => "harris_benedict",
        }
    }

    /// Parse from string, defaulting to Mifflin-St Jeor
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "harris_benedict" | "harris-benedict" => EnergyFormula::HarrisBenedict,
            _ => EnergyFormula::MifflinStJeor,
        }
    }
}

/// Basal Metabolic Rate in kcal/day for the given profile and formula
pub fn bmr(profile: &BiometricProfile, formula: EnergyFormula) -> f64 {
    let w = profile.weight_kg;
    let h = profile.height_cm;
    let a = f64::from(profile.age);

    match formula {
        EnergyFormula::MifflinStJeor => match profile.gender {
            Gender::Male => 10.0 * w + 6.25 * h - 5.0 * a + 5.0,
            Gender::Female => 10.0 * w + 6.25 * h - 5.0 * a - 161.0,
        },
        EnergyFormula::HarrisBenedict => match profile.gender {
            Gender::Male => 88.36 + 13.4 * w + 4.8 * h - 5.7 * a,
            Gender::Female => 447.6 + 9.2 * w + 3.1 * h - 4.3 * a,
        },
    }
}

/// Total Daily Energy Expenditure: BMR scaled by the activity factor
pub fn tdee(profile: &BiometricProfile, formula: EnergyFormula) -> f64 {
    bmr(profile, formula) * profile.activity.factor()
}

/// Daily calorie target: TDEE with the goal adjustment applied, rounded to
/// the nearest integer
pub fn estimate_daily_calories(profile: &BiometricProfile, formula: EnergyFormula) -> i64 {
    let tdee = tdee(profile, formula);

    let adjusted = match formula {
        EnergyFormula::MifflinStJeor => match profile.goal {
            Goal::Maintain => tdee,
            Goal::WeightLoss => tdee * 0.8,
            Goal::MuscleGain => tdee * 1.1,
        },
        EnergyFormula::HarrisBenedict => match profile.goal {
            Goal::Maintain => tdee,
            Goal::WeightLoss => tdee - 400.0,
            Goal::MuscleGain => tdee + 400.0,
        },
    };

    adjusted.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(gender: Gender, goal: Goal) -> BiometricProfile {
        BiometricProfile {
            gender,
            age: 30,
            weight_kg: 70.0,
            height_cm: 178.0,
            activity: ActivityLevel::Moderate,
            goal,
        }
    }

    #[test]
    fn test_mifflin_st_jeor_male_maintain() {
        // 10*70 + 6.25*178 - 5*30 + 5 = 1667.5; *1.55 = 2584.625
        let p = profile(Gender::Male, Goal::Maintain);
        assert!((bmr(&p, EnergyFormula::MifflinStJeor) - 1667.5).abs() < 1e-9);
        assert_eq!(estimate_daily_calories(&p, EnergyFormula::MifflinStJeor), 2585);
    }

    #[test]
    fn test_mifflin_st_jeor_female_offset() {
        // Female constant is -161 vs male +5: same inputs differ by 166 BMR
        let m = profile(Gender::Male, Goal::Maintain);
        let f = profile(Gender::Female, Goal::Maintain);
        let diff = bmr(&m, EnergyFormula::MifflinStJeor) - bmr(&f, EnergyFormula::MifflinStJeor);
        assert!((diff - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_mifflin_goal_is_multiplicative() {
        let maintain = profile(Gender::Male, Goal::Maintain);
        let loss = profile(Gender::Male, Goal::WeightLoss);
        let gain = profile(Gender::Male, Goal::MuscleGain);

        let base = tdee(&maintain, EnergyFormula::MifflinStJeor);
        assert_eq!(
            estimate_daily_calories(&loss, EnergyFormula::MifflinStJeor),
            (base * 0.8).round() as i64
        );
        assert_eq!(
            estimate_daily_calories(&gain, EnergyFormula::MifflinStJeor),
            (base * 1.1).round() as i64
        );
    }

    #[test]
    fn test_harris_benedict_goal_is_flat_offset() {
        let maintain = profile(Gender::Female, Goal::Maintain);
        let loss = profile(Gender::Female, Goal::WeightLoss);
        let gain = profile(Gender::Female, Goal::MuscleGain);

        let base = estimate_daily_calories(&maintain, EnergyFormula::HarrisBenedict);
        assert_eq!(
            estimate_daily_calories(&loss, EnergyFormula::HarrisBenedict),
            base - 400
        );
        assert_eq!(
            estimate_daily_calories(&gain, EnergyFormula::HarrisBenedict),
            base + 400
        );
    }

    #[test]
    fn test_harris_benedict_male_coefficients() {
        // 88.36 + 13.4*70 + 4.8*178 - 5.7*30 = 88.36 + 938 + 854.4 - 171 = 1709.76
        let p = profile(Gender::Male, Goal::Maintain);
        assert!((bmr(&p, EnergyFormula::HarrisBenedict) - 1709.76).abs() < 1e-9);
    }

    #[test]
    fn test_activity_factors() {
        assert!((ActivityLevel::Sedentary.factor() - 1.2).abs() < 1e-9);
        assert!((ActivityLevel::Light.factor() - 1.375).abs() < 1e-9);
        assert!((ActivityLevel::Moderate.factor() - 1.55).abs() < 1e-9);
        assert!((ActivityLevel::Active.factor() - 1.725).abs() < 1e-9);
        assert!((ActivityLevel::VeryActive.factor() - 1.9).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_activity_falls_back_to_sedentary() {
        assert_eq!(ActivityLevel::from_str("couch_potato"), ActivityLevel::Sedentary);
        assert_eq!(ActivityLevel::from_str("intense"), ActivityLevel::Active);
        assert_eq!(ActivityLevel::from_str("very_intense"), ActivityLevel::VeryActive);
    }

    #[test]
    fn test_unknown_goal_falls_back_to_maintain() {
        assert_eq!(Goal::from_str("shred"), Goal::Maintain);
        assert_eq!(Goal::from_str("lose"), Goal::WeightLoss);
        assert_eq!(Goal::from_str("gain"), Goal::MuscleGain);
    }

    #[test]
    fn test_no_input_clamping() {
        // Degenerate biometrics are computed, not rejected
        let p = BiometricProfile {
            gender: Gender::Male,
            age: 0,
            weight_kg: 0.0,
            height_cm: 0.0,
            activity: ActivityLevel::Sedentary,
            goal: Goal::Maintain,
        };
        assert_eq!(estimate_daily_calories(&p, EnergyFormula::MifflinStJeor), 6);
    }
}

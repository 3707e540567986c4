//! Daily nutrition targets.

use serde::{Deserialize, Serialize};

use super::profile::{ActivityLevel, FitnessGoal, Profile, Sex};
use crate::error::TempoError;

/// Basal metabolic rate (Mifflin-St Jeor), in kcal/day.
#[must_use]
pub fn bmr(weight_kg: f64, height_cm: f64, age: u32, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Total daily energy expenditure, rounded.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn tdee(bmr: f64, activity: ActivityLevel) -> i64 {
    (bmr * activity.tdee_multiplier()).round() as i64
}

/// Calorie target adjusted for the goal: 20% deficit or 10% surplus.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn target_calories(tdee: i64, goal: FitnessGoal) -> i64 {
    let factor = match goal {
        FitnessGoal::Maintain => return tdee,
        FitnessGoal::WeightLoss => 0.8,
        FitnessGoal::Muscle => 1.1,
    };
    (tdee as f64 * factor).round() as i64
}

/// Daily water need in milliliters (33 ml/kg scaled by activity).
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn water_ml(weight_kg: f64, activity: ActivityLevel) -> i64 {
    (weight_kg * 33.0 * activity.water_multiplier()).round() as i64
}

/// Macro split in grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    /// Protein grams.
    pub protein: i64,
    /// Carbohydrate grams.
    pub carbs: i64,
    /// Fat grams.
    pub fats: i64,
}

/// Split `calories` into 52.5% carbs, 32.5% fat and 15% protein.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn macros(calories: i64) -> Macros {
    let calories = calories as f64;
    Macros {
        carbs: (calories * 0.525 / 4.0).round() as i64,
        fats: (calories * 0.325 / 9.0).round() as i64,
        protein: (calories * 0.15 / 4.0).round() as i64,
    }
}

/// Full set of daily recommendations for a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionPlan {
    /// Basal metabolic rate, kcal.
    pub bmr: f64,
    /// Maintenance calories.
    pub tdee: i64,
    /// Goal-adjusted calories.
    pub calories: i64,
    /// Water, ml.
    pub water_ml: i64,
    /// Macro grams.
    pub macros: Macros,
    /// Activity level used.
    pub activity_level: ActivityLevel,
    /// Goal used.
    pub goal: FitnessGoal,
}

impl NutritionPlan {
    /// Compute recommendations for a complete profile.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first missing profile field.
    pub fn for_profile(profile: &Profile) -> Result<Self, TempoError> {
        let weight = profile.require_weight()?;
        let height = profile.require_height()?;
        let age = profile.require_age()?;
        let sex = profile.require_sex()?;

        let bmr = bmr(weight, height, age, sex);
        let tdee = tdee(bmr, profile.activity_level);
        let calories = target_calories(tdee, profile.goal);

        Ok(Self {
            bmr,
            tdee,
            calories,
            water_ml: water_ml(weight, profile.activity_level),
            macros: macros(calories),
            activity_level: profile.activity_level,
            goal: profile.goal,
        })
    }
}

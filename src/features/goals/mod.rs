//! Nutrition and workout goal arithmetic.
//!
//! Closed-form formulas driven by the body profile:
//! - Mifflin-St Jeor BMR, activity-scaled TDEE, calorie targets
//! - Daily water and macro split
//! - Weekly workout goals

mod nutrition;
mod profile;
mod workout;

pub use nutrition::{bmr, macros, target_calories, tdee, water_ml, Macros, NutritionPlan};
pub use profile::{ActivityLevel, FitnessGoal, Profile, Sex};
pub use workout::{workout_goals, WorkoutGoals};

//! Daily intake logs.
//!
//! Water and meals are logged per day and measured against the targets
//! derived from the body profile.

mod meals;
mod water;

pub use meals::{
    MealDay, MealEntry, MealStorage, MealTargets, MealTotals, MealType, MealWeek, NewMeal,
};
pub use water::{WaterDay, WaterEntry, WaterStorage, WaterWeek};

#[allow(clippy::cast_precision_loss)]
fn percent(value: u64, target: u64) -> f64 {
    if target == 0 {
        return 0.0;
    }
    value as f64 / target as f64 * 100.0
}

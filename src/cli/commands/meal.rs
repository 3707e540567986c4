//! Meal commands: log meals and total them against the nutrition targets.

use colored::Colorize;
use serde_json::json;

use super::{resolve_date, Context};
use crate::cli::args::{MealCommands, OutputFormat};
use crate::core::week_bounds;
use crate::error::TempoError;
use crate::features::goals::NutritionPlan;
use crate::features::intake::{MealDay, MealTargets, MealWeek, NewMeal};
use crate::output::{format_meal_day, format_meal_week, to_json};

/// Execute a meal subcommand.
///
/// # Errors
///
/// Returns an error if the meal is invalid or missing, a date cannot be
/// parsed, or the log cannot be read or written.
pub fn meal(ctx: &Context, command: MealCommands) -> Result<String, TempoError> {
    let storage = ctx.open_meals()?;
    let targets = daily_targets(ctx);

    match command {
        MealCommands::Add {
            name,
            meal_type,
            calories,
            protein,
            carbs,
            fats,
            date,
        } => {
            let date = resolve_date(date.as_deref())?;
            let meal = NewMeal {
                name,
                meal_type,
                calories,
                protein,
                carbs,
                fats,
            };
            storage.add(date, &meal)?;
            let meals = storage.on_date(date)?;
            format_meal_day(&MealDay::build(date, &meals, targets), ctx.format)
        },
        MealCommands::Today => {
            let date = resolve_date(None)?;
            let meals = storage.on_date(date)?;
            format_meal_day(&MealDay::build(date, &meals, targets), ctx.format)
        },
        MealCommands::Week { date } => {
            let date = resolve_date(date.as_deref())?;
            let (start, end) = week_bounds(date);
            let meals = storage.between(start, end)?;
            format_meal_week(&MealWeek::build(date, &meals, targets), ctx.format)
        },
        MealCommands::Delete { id } => {
            if !storage.delete(id)? {
                return Err(TempoError::NotFound(format!("meal #{id}")));
            }
            match ctx.format {
                OutputFormat::Json => to_json(&json!({ "deleted": id })),
                OutputFormat::Pretty => Ok(format!("{} meal #{id}", "Deleted".green())),
            }
        },
    }
}

/// Targets from the configured profile, if it is complete.
fn daily_targets(ctx: &Context) -> Option<MealTargets> {
    NutritionPlan::for_profile(&ctx.config.profile)
        .ok()
        .map(|plan| MealTargets::from(&plan))
}

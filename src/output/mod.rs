//! Output formatting for tempo.
//!
//! Every command renders either colored text for the terminal or JSON.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::TempoError;
use crate::features::goals::{NutritionPlan, Profile, WorkoutGoals};
use crate::features::intake::{MealDay, MealWeek, WaterDay, WaterWeek};
use crate::features::routines::{RoutineDefinition, RoutineSummary};
use crate::features::workout::{SessionSummary, WeeklyReport, WorkoutRecord};

pub use json::*;
pub use pretty::*;

/// Format the routine catalog based on output format
///
/// # Errors
///
/// Returns `TempoError::Parse` if JSON serialization fails.
pub fn format_routines(
    routines: &[RoutineSummary],
    format: OutputFormat,
) -> Result<String, TempoError> {
    match format {
        OutputFormat::Pretty => Ok(format_routines_pretty(routines)),
        OutputFormat::Json => format_routines_json(routines),
    }
}

/// Format a single routine based on output format
///
/// # Errors
///
/// Returns `TempoError::Parse` if JSON serialization fails.
pub fn format_routine(
    definition: &RoutineDefinition,
    format: OutputFormat,
) -> Result<String, TempoError> {
    match format {
        OutputFormat::Pretty => Ok(format_routine_pretty(definition)),
        OutputFormat::Json => to_json(definition),
    }
}

/// Format workout log entries based on output format
///
/// # Errors
///
/// Returns `TempoError::Parse` if JSON serialization fails.
pub fn format_workouts(
    workouts: &[WorkoutRecord],
    title: &str,
    format: OutputFormat,
) -> Result<String, TempoError> {
    match format {
        OutputFormat::Pretty => Ok(format_workouts_pretty(workouts, title)),
        OutputFormat::Json => format_workouts_json(workouts, title),
    }
}

/// Format the result of a session based on output format
///
/// # Errors
///
/// Returns `TempoError::Parse` if JSON serialization fails.
pub fn format_session_summary(
    routine_name: &str,
    summary: &SessionSummary,
    record_id: Option<i64>,
    format: OutputFormat,
) -> Result<String, TempoError> {
    match format {
        OutputFormat::Pretty => Ok(format_session_summary_pretty(
            routine_name,
            summary,
            record_id,
        )),
        OutputFormat::Json => format_session_summary_json(routine_name, summary, record_id),
    }
}

/// Format a weekly report based on output format
///
/// # Errors
///
/// Returns `TempoError::Parse` if JSON serialization fails.
pub fn format_weekly_report(
    report: &WeeklyReport,
    format: OutputFormat,
) -> Result<String, TempoError> {
    match format {
        OutputFormat::Pretty => Ok(format_weekly_report_pretty(report)),
        OutputFormat::Json => to_json(report),
    }
}

/// Format nutrition recommendations based on output format
///
/// # Errors
///
/// Returns `TempoError::Parse` if JSON serialization fails.
pub fn format_nutrition_plan(
    plan: &NutritionPlan,
    format: OutputFormat,
) -> Result<String, TempoError> {
    match format {
        OutputFormat::Pretty => Ok(format_nutrition_plan_pretty(plan)),
        OutputFormat::Json => to_json(plan),
    }
}

/// Format weekly workout targets based on output format
///
/// # Errors
///
/// Returns `TempoError::Parse` if JSON serialization fails.
pub fn format_workout_goals(
    goals: &WorkoutGoals,
    format: OutputFormat,
) -> Result<String, TempoError> {
    match format {
        OutputFormat::Pretty => Ok(format_workout_goals_pretty(goals)),
        OutputFormat::Json => to_json(goals),
    }
}

/// Format the body profile based on output format
///
/// # Errors
///
/// Returns `TempoError::Parse` if JSON serialization fails.
pub fn format_profile(profile: &Profile, format: OutputFormat) -> Result<String, TempoError> {
    match format {
        OutputFormat::Pretty => Ok(format_profile_pretty(profile)),
        OutputFormat::Json => to_json(profile),
    }
}

/// Format one day of water based on output format
///
/// # Errors
///
/// Returns `TempoError::Parse` if JSON serialization fails.
pub fn format_water_day(day: &WaterDay, format: OutputFormat) -> Result<String, TempoError> {
    match format {
        OutputFormat::Pretty => Ok(format_water_day_pretty(day)),
        OutputFormat::Json => to_json(day),
    }
}

/// Format a week of water based on output format
///
/// # Errors
///
/// Returns `TempoError::Parse` if JSON serialization fails.
pub fn format_water_week(week: &WaterWeek, format: OutputFormat) -> Result<String, TempoError> {
    match format {
        OutputFormat::Pretty => Ok(format_water_week_pretty(week)),
        OutputFormat::Json => to_json(week),
    }
}

/// Format one day of meals based on output format
///
/// # Errors
///
/// Returns `TempoError::Parse` if JSON serialization fails.
pub fn format_meal_day(day: &MealDay, format: OutputFormat) -> Result<String, TempoError> {
    match format {
        OutputFormat::Pretty => Ok(format_meal_day_pretty(day)),
        OutputFormat::Json => to_json(day),
    }
}

/// Format a week of meals based on output format
///
/// # Errors
///
/// Returns `TempoError::Parse` if JSON serialization fails.
pub fn format_meal_week(week: &MealWeek, format: OutputFormat) -> Result<String, TempoError> {
    match format {
        OutputFormat::Pretty => Ok(format_meal_week_pretty(week)),
        OutputFormat::Json => to_json(week),
    }
}

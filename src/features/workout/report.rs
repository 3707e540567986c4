//! Weekly progress against workout goals.

use chrono::NaiveDate;
use serde::Serialize;

use super::record::WorkoutRecord;
use crate::core::week_bounds;
use crate::features::goals::WorkoutGoals;

/// Totals for one week of the workout log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyReport {
    /// Monday of the week.
    pub week_start: NaiveDate,
    /// Sunday of the week.
    pub week_end: NaiveDate,
    /// Completed workouts.
    pub workouts: u32,
    /// Minutes across completed workouts.
    pub minutes: u64,
    /// Calories across completed workouts.
    pub calories: u64,
    /// Targets the totals are measured against.
    pub goals: WorkoutGoals,
    /// Workouts as a percentage of the weekly target.
    pub workouts_percent: f64,
    /// Minutes as a percentage of the weekly target.
    pub minutes_percent: f64,
    /// Calories as a percentage of the weekly target.
    pub calories_percent: f64,
}

impl WeeklyReport {
    /// Summarize the records of the week containing `date`.
    ///
    /// Records outside the week and records not marked completed are ignored.
    #[must_use]
    pub fn build(date: NaiveDate, records: &[WorkoutRecord], goals: WorkoutGoals) -> Self {
        let (week_start, week_end) = week_bounds(date);

        let counted = records.iter().filter(|r| {
            r.completed && r.tracking_date >= week_start && r.tracking_date <= week_end
        });

        let (workouts, minutes, calories) =
            counted.fold((0_u32, 0_u64, 0_u64), |(n, minutes, calories), r| {
                (
                    n + 1,
                    minutes + r.duration_minutes,
                    calories + u64::from(r.calories_burned),
                )
            });

        Self {
            week_start,
            week_end,
            workouts,
            minutes,
            calories,
            goals,
            workouts_percent: percent(u64::from(workouts), u64::from(goals.workouts_per_week)),
            minutes_percent: percent(minutes, u64::from(goals.minutes_per_week())),
            calories_percent: percent(calories, u64::from(goals.calories_per_week)),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn percent(value: u64, target: u64) -> f64 {
    if target == 0 {
        return 0.0;
    }
    value as f64 / target as f64 * 100.0
}

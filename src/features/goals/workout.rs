//! Weekly workout goals.

use serde::{Deserialize, Serialize};

use super::profile::{ActivityLevel, FitnessGoal};

const BASE_CALORIES_PER_WORKOUT: f64 = 400.0;

/// Weekly training targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutGoals {
    /// Sessions per week.
    pub workouts_per_week: u32,
    /// Minutes per session.
    pub minutes_per_workout: u32,
    /// Calories to burn per week.
    pub calories_per_week: u32,
}

impl WorkoutGoals {
    /// Weekly minutes across all sessions.
    #[must_use]
    pub const fn minutes_per_week(&self) -> u32 {
        self.minutes_per_workout * self.workouts_per_week
    }
}

/// Derive weekly goals from activity level and training goal.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn workout_goals(activity: ActivityLevel, goal: FitnessGoal) -> WorkoutGoals {
    let mut workouts_per_week = match activity {
        ActivityLevel::Active | ActivityLevel::VeryActive => 5,
        ActivityLevel::Moderate => 4,
        ActivityLevel::Sedentary | ActivityLevel::Light => 3,
    };
    if goal == FitnessGoal::Muscle {
        workouts_per_week = (workouts_per_week + 1).min(6);
    }

    let minutes_per_workout = match activity {
        ActivityLevel::Sedentary => 30,
        ActivityLevel::VeryActive => 60,
        _ => 45,
    };

    let multiplier = match goal {
        FitnessGoal::WeightLoss => 1.2,
        FitnessGoal::Muscle => 0.8,
        FitnessGoal::Maintain => 1.0,
    };
    let calories_per_week =
        (BASE_CALORIES_PER_WORKOUT * f64::from(workouts_per_week) * multiplier).round() as u32;

    WorkoutGoals {
        workouts_per_week,
        minutes_per_workout,
        calories_per_week,
    }
}

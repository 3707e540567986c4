//! Workout sessions.
//!
//! This module provides:
//! - The tick-driven interval engine (work/rest phases, sets, energy estimate)
//! - The controller that binds one engine to a routine and the workout log
//! - Workout log storage and weekly reports
//! - Clock formatting helpers

mod controller;
mod engine;
mod exercise;
mod record;
mod report;
mod storage;
mod timer;

pub use controller::{ActiveWorkout, FinishedWorkout, WorkoutController};
pub use engine::{
    session_length_seconds, Phase, SessionState, SessionSummary, TickOutcome,
    WorkoutSessionEngine, FALLBACK_ENERGY_PER_MINUTE, FINAL_REST_SECONDS,
};
pub use exercise::{ExerciseTarget, SessionExercise, DEFAULT_WORK_SECONDS};
pub use record::{CompletedWorkout, WorkoutRecord};
pub use report::WeeklyReport;
pub use storage::WorkoutStorage;
pub use timer::{format_clock, format_duration, parse_duration, render_progress_bar};

//! Core abstractions for tempo.
//!
//! Shared traits and date helpers used across features.

mod datetime;
mod traits;

pub use datetime::{parse_date, week_bounds};
pub use traits::{RoutineSource, WorkoutRecorder};

#[cfg(test)]
pub use traits::{MockRoutineSource, MockWorkoutRecorder};

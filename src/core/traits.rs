//! Seams between the workout controller and its collaborators.
//!
//! The controller only needs to look routines up and to hand finished
//! workouts off for storage. Both are traits so tests can mock them.

use crate::error::TempoError;
use crate::features::routines::Routine;
use crate::features::workout::{CompletedWorkout, SessionExercise};

/// Something that can supply routines and their exercises.
#[cfg_attr(test, mockall::automock)]
pub trait RoutineSource {
    /// Look up a routine by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup itself fails.
    fn routine(&self, id: &str) -> Result<Option<Routine>, TempoError>;

    /// The ordered exercise slots of a routine.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup itself fails.
    fn session_exercises(&self, routine_id: &str) -> Result<Vec<SessionExercise>, TempoError>;
}

/// Something that can store a finished workout.
#[cfg_attr(test, mockall::automock)]
pub trait WorkoutRecorder {
    /// Store the workout, returning its record ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the workout cannot be stored.
    fn record(&self, workout: &CompletedWorkout) -> Result<i64, TempoError>;
}

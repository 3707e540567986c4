//! Binds a session engine to a routine and the workout log.

use chrono::{DateTime, Local};

use super::engine::{SessionSummary, WorkoutSessionEngine};
use super::record::CompletedWorkout;
use crate::core::{RoutineSource, WorkoutRecorder};
use crate::error::{SessionError, TempoError};
use crate::features::routines::Routine;

/// The workout currently in progress.
#[derive(Debug)]
pub struct ActiveWorkout {
    /// Routine being run.
    pub routine: Routine,
    /// When the workout began.
    pub started_at: DateTime<Local>,
    /// The session engine for this workout.
    pub engine: WorkoutSessionEngine,
}

/// Outcome of finishing a workout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedWorkout {
    /// ID of the stored log entry.
    pub record_id: i64,
    /// What was stored.
    pub workout: CompletedWorkout,
}

/// Runs at most one workout at a time.
pub struct WorkoutController<S, R> {
    routines: S,
    recorder: R,
    active: Option<ActiveWorkout>,
}

impl<S: RoutineSource, R: WorkoutRecorder> WorkoutController<S, R> {
    /// Create an idle controller.
    pub const fn new(routines: S, recorder: R) -> Self {
        Self {
            routines,
            recorder,
            active: None,
        }
    }

    /// Load a routine and start a fresh session for it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a workout is already in progress, `NotFound`
    /// for an unknown routine, and `EmptySession` for a routine without
    /// exercises.
    pub fn begin(&mut self, routine_id: &str) -> Result<&mut ActiveWorkout, TempoError> {
        if self.active.is_some() {
            return Err(TempoError::InvalidInput(
                "a workout is already in progress".to_string(),
            ));
        }

        let routine = self
            .routines
            .routine(routine_id)?
            .ok_or_else(|| TempoError::NotFound(format!("routine {routine_id}")))?;
        let exercises = self.routines.session_exercises(routine_id)?;

        let mut engine = WorkoutSessionEngine::new();
        engine.start(exercises)?;

        tracing::info!(routine = %routine.id, exercises = engine.exercises().len(), "workout started");

        Ok(self.active.insert(ActiveWorkout {
            routine,
            started_at: Local::now(),
            engine,
        }))
    }

    /// Whether a workout is in progress.
    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The workout in progress.
    pub const fn active(&self) -> Option<&ActiveWorkout> {
        self.active.as_ref()
    }

    /// Engine of the workout in progress.
    pub fn engine(&self) -> Option<&WorkoutSessionEngine> {
        self.active.as_ref().map(|a| &a.engine)
    }

    /// Mutable engine of the workout in progress.
    pub fn engine_mut(&mut self) -> Option<&mut WorkoutSessionEngine> {
        self.active.as_mut().map(|a| &mut a.engine)
    }

    /// Finish the workout and store it in the log.
    ///
    /// The workout stays in progress if storing fails, so finishing can be
    /// retried.
    ///
    /// # Errors
    ///
    /// Returns `NoActiveSession` if nothing is in progress, or the
    /// recorder's error.
    pub fn finish(&mut self, notes: Option<String>) -> Result<FinishedWorkout, TempoError> {
        let active = self.active.as_ref().ok_or(SessionError::NoActiveSession)?;
        let summary: SessionSummary = active.engine.summary()?;

        let workout = CompletedWorkout {
            routine_id: active.routine.id.clone(),
            routine_name: active.routine.name.clone(),
            started_at: active.started_at,
            ended_at: Local::now(),
            summary,
            notes: notes.filter(|n| !n.trim().is_empty()),
        };

        let record_id = self.recorder.record(&workout).map_err(|e| {
            tracing::warn!(routine = %workout.routine_id, error = %e, "failed to record workout");
            e
        })?;

        if let Some(mut active) = self.active.take() {
            active.engine.finish()?;
        }
        Ok(FinishedWorkout { record_id, workout })
    }

    /// Drop the workout in progress without recording it.
    ///
    /// Returns whether there was one.
    pub fn abandon(&mut self) -> bool {
        match self.active.take() {
            Some(mut active) => {
                active.engine.close();
                tracing::info!(routine = %active.routine.id, "workout abandoned");
                true
            },
            None => false,
        }
    }
}

//! Workout log entries.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::engine::SessionSummary;

/// A finished session, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedWorkout {
    /// Routine the session ran.
    pub routine_id: String,
    /// Routine name at the time of the session.
    pub routine_name: String,
    /// When the session began.
    pub started_at: DateTime<Local>,
    /// When the session was finished.
    pub ended_at: DateTime<Local>,
    /// Elapsed time and energy estimate.
    pub summary: SessionSummary,
    /// Free-form notes.
    pub notes: Option<String>,
}

impl CompletedWorkout {
    /// Local date the session counts toward.
    #[must_use]
    pub fn tracking_date(&self) -> NaiveDate {
        self.started_at.date_naive()
    }

    /// Elapsed whole minutes, rounded to nearest.
    #[must_use]
    pub const fn duration_minutes(&self) -> u64 {
        (self.summary.total_elapsed_seconds + 30) / 60
    }
}

/// A stored workout log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Row ID.
    pub id: i64,
    /// Routine the session ran.
    pub routine_id: String,
    /// Routine name at the time of the session.
    pub routine_name: String,
    /// Local date the session counts toward.
    pub tracking_date: NaiveDate,
    /// When the session began.
    pub started_at: DateTime<Local>,
    /// When the session was finished.
    pub ended_at: DateTime<Local>,
    /// Elapsed seconds while running.
    pub duration_seconds: u64,
    /// Elapsed minutes, rounded.
    pub duration_minutes: u64,
    /// Rounded energy estimate.
    pub calories_burned: u32,
    /// Whether the session counts toward weekly goals.
    pub completed: bool,
    /// Free-form notes.
    pub notes: Option<String>,
}

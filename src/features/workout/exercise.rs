//! Exercise slots within a workout session.

use serde::{Deserialize, Serialize};

/// Work interval used when an exercise carries no explicit duration.
pub const DEFAULT_WORK_SECONDS: u32 = 45;

/// How an exercise slot is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum ExerciseTarget {
    /// Rep-based; the work timer still runs against [`DEFAULT_WORK_SECONDS`].
    Reps(u32),
    /// Timed work interval in seconds.
    Duration(u32),
}

impl ExerciseTarget {
    /// Build a target from optional reps and duration.
    ///
    /// A positive duration wins, then positive reps; with neither the slot is
    /// timed at the default duration.
    #[must_use]
    pub fn from_parts(reps: Option<u32>, duration_seconds: Option<u32>) -> Self {
        match (reps.filter(|r| *r > 0), duration_seconds.filter(|d| *d > 0)) {
            (_, Some(d)) => Self::Duration(d),
            (Some(r), None) => Self::Reps(r),
            (None, None) => Self::Duration(DEFAULT_WORK_SECONDS),
        }
    }

    /// Length of one work interval in seconds.
    #[must_use]
    pub const fn work_seconds(&self) -> u32 {
        match self {
            Self::Reps(_) => DEFAULT_WORK_SECONDS,
            Self::Duration(d) => *d,
        }
    }

    /// Short label such as "10 reps" or "45s".
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Reps(r) => format!("{r} reps"),
            Self::Duration(d) => format!("{d}s"),
        }
    }
}

/// One exercise slot within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionExercise {
    /// Catalog identifier of the exercise.
    pub exercise_id: String,
    /// Display name.
    pub name: String,
    /// Number of sets, always at least one.
    pub set_count: u32,
    /// Reps or timed work interval.
    pub target: ExerciseTarget,
    /// Rest between sets of this exercise.
    pub rest_seconds: u32,
    /// Energy cost per minute of work, if known.
    pub energy_rate_per_minute: Option<f64>,
}

impl SessionExercise {
    /// Create a slot. A set count of zero is raised to one.
    #[must_use]
    pub fn new(
        exercise_id: impl Into<String>,
        name: impl Into<String>,
        set_count: u32,
        target: ExerciseTarget,
        rest_seconds: u32,
    ) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            name: name.into(),
            set_count: set_count.max(1),
            target,
            rest_seconds,
            energy_rate_per_minute: None,
        }
    }

    /// Create a timed slot.
    #[must_use]
    pub fn timed(
        exercise_id: impl Into<String>,
        name: impl Into<String>,
        set_count: u32,
        duration_seconds: u32,
        rest_seconds: u32,
    ) -> Self {
        Self::new(
            exercise_id,
            name,
            set_count,
            ExerciseTarget::from_parts(None, Some(duration_seconds)),
            rest_seconds,
        )
    }

    /// Create a rep-based slot.
    #[must_use]
    pub fn reps(
        exercise_id: impl Into<String>,
        name: impl Into<String>,
        set_count: u32,
        reps: u32,
        rest_seconds: u32,
    ) -> Self {
        Self::new(
            exercise_id,
            name,
            set_count,
            ExerciseTarget::from_parts(Some(reps), None),
            rest_seconds,
        )
    }

    /// Attach an energy rate. Negative rates are treated as absent.
    #[must_use]
    pub fn with_energy_rate(mut self, per_minute: f64) -> Self {
        self.energy_rate_per_minute = (per_minute >= 0.0).then_some(per_minute);
        self
    }

    /// Length of one work interval in seconds.
    #[must_use]
    pub const fn work_seconds(&self) -> u32 {
        self.target.work_seconds()
    }

    /// Energy for all sets of this exercise, zero without a rate.
    #[must_use]
    pub fn planned_energy(&self) -> f64 {
        self.energy_rate_per_minute.map_or(0.0, |rate| {
            rate * f64::from(self.work_seconds()) * f64::from(self.set_count) / 60.0
        })
    }
}

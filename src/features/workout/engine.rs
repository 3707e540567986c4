//! Workout session engine.
//!
//! Drives work/rest phases and set/exercise progression from a one-second
//! tick, and estimates energy expended from completed work. The engine owns
//! its state exclusively; callers read it through [`WorkoutSessionEngine::snapshot`]
//! between ticks.

use serde::{Deserialize, Serialize};

use super::exercise::SessionExercise;
use crate::error::SessionError;

/// Rest threshold after the last set of an exercise.
pub const FINAL_REST_SECONDS: u32 = 60;

/// Flat expenditure rate used when no exercise carries an energy rate.
pub const FALLBACK_ENERGY_PER_MINUTE: f64 = 8.0;

/// Phase within a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Active exercise interval.
    Work,
    /// Recovery interval.
    Rest,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Work => write!(f, "Work"),
            Self::Rest => write!(f, "Rest"),
        }
    }
}

/// Mutable state of an active session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Whether ticks are being counted.
    pub running: bool,
    /// Current phase.
    pub phase: Phase,
    /// Seconds spent in the current phase.
    pub phase_elapsed_seconds: u32,
    /// Seconds counted while running, across all phases.
    pub total_elapsed_seconds: u64,
    /// 0-based index of the current exercise.
    pub exercise_index: usize,
    /// 1-based current set of the current exercise.
    pub set_index: u32,
    /// Set once the final rest of the last exercise runs out.
    pub completed: bool,
}

impl SessionState {
    const fn initial() -> Self {
        Self {
            running: false,
            phase: Phase::Work,
            phase_elapsed_seconds: 0,
            total_elapsed_seconds: 0,
            exercise_index: 0,
            set_index: 1,
            completed: false,
        }
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No session, or the session is paused.
    Idle,
    /// Time was counted without a phase change.
    Counted,
    /// The phase threshold was reached and the engine entered this phase.
    PhaseChanged(Phase),
    /// The last rest of the last exercise ran out; the session stopped.
    Completed,
}

/// Result of finishing a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Seconds counted while running.
    pub total_elapsed_seconds: u64,
    /// Rounded energy estimate.
    pub estimated_energy: u32,
}

/// Seconds a session takes when run uninterrupted to completion.
///
/// Every exercise contributes its work intervals, the rests between its
/// sets, and the closing rest.
#[must_use]
pub fn session_length_seconds(exercises: &[SessionExercise]) -> u64 {
    exercises
        .iter()
        .map(|e| {
            let sets = u64::from(e.set_count);
            sets * u64::from(e.work_seconds())
                + (sets - 1) * u64::from(e.rest_seconds)
                + u64::from(FINAL_REST_SECONDS)
        })
        .sum()
}

#[derive(Debug, Clone)]
struct Session {
    exercises: Vec<SessionExercise>,
    state: SessionState,
}

impl Session {
    fn current(&self) -> &SessionExercise {
        &self.exercises[self.state.exercise_index]
    }

    fn is_last_exercise(&self) -> bool {
        self.state.exercise_index + 1 >= self.exercises.len()
    }

    fn phase_threshold(&self) -> u32 {
        let exercise = self.current();
        match self.state.phase {
            Phase::Work => exercise.work_seconds(),
            Phase::Rest if self.state.set_index < exercise.set_count => exercise.rest_seconds,
            Phase::Rest => FINAL_REST_SECONDS,
        }
    }

    fn tick(&mut self) -> TickOutcome {
        self.state.phase_elapsed_seconds += 1;
        self.state.total_elapsed_seconds += 1;

        if self.state.phase_elapsed_seconds < self.phase_threshold() {
            return TickOutcome::Counted;
        }

        match self.state.phase {
            Phase::Work => {
                self.state.phase = Phase::Rest;
                self.state.phase_elapsed_seconds = 0;
                tracing::debug!(
                    exercise = self.state.exercise_index,
                    set = self.state.set_index,
                    "work interval done, resting"
                );
                TickOutcome::PhaseChanged(Phase::Rest)
            }
            Phase::Rest => {
                if self.state.set_index < self.current().set_count {
                    self.state.set_index += 1;
                } else if !self.is_last_exercise() {
                    self.state.exercise_index += 1;
                    self.state.set_index = 1;
                } else {
                    self.state.running = false;
                    self.state.completed = true;
                    tracing::info!(
                        total_seconds = self.state.total_elapsed_seconds,
                        "workout session complete"
                    );
                    return TickOutcome::Completed;
                }
                self.state.phase = Phase::Work;
                self.state.phase_elapsed_seconds = 0;
                tracing::debug!(
                    exercise = self.state.exercise_index,
                    set = self.state.set_index,
                    "rest done, back to work"
                );
                TickOutcome::PhaseChanged(Phase::Work)
            }
        }
    }

    fn jump_to(&mut self, index: usize) {
        self.state.exercise_index = index;
        self.state.set_index = 1;
        self.state.phase = Phase::Work;
        self.state.phase_elapsed_seconds = 0;
        self.state.completed = false;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn estimate_energy(&self) -> u32 {
        let resting = self.state.phase == Phase::Rest;
        let counted: f64 = self
            .exercises
            .iter()
            .enumerate()
            .filter(|(i, _)| {
                *i < self.state.exercise_index || (*i == self.state.exercise_index && !resting)
            })
            .map(|(_, exercise)| exercise.planned_energy())
            .sum();

        let total = if counted == 0.0 {
            FALLBACK_ENERGY_PER_MINUTE * (self.state.total_elapsed_seconds as f64 / 60.0)
        } else {
            counted
        };

        total.round().max(0.0) as u32
    }
}

/// Engine for one workout session at a time.
#[derive(Debug, Clone, Default)]
pub struct WorkoutSessionEngine {
    session: Option<Session>,
}

impl WorkoutSessionEngine {
    /// Create an uninitialized engine.
    #[must_use]
    pub const fn new() -> Self {
        Self { session: None }
    }

    /// Start a session over `exercises`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptySession`] when `exercises` is empty; the
    /// engine is left as it was.
    pub fn start(&mut self, exercises: Vec<SessionExercise>) -> Result<(), SessionError> {
        if exercises.is_empty() {
            return Err(SessionError::EmptySession);
        }
        tracing::debug!(exercises = exercises.len(), "workout session started");
        self.session = Some(Session {
            exercises,
            state: SessionState::initial(),
        });
        Ok(())
    }

    /// Advance the clock by one second. Does nothing unless running.
    pub fn tick(&mut self) -> TickOutcome {
        match self.session.as_mut() {
            Some(session) if session.state.running => session.tick(),
            _ => TickOutcome::Idle,
        }
    }

    /// Flip between running and paused. Returns the new running flag.
    pub fn toggle_running(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        session.state.running = !session.state.running;
        session.state.running
    }

    /// Jump to the next exercise. Returns false at the last exercise.
    pub fn advance_exercise(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.is_last_exercise() {
            return false;
        }
        let next = session.state.exercise_index + 1;
        session.jump_to(next);
        true
    }

    /// Jump to the previous exercise. Returns false at the first exercise.
    pub fn retreat_exercise(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.state.exercise_index == 0 {
            return false;
        }
        let previous = session.state.exercise_index - 1;
        session.jump_to(previous);
        true
    }

    /// Return to the initial state, keeping the exercise list.
    pub fn reset(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        session.state = SessionState::initial();
        true
    }

    /// Energy expended so far, rounded.
    ///
    /// Sums the planned energy of every exercise before the current one, plus
    /// the current one unless resting. With no rated work counted, falls back
    /// to a flat rate over the elapsed time.
    #[must_use]
    pub fn estimate_energy_expended(&self) -> u32 {
        self.session.as_ref().map_or(0, Session::estimate_energy)
    }

    /// Summary of the session so far, leaving it in place.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoActiveSession`] if no session was started.
    pub fn summary(&self) -> Result<SessionSummary, SessionError> {
        let session = self.session.as_ref().ok_or(SessionError::NoActiveSession)?;
        Ok(SessionSummary {
            total_elapsed_seconds: session.state.total_elapsed_seconds,
            estimated_energy: session.estimate_energy(),
        })
    }

    /// Produce the final summary and tear the session down.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoActiveSession`] if no session was started.
    pub fn finish(&mut self) -> Result<SessionSummary, SessionError> {
        let summary = self.summary()?;
        self.session = None;
        tracing::info!(
            total_seconds = summary.total_elapsed_seconds,
            energy = summary.estimated_energy,
            "workout session finished"
        );
        Ok(summary)
    }

    /// Discard the session without a summary.
    pub fn close(&mut self) {
        self.session = None;
    }

    /// Whether a session is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Option<SessionState> {
        self.session.as_ref().map(|s| s.state)
    }

    /// The session's exercises, empty when uninitialized.
    #[must_use]
    pub fn exercises(&self) -> &[SessionExercise] {
        self.session.as_ref().map_or(&[][..], |s| s.exercises.as_slice())
    }

    /// The exercise at the current position.
    #[must_use]
    pub fn current_exercise(&self) -> Option<&SessionExercise> {
        self.session.as_ref().map(Session::current)
    }

    /// Up to `n` exercises after the current one.
    #[must_use]
    pub fn upcoming(&self, n: usize) -> &[SessionExercise] {
        self.session.as_ref().map_or(&[][..], |s| {
            let start = (s.state.exercise_index + 1).min(s.exercises.len());
            let end = (start + n).min(s.exercises.len());
            &s.exercises[start..end]
        })
    }

    /// Seconds the current phase lasts.
    #[must_use]
    pub fn phase_threshold(&self) -> Option<u32> {
        self.session.as_ref().map(Session::phase_threshold)
    }

    /// Seconds left in the current phase.
    #[must_use]
    pub fn phase_remaining(&self) -> Option<u32> {
        self.session.as_ref().map(|s| {
            s.phase_threshold()
                .saturating_sub(s.state.phase_elapsed_seconds)
        })
    }

    /// Fraction of the current phase elapsed, in `[0, 1]`.
    #[must_use]
    pub fn phase_progress(&self) -> f64 {
        self.session.as_ref().map_or(0.0, |s| {
            let threshold = s.phase_threshold();
            if threshold == 0 {
                return 1.0;
            }
            (f64::from(s.state.phase_elapsed_seconds) / f64::from(threshold)).min(1.0)
        })
    }

    /// Fraction of the whole session behind the current set, in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn total_progress(&self) -> f64 {
        self.session.as_ref().map_or(0.0, |s| {
            let exercise = s.current();
            let within = f64::from(s.state.set_index - 1) / f64::from(exercise.set_count);
            (s.state.exercise_index as f64 + within) / s.exercises.len() as f64
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_exercises() -> Vec<SessionExercise> {
        vec![
            SessionExercise::timed("ex1", "Push Up", 2, 45, 30).with_energy_rate(8.0),
            SessionExercise::timed("ex2", "Squat", 1, 45, 30).with_energy_rate(7.0),
        ]
    }

    fn running_engine(exercises: Vec<SessionExercise>) -> WorkoutSessionEngine {
        let mut engine = WorkoutSessionEngine::new();
        engine.start(exercises).unwrap();
        assert!(engine.toggle_running());
        engine
    }

    fn tick_n(engine: &mut WorkoutSessionEngine, n: u32) {
        for _ in 0..n {
            engine.tick();
        }
    }

    #[test]
    fn test_start_initial_state() {
        let mut engine = WorkoutSessionEngine::new();
        engine.start(sample_exercises()).unwrap();

        let state = engine.snapshot().unwrap();
        assert_eq!(state.phase, Phase::Work);
        assert_eq!(state.set_index, 1);
        assert_eq!(state.exercise_index, 0);
        assert_eq!(state.phase_elapsed_seconds, 0);
        assert_eq!(state.total_elapsed_seconds, 0);
        assert!(!state.running);
        assert!(!state.completed);
    }

    #[test]
    fn test_start_empty_is_error() {
        let mut engine = WorkoutSessionEngine::new();
        assert_eq!(engine.start(Vec::new()), Err(SessionError::EmptySession));
        assert!(!engine.is_active());
        assert!(engine.snapshot().is_none());
    }

    #[test]
    fn test_tick_while_paused_is_noop() {
        let mut engine = WorkoutSessionEngine::new();
        engine.start(sample_exercises()).unwrap();

        assert_eq!(engine.tick(), TickOutcome::Idle);
        assert_eq!(engine.snapshot().unwrap().total_elapsed_seconds, 0);
    }

    #[test]
    fn test_uninitialized_operations_are_noops() {
        let mut engine = WorkoutSessionEngine::new();
        assert_eq!(engine.tick(), TickOutcome::Idle);
        assert!(!engine.toggle_running());
        assert!(!engine.advance_exercise());
        assert!(!engine.retreat_exercise());
        assert!(!engine.reset());
        assert_eq!(engine.estimate_energy_expended(), 0);
        assert_eq!(engine.finish(), Err(SessionError::NoActiveSession));
    }

    #[test]
    fn test_work_threshold_inclusive() {
        let mut engine = running_engine(sample_exercises());

        tick_n(&mut engine, 44);
        let state = engine.snapshot().unwrap();
        assert_eq!(state.phase, Phase::Work);
        assert_eq!(state.phase_elapsed_seconds, 44);

        assert_eq!(engine.tick(), TickOutcome::PhaseChanged(Phase::Rest));
        let state = engine.snapshot().unwrap();
        assert_eq!(state.phase, Phase::Rest);
        assert_eq!(state.phase_elapsed_seconds, 0);
        assert_eq!(state.total_elapsed_seconds, 45);
    }

    #[test]
    fn test_rep_based_exercise_uses_default_work() {
        let mut engine = running_engine(vec![SessionExercise::reps("ex1", "Push Up", 1, 12, 10)]);
        tick_n(&mut engine, 44);
        assert_eq!(engine.snapshot().unwrap().phase, Phase::Work);
        engine.tick();
        assert_eq!(engine.snapshot().unwrap().phase, Phase::Rest);
    }

    #[test]
    fn test_full_walkthrough() {
        let mut engine = running_engine(sample_exercises());

        tick_n(&mut engine, 45);
        let state = engine.snapshot().unwrap();
        assert_eq!((state.phase, state.set_index), (Phase::Rest, 1));
        assert_eq!(engine.phase_threshold(), Some(30));

        tick_n(&mut engine, 30);
        let state = engine.snapshot().unwrap();
        assert_eq!((state.phase, state.set_index), (Phase::Work, 2));

        tick_n(&mut engine, 45);
        let state = engine.snapshot().unwrap();
        assert_eq!((state.phase, state.set_index), (Phase::Rest, 2));
        assert_eq!(engine.phase_threshold(), Some(FINAL_REST_SECONDS));

        tick_n(&mut engine, 59);
        assert_eq!(engine.snapshot().unwrap().exercise_index, 0);
        engine.tick();
        let state = engine.snapshot().unwrap();
        assert_eq!(state.exercise_index, 1);
        assert_eq!(state.set_index, 1);
        assert_eq!(state.phase, Phase::Work);

        // 12 for the first exercise plus the second exercise's work in progress.
        assert_eq!(engine.estimate_energy_expended(), 17);

        tick_n(&mut engine, 45);
        assert_eq!(engine.snapshot().unwrap().phase, Phase::Rest);
        assert_eq!(engine.estimate_energy_expended(), 12);
    }

    #[test]
    fn test_single_set_moves_to_next_exercise_after_final_rest() {
        let exercises = vec![
            SessionExercise::timed("ex1", "Jumping Jacks", 1, 20, 15),
            SessionExercise::timed("ex2", "Burpees", 1, 20, 15),
        ];
        let mut engine = running_engine(exercises);

        tick_n(&mut engine, 20);
        assert_eq!(engine.phase_threshold(), Some(60));
        tick_n(&mut engine, 60);

        let state = engine.snapshot().unwrap();
        assert_eq!(state.exercise_index, 1);
        assert_eq!(state.set_index, 1);
        assert_eq!(state.phase, Phase::Work);
    }

    #[test]
    fn test_completion_stops_and_stays_stopped() {
        let mut engine = running_engine(vec![SessionExercise::timed("ex1", "Plank", 1, 10, 5)]);

        tick_n(&mut engine, 10);
        tick_n(&mut engine, 59);
        assert!(engine.snapshot().unwrap().running);
        assert_eq!(engine.tick(), TickOutcome::Completed);

        let done = engine.snapshot().unwrap();
        assert!(!done.running);
        assert!(done.completed);
        assert_eq!(done.phase, Phase::Rest);

        assert_eq!(engine.tick(), TickOutcome::Idle);
        assert_eq!(engine.snapshot().unwrap(), done);
    }

    #[test]
    fn test_pause_keeps_phase() {
        let mut engine = running_engine(sample_exercises());
        tick_n(&mut engine, 50);
        assert!(!engine.toggle_running());

        let paused = engine.snapshot().unwrap();
        tick_n(&mut engine, 10);
        assert_eq!(engine.snapshot().unwrap(), paused);
        assert!(!paused.completed);

        assert!(engine.toggle_running());
        engine.tick();
        assert_eq!(engine.snapshot().unwrap().phase_elapsed_seconds, 6);
    }

    #[test]
    fn test_advance_and_retreat_clamp() {
        let mut engine = running_engine(sample_exercises());
        tick_n(&mut engine, 50);

        assert!(!engine.retreat_exercise());
        assert!(engine.advance_exercise());
        let state = engine.snapshot().unwrap();
        assert_eq!(state.exercise_index, 1);
        assert_eq!(state.set_index, 1);
        assert_eq!(state.phase, Phase::Work);
        assert_eq!(state.phase_elapsed_seconds, 0);
        assert_eq!(state.total_elapsed_seconds, 50);
        assert!(state.running);

        assert!(!engine.advance_exercise());
        assert_eq!(engine.snapshot().unwrap().exercise_index, 1);

        assert!(engine.retreat_exercise());
        assert_eq!(engine.snapshot().unwrap().exercise_index, 0);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut engine = running_engine(sample_exercises());
        tick_n(&mut engine, 130);
        assert!(engine.reset());

        let state = engine.snapshot().unwrap();
        assert_eq!(state, SessionState::initial());
        assert_eq!(engine.exercises(), sample_exercises().as_slice());
    }

    #[test]
    fn test_energy_fallback_without_rates() {
        let exercises = vec![
            SessionExercise::timed("ex1", "Stretch", 3, 45, 30),
            SessionExercise::timed("ex2", "Walk", 1, 45, 30),
        ];
        let mut engine = running_engine(exercises);
        tick_n(&mut engine, 90);
        // 8 per minute over 90 seconds.
        assert_eq!(engine.estimate_energy_expended(), 12);
    }

    #[test]
    fn test_energy_counts_current_exercise_in_work_only() {
        let mut engine = running_engine(sample_exercises());
        // Work on the first exercise counts all of its sets.
        assert_eq!(engine.estimate_energy_expended(), 12);

        tick_n(&mut engine, 45);
        // Resting on the first exercise: nothing counted, fallback over 45s.
        assert_eq!(engine.estimate_energy_expended(), 6);
    }

    #[test]
    fn test_finish_tears_down() {
        let mut engine = running_engine(sample_exercises());
        tick_n(&mut engine, 45);

        let summary = engine.finish().unwrap();
        assert_eq!(summary.total_elapsed_seconds, 45);
        assert_eq!(summary.estimated_energy, 6);
        assert!(!engine.is_active());
        assert_eq!(engine.finish(), Err(SessionError::NoActiveSession));
    }

    #[test]
    fn test_summary_keeps_session() {
        let mut engine = WorkoutSessionEngine::new();
        assert_eq!(engine.summary(), Err(SessionError::NoActiveSession));

        engine.start(sample_exercises()).unwrap();
        engine.toggle_running();
        tick_n(&mut engine, 45);

        let summary = engine.summary().unwrap();
        assert_eq!(summary.total_elapsed_seconds, 45);
        assert!(engine.is_active());
        assert_eq!(engine.finish(), Ok(summary));
    }

    #[test]
    fn test_run_to_completion_matches_planned_length() {
        let mut engine = running_engine(sample_exercises());
        let planned = session_length_seconds(engine.exercises());
        // (2*45 + 30 + 60) + (45 + 60)
        assert_eq!(planned, 285);

        let mut ticks = 0;
        while engine.tick() != TickOutcome::Completed {
            ticks += 1;
            assert!(ticks < 1000);
        }
        assert_eq!(engine.snapshot().unwrap().total_elapsed_seconds, planned);
    }

    #[test]
    fn test_progress_views() {
        let mut engine = running_engine(sample_exercises());
        assert!(engine.total_progress().abs() < f64::EPSILON);

        tick_n(&mut engine, 15);
        assert!((engine.phase_progress() - 15.0 / 45.0).abs() < 1e-9);
        assert_eq!(engine.phase_remaining(), Some(30));

        tick_n(&mut engine, 30 + 30);
        // Set 2 of 2 on exercise 1 of 2.
        assert!((engine.total_progress() - 0.25).abs() < 1e-9);

        assert_eq!(engine.upcoming(3).len(), 1);
        assert_eq!(engine.upcoming(3)[0].name, "Squat");
        assert_eq!(engine.current_exercise().unwrap().name, "Push Up");
    }
}

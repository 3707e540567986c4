//! Application state for the workout timer screen.

use crate::core::{RoutineSource, WorkoutRecorder};
use crate::error::TempoError;
use crate::features::workout::{
    FinishedWorkout, Phase, TickOutcome, WorkoutController, WorkoutSessionEngine,
};
use crate::tui::event::Action;

/// How the timer screen ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkoutOutcome {
    /// The workout was finished and recorded.
    Finished(FinishedWorkout),
    /// The workout was dropped without recording.
    Abandoned,
}

/// Application state.
pub struct App<'a, S, R> {
    controller: &'a mut WorkoutController<S, R>,
    /// Name of the routine being run.
    pub routine_name: String,
    /// Status message to display.
    pub status: Option<String>,
    notes: Option<String>,
    outcome: Option<WorkoutOutcome>,
}

impl<'a, S: RoutineSource, R: WorkoutRecorder> App<'a, S, R> {
    /// Create the screen state for the controller's active workout.
    ///
    /// # Errors
    ///
    /// Returns `NoActiveSession` if the controller has no workout.
    pub fn new(
        controller: &'a mut WorkoutController<S, R>,
        notes: Option<String>,
    ) -> Result<Self, TempoError> {
        let routine_name = controller
            .active()
            .map(|active| active.routine.name.clone())
            .ok_or(crate::error::SessionError::NoActiveSession)?;

        Ok(Self {
            controller,
            routine_name,
            status: Some("Press space to start".to_string()),
            notes,
            outcome: None,
        })
    }

    /// The running session, if any.
    pub fn engine(&self) -> Option<&WorkoutSessionEngine> {
        self.controller.engine()
    }

    /// Deliver one timer tick.
    pub fn on_tick(&mut self) {
        let Some(engine) = self.controller.engine_mut() else {
            return;
        };

        match engine.tick() {
            TickOutcome::PhaseChanged(Phase::Rest) => {
                self.status = Some("Rest".to_string());
            },
            TickOutcome::PhaseChanged(Phase::Work) => {
                let name = engine
                    .current_exercise()
                    .map(|e| e.name.clone())
                    .unwrap_or_default();
                self.status = Some(format!("Go: {name}"));
            },
            TickOutcome::Completed => {
                self.status = Some("Routine complete, press f to save".to_string());
            },
            TickOutcome::Idle | TickOutcome::Counted => {},
        }
    }

    /// Apply a key action.
    ///
    /// A failed save keeps the workout on screen with the error in the
    /// status line.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Toggle => {
                if let Some(engine) = self.controller.engine_mut() {
                    let running = engine.toggle_running();
                    self.status = Some(if running { "Running" } else { "Paused" }.to_string());
                }
            },
            Action::Next => self.navigate(WorkoutSessionEngine::advance_exercise, "Last exercise"),
            Action::Previous => {
                self.navigate(WorkoutSessionEngine::retreat_exercise, "First exercise");
            },
            Action::Reset => {
                if self.controller.engine_mut().is_some_and(WorkoutSessionEngine::reset) {
                    self.status = Some("Workout reset".to_string());
                }
            },
            Action::Finish => match self.controller.finish(self.notes.clone()) {
                Ok(finished) => self.outcome = Some(WorkoutOutcome::Finished(finished)),
                Err(e) => self.status = Some(format!("Save failed ({e}), press f to retry")),
            },
            Action::Abandon => {
                self.controller.abandon();
                self.outcome = Some(WorkoutOutcome::Abandoned);
            },
        }
    }

    fn navigate(&mut self, step: fn(&mut WorkoutSessionEngine) -> bool, at_bound: &str) {
        let Some(engine) = self.controller.engine_mut() else {
            return;
        };
        if step(engine) {
            let name = engine
                .current_exercise()
                .map(|e| e.name.clone())
                .unwrap_or_default();
            self.status = Some(name);
        } else {
            self.status = Some(at_bound.to_string());
        }
    }

    /// How the screen ended, once it has.
    pub fn take_outcome(&mut self) -> Option<WorkoutOutcome> {
        self.outcome.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::routines::RoutineStorage;
    use crate::features::workout::WorkoutStorage;
    use crate::storage::Database;

    fn controller() -> WorkoutController<RoutineStorage, WorkoutStorage> {
        let mut routines = RoutineStorage::with_database(Database::open_in_memory().unwrap());
        routines.seed_builtin().unwrap();
        let workouts = WorkoutStorage::with_database(Database::open_in_memory().unwrap());
        let mut controller = WorkoutController::new(routines, workouts);
        controller.begin("full-body").unwrap();
        controller
    }

    #[test]
    fn test_new_requires_active_workout() {
        let routines = RoutineStorage::with_database(Database::open_in_memory().unwrap());
        let workouts = WorkoutStorage::with_database(Database::open_in_memory().unwrap());
        let mut controller = WorkoutController::new(routines, workouts);
        assert!(App::new(&mut controller, None).is_err());
    }

    #[test]
    fn test_toggle_and_tick() {
        let mut controller = controller();
        let mut app = App::new(&mut controller, None).unwrap();
        assert_eq!(app.routine_name, "Full Body Basics");

        app.on_tick();
        assert_eq!(app.engine().unwrap().snapshot().unwrap().total_elapsed_seconds, 0);

        app.apply(Action::Toggle);
        assert_eq!(app.status.as_deref(), Some("Running"));
        for _ in 0..45 {
            app.on_tick();
        }
        assert_eq!(app.status.as_deref(), Some("Rest"));
        assert_eq!(
            app.engine().unwrap().snapshot().unwrap().phase,
            Phase::Rest
        );
    }

    #[test]
    fn test_navigation_status() {
        let mut controller = controller();
        let mut app = App::new(&mut controller, None).unwrap();

        app.apply(Action::Previous);
        assert_eq!(app.status.as_deref(), Some("First exercise"));
        app.apply(Action::Next);
        assert_eq!(app.status.as_deref(), Some("Squat"));
        app.apply(Action::Next);
        assert_eq!(app.status.as_deref(), Some("Last exercise"));
    }

    #[test]
    fn test_finish_records() {
        let mut controller = controller();
        let mut app = App::new(&mut controller, Some("good".to_string())).unwrap();

        app.apply(Action::Toggle);
        for _ in 0..10 {
            app.on_tick();
        }
        app.apply(Action::Finish);

        match app.take_outcome() {
            Some(WorkoutOutcome::Finished(finished)) => {
                assert_eq!(finished.workout.summary.total_elapsed_seconds, 10);
                assert_eq!(finished.workout.notes.as_deref(), Some("good"));
            },
            other => panic!("unexpected outcome {other:?}"),
        }
        assert!(!controller.is_active());
    }

    #[test]
    fn test_reset_status() {
        let mut controller = controller();
        let mut app = App::new(&mut controller, None).unwrap();

        app.apply(Action::Next);
        app.apply(Action::Reset);
        assert_eq!(app.status.as_deref(), Some("Workout reset"));
        assert_eq!(app.engine().unwrap().snapshot().unwrap().exercise_index, 0);
    }

    #[test]
    fn test_failed_save_keeps_workout() {
        use crate::core::{MockRoutineSource, MockWorkoutRecorder};
        use crate::features::routines::{Difficulty, Routine};
        use crate::features::workout::SessionExercise;

        let mut source = MockRoutineSource::new();
        source.expect_routine().returning(|_| {
            Ok(Some(Routine {
                id: "quick".to_string(),
                name: "Quick".to_string(),
                description: String::new(),
                difficulty: Difficulty::Beginner,
                category: "cardio".to_string(),
                estimated_minutes: 1,
            }))
        });
        source
            .expect_session_exercises()
            .returning(|_| Ok(vec![SessionExercise::timed("jj", "Jumping Jacks", 1, 20, 0)]));
        let mut recorder = MockWorkoutRecorder::new();
        recorder
            .expect_record()
            .returning(|_| Err(TempoError::Database("disk full".to_string())));

        let mut controller = WorkoutController::new(source, recorder);
        controller.begin("quick").unwrap();
        let mut app = App::new(&mut controller, None).unwrap();
        app.apply(Action::Toggle);
        for _ in 0..5 {
            app.on_tick();
        }
        app.apply(Action::Finish);

        assert!(app.take_outcome().is_none());
        assert!(app.status.as_deref().unwrap().starts_with("Save failed"));
        assert_eq!(
            app.engine().unwrap().snapshot().unwrap().total_elapsed_seconds,
            5
        );
    }

    #[test]
    fn test_abandon() {
        let mut controller = controller();
        let mut app = App::new(&mut controller, None).unwrap();

        app.apply(Action::Abandon);
        assert_eq!(app.take_outcome(), Some(WorkoutOutcome::Abandoned));
        assert!(app.engine().is_none());
    }
}

//! Routine catalog.
//!
//! Routines are ordered lists of exercises with set, rep/duration and rest
//! targets. They are stored in `SQLite`, seeded with starter routines, and
//! can be imported from YAML files.

mod seed;
mod storage;
mod types;

pub use seed::builtin_routines;
pub use storage::{RoutineStorage, RoutineSummary};
pub use types::{Difficulty, Exercise, Routine, RoutineDefinition, RoutineExercise};

//! Routine catalog storage.

use std::path::Path;

use rusqlite::{params, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use super::seed::builtin_routines;
use super::types::{Difficulty, Exercise, Routine, RoutineDefinition, RoutineExercise};
use crate::core::RoutineSource;
use crate::error::TempoError;
use crate::features::workout::SessionExercise;
use crate::storage::Database;

/// A routine with its exercise count, for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineSummary {
    /// Routine metadata.
    #[serde(flatten)]
    pub routine: Routine,
    /// Number of exercise slots.
    pub exercise_count: u32,
}

/// Storage for the routine catalog.
pub struct RoutineStorage {
    db: Database,
}

impl RoutineStorage {
    /// Create storage with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Insert the starter routines if the catalog is empty.
    ///
    /// Returns the number of routines inserted.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub fn seed_builtin(&mut self) -> Result<usize, TempoError> {
        if self.count()? > 0 {
            return Ok(0);
        }
        let routines = builtin_routines();
        for routine in &routines {
            self.upsert_routine(routine)?;
        }
        tracing::info!(count = routines.len(), "seeded built-in routines");
        Ok(routines.len())
    }

    /// Import every `*.yaml`/`*.yml` file in `dir`.
    ///
    /// Files that fail to parse or validate are skipped with a warning.
    /// Returns the number of routines imported; a missing directory imports
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read or a write fails.
    pub fn import_dir(&mut self, dir: &Path) -> Result<usize, TempoError> {
        if !dir.is_dir() {
            return Ok(0);
        }

        let mut files: Vec<_> = std::fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension()
                    .is_some_and(|ext| ext == "yaml" || ext == "yml")
            })
            .collect();
        files.sort();

        let mut imported = 0;
        for path in files {
            match RoutineDefinition::from_yaml_file(&path) {
                Ok(definition) => {
                    self.upsert_routine(&definition)?;
                    imported += 1;
                },
                Err(e) => {
                    tracing::warn!(path = %path.display(), "skipping routine file: {e}");
                },
            }
        }

        if imported > 0 {
            tracing::info!(count = imported, dir = %dir.display(), "imported routine files");
        }
        Ok(imported)
    }

    /// Insert or replace a routine together with its exercises.
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails; nothing is written then.
    pub fn upsert_routine(&mut self, definition: &RoutineDefinition) -> Result<(), TempoError> {
        let tx = self
            .db
            .connection_mut()
            .transaction()
            .map_err(|e| TempoError::Database(format!("Failed to begin transaction: {e}")))?;

        let routine = &definition.routine;
        tx.execute(
            r"INSERT INTO routines (id, name, description, difficulty, category, estimated_minutes)
              VALUES (?1, ?2, ?3, ?4, ?5, ?6)
              ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                description = excluded.description,
                difficulty = excluded.difficulty,
                category = excluded.category,
                estimated_minutes = excluded.estimated_minutes",
            params![
                routine.id,
                routine.name,
                routine.description,
                routine.difficulty.as_str(),
                routine.category,
                routine.estimated_minutes,
            ],
        )
        .map_err(|e| TempoError::Database(format!("Failed to save routine: {e}")))?;

        tx.execute(
            "DELETE FROM routine_exercises WHERE routine_id = ?1",
            [&routine.id],
        )
        .map_err(|e| TempoError::Database(format!("Failed to clear routine exercises: {e}")))?;

        for slot in &definition.exercises {
            let exercise = &slot.exercise;
            let muscles = serde_json::to_string(&exercise.muscles_worked)?;
            tx.execute(
                r"INSERT INTO exercises
                  (id, name, description, category, difficulty, muscles_worked, calories_per_minute)
                  VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                  ON CONFLICT(id) DO UPDATE SET
                    name = excluded.name,
                    description = excluded.description,
                    category = excluded.category,
                    difficulty = excluded.difficulty,
                    muscles_worked = excluded.muscles_worked,
                    calories_per_minute = excluded.calories_per_minute",
                params![
                    exercise.id,
                    exercise.name,
                    exercise.description,
                    exercise.category,
                    exercise.difficulty.as_str(),
                    muscles,
                    exercise.calories_per_minute,
                ],
            )
            .map_err(|e| TempoError::Database(format!("Failed to save exercise: {e}")))?;

            tx.execute(
                r"INSERT INTO routine_exercises
                  (routine_id, exercise_id, order_index, sets, reps, duration_seconds, rest_seconds)
                  VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    routine.id,
                    exercise.id,
                    slot.order_index,
                    slot.sets,
                    slot.reps,
                    slot.duration_seconds,
                    slot.rest_seconds,
                ],
            )
            .map_err(|e| TempoError::Database(format!("Failed to save routine exercise: {e}")))?;
        }

        tx.commit()
            .map_err(|e| TempoError::Database(format!("Failed to commit routine: {e}")))?;

        tracing::debug!(routine = %routine.id, exercises = definition.exercises.len(), "routine saved");
        Ok(())
    }

    /// List all routines ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list(&self) -> Result<Vec<RoutineSummary>, TempoError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT r.id, r.name, r.description, r.difficulty, r.category, r.estimated_minutes,
                         (SELECT COUNT(*) FROM routine_exercises re WHERE re.routine_id = r.id)
                  FROM routines r
                  ORDER BY r.name",
            )
            .map_err(|e| TempoError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(RoutineSummary {
                    routine: row_to_routine(row)?,
                    exercise_count: row.get(6)?,
                })
            })
            .map_err(|e| TempoError::Database(format!("Failed to query routines: {e}")))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| TempoError::Database(e.to_string()))
    }

    /// Get a routine by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, id: &str) -> Result<Option<Routine>, TempoError> {
        self.db
            .connection()
            .query_row(
                r"SELECT id, name, description, difficulty, category, estimated_minutes
                  FROM routines WHERE id = ?1",
                [id],
                row_to_routine,
            )
            .optional()
            .map_err(|e| TempoError::Database(format!("Failed to query routine: {e}")))
    }

    /// Exercises of a routine in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn exercises(&self, routine_id: &str) -> Result<Vec<RoutineExercise>, TempoError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT e.id, e.name, e.description, e.category, e.difficulty,
                         e.muscles_worked, e.calories_per_minute,
                         re.order_index, re.sets, re.reps, re.duration_seconds, re.rest_seconds
                  FROM routine_exercises re
                  JOIN exercises e ON e.id = re.exercise_id
                  WHERE re.routine_id = ?1
                  ORDER BY re.order_index",
            )
            .map_err(|e| TempoError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([routine_id], row_to_routine_exercise)
            .map_err(|e| TempoError::Database(format!("Failed to query routine exercises: {e}")))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| TempoError::Database(e.to_string()))
    }

    /// A routine with its exercises.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub fn definition(&self, id: &str) -> Result<Option<RoutineDefinition>, TempoError> {
        let Some(routine) = self.get(id)? else {
            return Ok(None);
        };
        let exercises = self.exercises(id)?;
        Ok(Some(RoutineDefinition { routine, exercises }))
    }

    /// Delete a routine. Catalog exercises are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails.
    pub fn delete(&self, id: &str) -> Result<bool, TempoError> {
        let rows = self
            .db
            .connection()
            .execute("DELETE FROM routines WHERE id = ?1", [id])
            .map_err(|e| TempoError::Database(format!("Failed to delete routine: {e}")))?;

        Ok(rows > 0)
    }

    /// Number of routines in the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count(&self) -> Result<i64, TempoError> {
        self.db
            .connection()
            .query_row("SELECT COUNT(*) FROM routines", [], |row| row.get(0))
            .map_err(|e| TempoError::Database(format!("Failed to count routines: {e}")))
    }
}

impl RoutineSource for RoutineStorage {
    fn routine(&self, id: &str) -> Result<Option<Routine>, TempoError> {
        self.get(id)
    }

    fn session_exercises(&self, routine_id: &str) -> Result<Vec<SessionExercise>, TempoError> {
        Ok(self
            .exercises(routine_id)?
            .iter()
            .map(RoutineExercise::to_session_exercise)
            .collect())
    }
}

fn row_to_routine(row: &Row<'_>) -> Result<Routine, rusqlite::Error> {
    let difficulty: String = row.get(3)?;
    Ok(Routine {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        difficulty: Difficulty::parse(&difficulty),
        category: row.get(4)?,
        estimated_minutes: row.get(5)?,
    })
}

fn row_to_routine_exercise(row: &Row<'_>) -> Result<RoutineExercise, rusqlite::Error> {
    let difficulty: String = row.get(4)?;
    let muscles: String = row.get(5)?;
    let muscles_worked = serde_json::from_str(&muscles).unwrap_or_else(|e| {
        tracing::warn!("unreadable muscle list {muscles:?}: {e}");
        Vec::new()
    });

    Ok(RoutineExercise {
        exercise: Exercise {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            category: row.get(3)?,
            difficulty: Difficulty::parse(&difficulty),
            muscles_worked,
            calories_per_minute: row.get(6)?,
        },
        order_index: row.get(7)?,
        sets: row.get(8)?,
        reps: row.get(9)?,
        duration_seconds: row.get(10)?,
        rest_seconds: row.get(11)?,
    })
}

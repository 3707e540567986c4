//! Workout log storage.

use chrono::{DateTime, Local, NaiveDate};
use rusqlite::{params, OptionalExtension, Row};

use super::record::{CompletedWorkout, WorkoutRecord};
use crate::core::WorkoutRecorder;
use crate::error::TempoError;
use crate::storage::Database;

const SELECT_COLUMNS: &str = r"
    SELECT id, routine_id, routine_name, tracking_date, started_at, ended_at,
           duration_seconds, duration_minutes, calories_burned, completed, notes
    FROM workouts";

/// Storage for the workout log.
pub struct WorkoutStorage {
    db: Database,
}

impl WorkoutStorage {
    /// Create storage with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Store a finished workout and return its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn record(&self, workout: &CompletedWorkout) -> Result<i64, TempoError> {
        let conn = self.db.connection();

        conn.execute(
            r"INSERT INTO workouts
              (routine_id, routine_name, tracking_date, started_at, ended_at,
               duration_seconds, duration_minutes, calories_burned, completed, notes)
              VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 1, ?9)",
            params![
                workout.routine_id,
                workout.routine_name,
                workout.tracking_date().format("%Y-%m-%d").to_string(),
                workout.started_at.to_rfc3339(),
                workout.ended_at.to_rfc3339(),
                to_sql_int(workout.summary.total_elapsed_seconds)?,
                to_sql_int(workout.duration_minutes())?,
                workout.summary.estimated_energy,
                workout.notes,
            ],
        )
        .map_err(|e| TempoError::Database(format!("Failed to record workout: {e}")))?;

        let id = conn.last_insert_rowid();
        tracing::info!(
            id,
            routine = %workout.routine_id,
            seconds = workout.summary.total_elapsed_seconds,
            calories = workout.summary.estimated_energy,
            "workout recorded"
        );
        Ok(id)
    }

    /// Get a workout by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, id: i64) -> Result<Option<WorkoutRecord>, TempoError> {
        self.db
            .connection()
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE id = ?1"),
                [id],
                row_to_record,
            )
            .optional()
            .map_err(|e| TempoError::Database(format!("Failed to query workout: {e}")))
    }

    /// The most recent workouts, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn recent(&self, limit: usize) -> Result<Vec<WorkoutRecord>, TempoError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        self.query(
            &format!("{SELECT_COLUMNS} ORDER BY started_at DESC, id DESC LIMIT ?1"),
            params![limit],
        )
    }

    /// Workouts tracked on a date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn on_date(&self, date: NaiveDate) -> Result<Vec<WorkoutRecord>, TempoError> {
        self.between(date, date)
    }

    /// Workouts tracked between two dates, inclusive.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<WorkoutRecord>, TempoError> {
        self.query(
            &format!(
                "{SELECT_COLUMNS} WHERE tracking_date >= ?1 AND tracking_date <= ?2 \
                 ORDER BY started_at, id"
            ),
            params![
                start.format("%Y-%m-%d").to_string(),
                end.format("%Y-%m-%d").to_string()
            ],
        )
    }

    /// Delete a workout.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails.
    pub fn delete(&self, id: i64) -> Result<bool, TempoError> {
        let rows = self
            .db
            .connection()
            .execute("DELETE FROM workouts WHERE id = ?1", [id])
            .map_err(|e| TempoError::Database(format!("Failed to delete workout: {e}")))?;

        Ok(rows > 0)
    }

    fn query(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<WorkoutRecord>, TempoError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| TempoError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map(params, row_to_record)
            .map_err(|e| TempoError::Database(format!("Failed to query workouts: {e}")))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| TempoError::Database(e.to_string()))
    }
}

impl WorkoutRecorder for WorkoutStorage {
    fn record(&self, workout: &CompletedWorkout) -> Result<i64, TempoError> {
        Self::record(self, workout)
    }
}

fn to_sql_int(value: u64) -> Result<i64, TempoError> {
    i64::try_from(value)
        .map_err(|_| TempoError::InvalidInput(format!("value {value} is too large to store")))
}

fn conversion_error(
    column: usize,
    e: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
}

fn parse_timestamp(row: &Row<'_>, column: usize) -> Result<DateTime<Local>, rusqlite::Error> {
    let raw: String = row.get(column)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|e| conversion_error(column, e))
}

fn row_to_record(row: &Row<'_>) -> Result<WorkoutRecord, rusqlite::Error> {
    let tracking_date: String = row.get(3)?;
    let tracking_date = NaiveDate::parse_from_str(&tracking_date, "%Y-%m-%d")
        .map_err(|e| conversion_error(3, e))?;
    let duration_seconds: i64 = row.get(6)?;
    let duration_minutes: i64 = row.get(7)?;

    Ok(WorkoutRecord {
        id: row.get(0)?,
        routine_id: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        routine_name: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        tracking_date,
        started_at: parse_timestamp(row, 4)?,
        ended_at: parse_timestamp(row, 5)?,
        duration_seconds: u64::try_from(duration_seconds).unwrap_or_default(),
        duration_minutes: u64::try_from(duration_minutes).unwrap_or_default(),
        calories_burned: row.get(8)?,
        completed: row.get(9)?,
        notes: row.get(10)?,
    })
}

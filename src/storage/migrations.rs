//! Database migrations for tempo.
//!
//! Each migration upgrades the schema by one version and runs when the
//! database is opened.

use rusqlite::Connection;

use crate::error::TempoError;

/// Current schema version.
const CURRENT_VERSION: i32 = 3;

/// Get the current schema version from the database.
///
/// Returns 0 for a new database.
///
/// # Errors
///
/// Returns an error if the pragma cannot be read.
pub fn get_version(conn: &Connection) -> Result<i32, TempoError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| TempoError::Database(format!("Failed to get schema version: {e}")))
}

fn set_version(conn: &Connection, version: i32) -> Result<(), TempoError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| TempoError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
///
/// # Errors
///
/// Returns an error if any migration fails.
pub fn run(conn: &Connection) -> Result<(), TempoError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        tracing::debug!(version, "running schema migration");
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

fn run_migration(conn: &Connection, version: i32) -> Result<(), TempoError> {
    match version {
        1 => migrate_v1(conn),
        2 => migrate_v2(conn),
        3 => migrate_v3(conn),
        _ => Err(TempoError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: routine catalog.
fn migrate_v1(conn: &Connection) -> Result<(), TempoError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS exercises (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            category TEXT NOT NULL DEFAULT '',
            difficulty TEXT NOT NULL DEFAULT 'beginner',
            muscles_worked TEXT NOT NULL DEFAULT '[]',
            calories_per_minute REAL
        );

        CREATE TABLE IF NOT EXISTS routines (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            difficulty TEXT NOT NULL DEFAULT 'beginner',
            category TEXT NOT NULL DEFAULT '',
            estimated_minutes INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS routine_exercises (
            routine_id TEXT NOT NULL REFERENCES routines(id) ON DELETE CASCADE,
            exercise_id TEXT NOT NULL REFERENCES exercises(id),
            order_index INTEGER NOT NULL,
            sets INTEGER NOT NULL CHECK (sets >= 1),
            reps INTEGER,
            duration_seconds INTEGER,
            rest_seconds INTEGER NOT NULL DEFAULT 0,
            PRIMARY KEY (routine_id, order_index)
        );
        ",
    )
    .map_err(|e| TempoError::Database(format!("Migration v1 failed: {e}")))
}

/// Migration v2: workout log.
fn migrate_v2(conn: &Connection) -> Result<(), TempoError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS workouts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            routine_id TEXT,
            routine_name TEXT,
            tracking_date TEXT NOT NULL,
            started_at TEXT NOT NULL,
            ended_at TEXT NOT NULL,
            duration_seconds INTEGER NOT NULL,
            duration_minutes INTEGER NOT NULL,
            calories_burned INTEGER NOT NULL,
            completed INTEGER NOT NULL DEFAULT 1,
            notes TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_workouts_date
        ON workouts(tracking_date);
        ",
    )
    .map_err(|e| TempoError::Database(format!("Migration v2 failed: {e}")))
}

/// Migration v3: water and meal logs.
fn migrate_v3(conn: &Connection) -> Result<(), TempoError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS water_intake (
            tracking_date TEXT PRIMARY KEY,
            amount_ml INTEGER NOT NULL DEFAULT 0 CHECK (amount_ml >= 0),
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS meals (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            tracking_date TEXT NOT NULL,
            name TEXT NOT NULL,
            meal_type TEXT NOT NULL DEFAULT 'snack',
            calories INTEGER NOT NULL DEFAULT 0,
            protein INTEGER NOT NULL DEFAULT 0,
            carbs INTEGER NOT NULL DEFAULT 0,
            fats INTEGER NOT NULL DEFAULT 0,
            logged_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_meals_date
        ON meals(tracking_date);
        ",
    )
    .map_err(|e| TempoError::Database(format!("Migration v3 failed: {e}")))
}

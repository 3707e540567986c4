//! JSON output formatting for tempo.

use serde::Serialize;
use serde_json::json;

use crate::error::TempoError;
use crate::features::routines::RoutineSummary;
use crate::features::workout::{SessionSummary, WorkoutRecord};

/// Format the routine catalog as JSON
///
/// # Errors
///
/// Returns `TempoError::Parse` if JSON serialization fails.
pub fn format_routines_json(routines: &[RoutineSummary]) -> Result<String, TempoError> {
    let output = json!({
        "count": routines.len(),
        "items": routines
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format workout log entries as JSON
///
/// # Errors
///
/// Returns `TempoError::Parse` if JSON serialization fails.
pub fn format_workouts_json(workouts: &[WorkoutRecord], title: &str) -> Result<String, TempoError> {
    let output = json!({
        "list": title,
        "count": workouts.len(),
        "items": workouts
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the result of a session as JSON
///
/// # Errors
///
/// Returns `TempoError::Parse` if JSON serialization fails.
pub fn format_session_summary_json(
    routine_name: &str,
    summary: &SessionSummary,
    record_id: Option<i64>,
) -> Result<String, TempoError> {
    let output = json!({
        "routine": routine_name,
        "total_elapsed_seconds": summary.total_elapsed_seconds,
        "estimated_energy": summary.estimated_energy,
        "record_id": record_id
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `TempoError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TempoError> {
    Ok(serde_json::to_string_pretty(value)?)
}

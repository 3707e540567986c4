//! Daily water log.
//!
//! One row per day holding the running total in milliliters.

use chrono::{Local, NaiveDate};
use rusqlite::{params, OptionalExtension};
use serde::Serialize;

use super::percent;
use crate::core::week_bounds;
use crate::error::TempoError;
use crate::storage::Database;

/// Water logged on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WaterEntry {
    /// Day the water was drunk.
    pub tracking_date: NaiveDate,
    /// Total milliliters.
    pub amount_ml: u32,
}

/// One day of water against the daily target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterDay {
    /// Day.
    pub tracking_date: NaiveDate,
    /// Total milliliters.
    pub amount_ml: u32,
    /// Daily target, when the profile has a weight.
    pub goal_ml: Option<u32>,
    /// Amount as a percentage of the target.
    pub percent: Option<f64>,
}

impl WaterDay {
    /// Measure `amount_ml` against an optional target.
    #[must_use]
    pub fn new(tracking_date: NaiveDate, amount_ml: u32, goal_ml: Option<u32>) -> Self {
        Self {
            tracking_date,
            amount_ml,
            goal_ml,
            percent: goal_ml.map(|goal| percent(u64::from(amount_ml), u64::from(goal))),
        }
    }
}

/// Seven days of water, Monday first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterWeek {
    /// Monday of the week.
    pub week_start: NaiveDate,
    /// Sunday of the week.
    pub week_end: NaiveDate,
    /// Every day of the week, zero where nothing was logged.
    pub days: Vec<WaterDay>,
    /// Milliliters across the week.
    pub total_ml: u64,
    /// Days that reached the target.
    pub days_on_target: u32,
}

impl WaterWeek {
    /// Lay out the week containing `date` from the stored entries.
    #[must_use]
    pub fn build(date: NaiveDate, entries: &[WaterEntry], goal_ml: Option<u32>) -> Self {
        let (week_start, week_end) = week_bounds(date);

        let days: Vec<WaterDay> = week_start
            .iter_days()
            .take(7)
            .map(|day| {
                let amount = entries
                    .iter()
                    .filter(|e| e.tracking_date == day)
                    .map(|e| e.amount_ml)
                    .sum();
                WaterDay::new(day, amount, goal_ml)
            })
            .collect();

        let total_ml = days.iter().map(|d| u64::from(d.amount_ml)).sum();
        let days_on_target = goal_ml.map_or(0, |goal| {
            let reached = days.iter().filter(|d| goal > 0 && d.amount_ml >= goal).count();
            u32::try_from(reached).unwrap_or(u32::MAX)
        });

        Self {
            week_start,
            week_end,
            days,
            total_ml,
            days_on_target,
        }
    }
}

/// Storage for the water log.
pub struct WaterStorage {
    db: Database,
}

impl WaterStorage {
    /// Create storage with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Milliliters logged on a date, zero when nothing was logged.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn amount_on(&self, date: NaiveDate) -> Result<u32, TempoError> {
        let amount: Option<u32> = self
            .db
            .connection()
            .query_row(
                "SELECT amount_ml FROM water_intake WHERE tracking_date = ?1",
                [date.format("%Y-%m-%d").to_string()],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| TempoError::Database(format!("Failed to query water intake: {e}")))?;

        Ok(amount.unwrap_or(0))
    }

    /// Replace the total for a date. Returns the stored amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn set(&self, date: NaiveDate, amount_ml: u32) -> Result<u32, TempoError> {
        self.db
            .connection()
            .execute(
                r"INSERT INTO water_intake (tracking_date, amount_ml, updated_at)
                  VALUES (?1, ?2, ?3)
                  ON CONFLICT(tracking_date) DO UPDATE SET
                      amount_ml = excluded.amount_ml,
                      updated_at = excluded.updated_at",
                params![
                    date.format("%Y-%m-%d").to_string(),
                    amount_ml,
                    Local::now().to_rfc3339(),
                ],
            )
            .map_err(|e| TempoError::Database(format!("Failed to update water intake: {e}")))?;

        tracing::info!(%date, amount_ml, "water intake updated");
        Ok(amount_ml)
    }

    /// Add `delta_ml` (negative to remove) to a date's total, stopping at
    /// zero. Returns the new total.
    ///
    /// # Errors
    ///
    /// Returns an error if the read or write fails.
    pub fn adjust(&self, date: NaiveDate, delta_ml: i64) -> Result<u32, TempoError> {
        let current = i64::from(self.amount_on(date)?);
        let amount = u32::try_from((current + delta_ml).max(0)).map_err(|_| {
            TempoError::InvalidInput(format!("water total {} ml is too large", current + delta_ml))
        })?;
        self.set(date, amount)
    }

    /// Logged days between two dates, inclusive.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<WaterEntry>, TempoError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT tracking_date, amount_ml FROM water_intake
                  WHERE tracking_date >= ?1 AND tracking_date <= ?2
                  ORDER BY tracking_date",
            )
            .map_err(|e| TempoError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map(
                params![
                    start.format("%Y-%m-%d").to_string(),
                    end.format("%Y-%m-%d").to_string()
                ],
                |row| {
                    let raw: String = row.get(0)?;
                    let tracking_date =
                        NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|e| {
                            rusqlite::Error::FromSqlConversionFailure(
                                0,
                                rusqlite::types::Type::Text,
                                Box::new(e),
                            )
                        })?;
                    Ok(WaterEntry {
                        tracking_date,
                        amount_ml: row.get(1)?,
                    })
                },
            )
            .map_err(|e| TempoError::Database(format!("Failed to query water intake: {e}")))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| TempoError::Database(e.to_string()))
    }
}

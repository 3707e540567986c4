//! Daily meal log.

use chrono::{DateTime, Local, NaiveDate};
use clap::ValueEnum;
use rusqlite::{params, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use super::percent;
use crate::core::week_bounds;
use crate::error::TempoError;
use crate::features::goals::{Macros, NutritionPlan};
use crate::storage::Database;

const SELECT_COLUMNS: &str = r"
    SELECT id, tracking_date, name, meal_type, calories, protein, carbs, fats, logged_at
    FROM meals";

/// When in the day a meal was eaten.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    /// Breakfast.
    Breakfast,
    /// Lunch.
    Lunch,
    /// Dinner.
    Dinner,
    /// Anything in between.
    #[default]
    Snack,
}

impl MealType {
    /// Database representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }

    /// Parse the database representation, defaulting to snack.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            _ => Self::Snack,
        }
    }
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A meal to log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMeal {
    /// What was eaten.
    pub name: String,
    /// Meal slot.
    pub meal_type: MealType,
    /// Energy in kcal.
    pub calories: u32,
    /// Protein grams.
    pub protein: u32,
    /// Carbohydrate grams.
    pub carbs: u32,
    /// Fat grams.
    pub fats: u32,
}

/// A logged meal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealEntry {
    /// Log ID.
    pub id: i64,
    /// Day the meal counts towards.
    pub tracking_date: NaiveDate,
    /// What was eaten.
    pub name: String,
    /// Meal slot.
    pub meal_type: MealType,
    /// Energy in kcal.
    pub calories: u32,
    /// Protein grams.
    pub protein: u32,
    /// Carbohydrate grams.
    pub carbs: u32,
    /// Fat grams.
    pub fats: u32,
    /// When it was logged.
    pub logged_at: DateTime<Local>,
}

/// Summed energy and macros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MealTotals {
    /// Energy in kcal.
    pub calories: u64,
    /// Protein grams.
    pub protein: u64,
    /// Carbohydrate grams.
    pub carbs: u64,
    /// Fat grams.
    pub fats: u64,
}

impl MealTotals {
    /// Sum a set of meals.
    #[must_use]
    pub fn of<'a>(meals: impl IntoIterator<Item = &'a MealEntry>) -> Self {
        meals.into_iter().fold(Self::default(), |t, m| Self {
            calories: t.calories + u64::from(m.calories),
            protein: t.protein + u64::from(m.protein),
            carbs: t.carbs + u64::from(m.carbs),
            fats: t.fats + u64::from(m.fats),
        })
    }
}

/// Daily targets a day of meals is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MealTargets {
    /// Energy in kcal.
    pub calories: u64,
    /// Macro split in grams.
    pub macros: Macros,
}

impl From<&NutritionPlan> for MealTargets {
    fn from(plan: &NutritionPlan) -> Self {
        Self {
            calories: u64::try_from(plan.calories).unwrap_or(0),
            macros: plan.macros,
        }
    }
}

/// One day of meals with totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealDay {
    /// Day.
    pub tracking_date: NaiveDate,
    /// Meals in the order they were logged.
    pub meals: Vec<MealEntry>,
    /// Sum over `meals`.
    pub totals: MealTotals,
    /// Targets, when the profile is complete.
    pub targets: Option<MealTargets>,
    /// Calories as a percentage of the target.
    pub calories_percent: Option<f64>,
}

impl MealDay {
    /// Total the meals of `tracking_date`.
    ///
    /// Meals logged for other days are ignored.
    #[must_use]
    pub fn build(
        tracking_date: NaiveDate,
        meals: &[MealEntry],
        targets: Option<MealTargets>,
    ) -> Self {
        let meals: Vec<MealEntry> = meals
            .iter()
            .filter(|m| m.tracking_date == tracking_date)
            .cloned()
            .collect();
        let totals = MealTotals::of(&meals);

        Self {
            tracking_date,
            meals,
            totals,
            targets,
            calories_percent: targets.map(|t| percent(totals.calories, t.calories)),
        }
    }
}

/// Per-day totals for one week, Monday first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealWeek {
    /// Monday of the week.
    pub week_start: NaiveDate,
    /// Sunday of the week.
    pub week_end: NaiveDate,
    /// Every day of the week, empty where nothing was logged.
    pub days: Vec<MealDay>,
    /// Sum across the week.
    pub totals: MealTotals,
}

impl MealWeek {
    /// Lay out the week containing `date`.
    #[must_use]
    pub fn build(date: NaiveDate, meals: &[MealEntry], targets: Option<MealTargets>) -> Self {
        let (week_start, week_end) = week_bounds(date);
        let days: Vec<MealDay> = week_start
            .iter_days()
            .take(7)
            .map(|day| MealDay::build(day, meals, targets))
            .collect();
        let totals = MealTotals::of(days.iter().flat_map(|d| &d.meals));

        Self {
            week_start,
            week_end,
            days,
            totals,
        }
    }
}

/// Storage for the meal log.
pub struct MealStorage {
    db: Database,
}

impl MealStorage {
    /// Create storage with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Log a meal for a date and return its ID.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank name, or an error if the insert
    /// fails.
    pub fn add(&self, date: NaiveDate, meal: &NewMeal) -> Result<i64, TempoError> {
        let name = meal.name.trim();
        if name.is_empty() {
            return Err(TempoError::InvalidInput(
                "meal name cannot be empty".to_string(),
            ));
        }

        let conn = self.db.connection();
        conn.execute(
            r"INSERT INTO meals
              (tracking_date, name, meal_type, calories, protein, carbs, fats, logged_at)
              VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                date.format("%Y-%m-%d").to_string(),
                name,
                meal.meal_type.as_str(),
                meal.calories,
                meal.protein,
                meal.carbs,
                meal.fats,
                Local::now().to_rfc3339(),
            ],
        )
        .map_err(|e| TempoError::Database(format!("Failed to log meal: {e}")))?;

        let id = conn.last_insert_rowid();
        tracing::info!(id, %date, calories = meal.calories, "meal logged");
        Ok(id)
    }

    /// Get a meal by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, id: i64) -> Result<Option<MealEntry>, TempoError> {
        self.db
            .connection()
            .query_row(&format!("{SELECT_COLUMNS} WHERE id = ?1"), [id], row_to_meal)
            .optional()
            .map_err(|e| TempoError::Database(format!("Failed to query meal: {e}")))
    }

    /// Meals logged for a date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn on_date(&self, date: NaiveDate) -> Result<Vec<MealEntry>, TempoError> {
        self.between(date, date)
    }

    /// Meals logged between two dates, inclusive.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<MealEntry>, TempoError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(&format!(
                "{SELECT_COLUMNS} WHERE tracking_date >= ?1 AND tracking_date <= ?2 \
                 ORDER BY tracking_date, id"
            ))
            .map_err(|e| TempoError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map(
                params![
                    start.format("%Y-%m-%d").to_string(),
                    end.format("%Y-%m-%d").to_string()
                ],
                row_to_meal,
            )
            .map_err(|e| TempoError::Database(format!("Failed to query meals: {e}")))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| TempoError::Database(e.to_string()))
    }

    /// Delete a meal.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails.
    pub fn delete(&self, id: i64) -> Result<bool, TempoError> {
        let rows = self
            .db
            .connection()
            .execute("DELETE FROM meals WHERE id = ?1", [id])
            .map_err(|e| TempoError::Database(format!("Failed to delete meal: {e}")))?;

        Ok(rows > 0)
    }
}

fn conversion_error(
    column: usize,
    e: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
}

fn row_to_meal(row: &Row<'_>) -> Result<MealEntry, rusqlite::Error> {
    let tracking_date: String = row.get(1)?;
    let tracking_date = NaiveDate::parse_from_str(&tracking_date, "%Y-%m-%d")
        .map_err(|e| conversion_error(1, e))?;
    let meal_type: String = row.get(3)?;
    let logged_at: String = row.get(8)?;
    let logged_at = DateTime::parse_from_rfc3339(&logged_at)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|e| conversion_error(8, e))?;

    Ok(MealEntry {
        id: row.get(0)?,
        tracking_date,
        name: row.get(2)?,
        meal_type: MealType::parse(&meal_type),
        calories: row.get(4)?,
        protein: row.get(5)?,
        carbs: row.get(6)?,
        fats: row.get(7)?,
        logged_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_storage() -> MealStorage {
        MealStorage::with_database(Database::open_in_memory().unwrap())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn meal(name: &str, calories: u32) -> NewMeal {
        NewMeal {
            name: name.to_string(),
            meal_type: MealType::Lunch,
            calories,
            protein: 20,
            carbs: 40,
            fats: 10,
        }
    }

    fn entry(id: i64, day: NaiveDate, calories: u32) -> MealEntry {
        MealEntry {
            id,
            tracking_date: day,
            name: format!("meal {id}"),
            meal_type: MealType::Snack,
            calories,
            protein: 10,
            carbs: 30,
            fats: 5,
            logged_at: Local::now(),
        }
    }

    #[test]
    fn test_add_and_get() {
        let storage = create_test_storage();
        let id = storage.add(date(2024, 3, 13), &meal("  Chicken salad ", 450)).unwrap();

        let stored = storage.get(id).unwrap().unwrap();
        assert_eq!(stored.name, "Chicken salad");
        assert_eq!(stored.meal_type, MealType::Lunch);
        assert_eq!(stored.tracking_date, date(2024, 3, 13));
        assert_eq!(stored.calories, 450);
        assert_eq!(stored.fats, 10);
    }

    #[test]
    fn test_blank_name_rejected() {
        let storage = create_test_storage();
        let err = storage.add(date(2024, 3, 13), &meal("   ", 100)).unwrap_err();
        assert!(matches!(err, TempoError::InvalidInput(_)));
    }

    #[test]
    fn test_on_date_and_delete() {
        let storage = create_test_storage();
        let first = storage.add(date(2024, 3, 13), &meal("Oatmeal", 350)).unwrap();
        storage.add(date(2024, 3, 13), &meal("Pasta", 700)).unwrap();
        storage.add(date(2024, 3, 14), &meal("Soup", 300)).unwrap();

        let day = storage.on_date(date(2024, 3, 13)).unwrap();
        assert_eq!(day.len(), 2);
        assert_eq!(day[0].name, "Oatmeal");

        assert!(storage.delete(first).unwrap());
        assert!(!storage.delete(first).unwrap());
        assert_eq!(storage.on_date(date(2024, 3, 13)).unwrap().len(), 1);
    }

    #[test]
    fn test_meal_type_round_trip() {
        for meal_type in [
            MealType::Breakfast,
            MealType::Lunch,
            MealType::Dinner,
            MealType::Snack,
        ] {
            assert_eq!(MealType::parse(meal_type.as_str()), meal_type);
        }
        assert_eq!(MealType::parse("brunch"), MealType::Snack);
    }

    #[test]
    fn test_meal_day_totals_against_targets() {
        let day = date(2024, 3, 13);
        let meals = [
            entry(1, day, 500),
            entry(2, day, 750),
            entry(3, date(2024, 3, 12), 900),
        ];
        let targets = MealTargets {
            calories: 2500,
            macros: Macros {
                protein: 94,
                carbs: 328,
                fats: 90,
            },
        };

        let summary = MealDay::build(day, &meals, Some(targets));
        assert_eq!(summary.meals.len(), 2);
        assert_eq!(summary.totals.calories, 1250);
        assert_eq!(summary.totals.protein, 20);
        assert!((summary.calories_percent.unwrap() - 50.0).abs() < 1e-9);

        let untargeted = MealDay::build(day, &meals, None);
        assert!(untargeted.calories_percent.is_none());
    }

    #[test]
    fn test_meal_week() {
        let meals = [
            entry(1, date(2024, 3, 11), 500),
            entry(2, date(2024, 3, 17), 600),
            entry(3, date(2024, 3, 18), 900),
        ];

        let week = MealWeek::build(date(2024, 3, 13), &meals, None);
        assert_eq!(week.days.len(), 7);
        assert_eq!(week.days[0].totals.calories, 500);
        assert_eq!(week.days[3].totals.calories, 0);
        assert_eq!(week.totals.calories, 1100);
    }
}

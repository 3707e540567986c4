//! Command implementations for tempo.
//!
//! Every command returns the text to print, already formatted for the
//! requested output format.

mod completions;
mod goals;
mod meal;
mod routine;
mod water;
mod workout;

pub use completions::completions;
pub use goals::goals;
pub use meal::meal;
pub use routine::routine;
pub use water::water;
pub use workout::workout;

use chrono::{Local, NaiveDate};

use crate::cli::args::{OutputFormat, ProfileOverrides};
use crate::config::{Config, Paths};
use crate::core::parse_date;
use crate::error::TempoError;
use crate::features::goals::Profile;
use crate::features::intake::{MealStorage, WaterStorage};
use crate::features::routines::RoutineStorage;
use crate::features::workout::WorkoutStorage;
use crate::storage::Database;

/// Settings and locations shared by all commands.
pub struct Context {
    /// Loaded configuration.
    pub config: Config,
    /// Data locations.
    pub paths: Paths,
    /// Output format for this invocation.
    pub format: OutputFormat,
}

impl Context {
    /// Create a context.
    #[must_use]
    pub const fn new(config: Config, paths: Paths, format: OutputFormat) -> Self {
        Self {
            config,
            paths,
            format,
        }
    }

    fn open_database(&self) -> Result<Database, TempoError> {
        self.paths.ensure_dirs()?;
        Database::open_at(&self.paths.database)
    }

    /// Open the routine catalog, seeding it and importing drop-in files.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or written.
    pub fn open_routines(&self) -> Result<RoutineStorage, TempoError> {
        let mut storage = RoutineStorage::with_database(self.open_database()?);
        if self.config.workout.seed_builtin_routines {
            storage.seed_builtin()?;
        }
        storage.import_dir(&self.paths.routines)?;
        Ok(storage)
    }

    /// Open the workout log.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open_workouts(&self) -> Result<WorkoutStorage, TempoError> {
        Ok(WorkoutStorage::with_database(self.open_database()?))
    }

    /// Open the water log.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open_water(&self) -> Result<WaterStorage, TempoError> {
        Ok(WaterStorage::with_database(self.open_database()?))
    }

    /// Open the meal log.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open_meals(&self) -> Result<MealStorage, TempoError> {
        Ok(MealStorage::with_database(self.open_database()?))
    }

    /// The configured profile with per-invocation overrides applied.
    #[must_use]
    pub fn profile(&self, overrides: &ProfileOverrides) -> Profile {
        let mut profile = self.config.profile.clone();
        if let Some(activity) = overrides.activity {
            profile.activity_level = activity;
        }
        if let Some(goal) = overrides.goal {
            profile.goal = goal;
        }
        profile
    }
}

/// Resolve an optional date argument, defaulting to today.
fn resolve_date(input: Option<&str>) -> Result<NaiveDate, TempoError> {
    match input {
        None => Ok(Local::now().date_naive()),
        Some(s) => parse_date(s).ok_or_else(|| {
            TempoError::InvalidInput(format!(
                "cannot understand date '{s}' (try today, yesterday, '3 days ago' or YYYY-MM-DD)"
            ))
        }),
    }
}

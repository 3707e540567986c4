//! Routine and exercise types.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TempoError;
use crate::features::workout::{session_length_seconds, ExerciseTarget, SessionExercise};

/// Exercise difficulty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Suitable for newcomers.
    #[default]
    Beginner,
    /// Some experience needed.
    Intermediate,
    /// Demanding.
    Advanced,
}

impl Difficulty {
    /// Database representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Parse the database representation, defaulting to beginner.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            _ => Self::Beginner,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Category such as "strength" or "core".
    #[serde(default)]
    pub category: String,
    /// Difficulty.
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Muscle groups worked.
    #[serde(default)]
    pub muscles_worked: Vec<String>,
    /// Energy cost per minute of work.
    #[serde(default)]
    pub calories_per_minute: Option<f64>,
}

/// A named workout routine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Difficulty.
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Category such as "strength".
    #[serde(default)]
    pub category: String,
    /// Estimated length in minutes; computed on import when zero.
    #[serde(default)]
    pub estimated_minutes: u32,
}

/// One exercise slot in a routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineExercise {
    /// The exercise performed.
    pub exercise: Exercise,
    /// Position within the routine; assigned from list order on import.
    #[serde(default)]
    pub order_index: u32,
    /// Number of sets.
    pub sets: u32,
    /// Target reps per set.
    #[serde(default)]
    pub reps: Option<u32>,
    /// Work interval per set.
    #[serde(default)]
    pub duration_seconds: Option<u32>,
    /// Rest between sets.
    #[serde(default)]
    pub rest_seconds: u32,
}

impl RoutineExercise {
    /// Map to the engine's session slot.
    #[must_use]
    pub fn to_session_exercise(&self) -> SessionExercise {
        let slot = SessionExercise::new(
            self.exercise.id.clone(),
            self.exercise.name.clone(),
            self.sets,
            ExerciseTarget::from_parts(self.reps, self.duration_seconds),
            self.rest_seconds,
        );
        match self.exercise.calories_per_minute {
            Some(rate) => slot.with_energy_rate(rate),
            None => slot,
        }
    }

    /// "3 × 10 reps" or "3 × 45s", measured the way the session runs it.
    #[must_use]
    pub fn target_label(&self) -> String {
        let target = ExerciseTarget::from_parts(self.reps, self.duration_seconds);
        format!("{} × {}", self.sets, target.label())
    }
}

/// A routine with its exercises, as stored or imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineDefinition {
    /// Routine metadata.
    #[serde(flatten)]
    pub routine: Routine,
    /// Ordered exercise slots.
    pub exercises: Vec<RoutineExercise>,
}

impl RoutineDefinition {
    /// Read a definition from a YAML file and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    pub fn from_yaml_file(path: &Path) -> Result<Self, TempoError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse a definition from YAML and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or fails validation.
    pub fn from_yaml(yaml: &str) -> Result<Self, TempoError> {
        let mut definition: Self = serde_yaml::from_str(yaml)?;
        definition.validate()?;
        Ok(definition)
    }

    /// Check required fields, renumber slots, and fill in the estimate.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` describing the first problem found.
    pub fn validate(&mut self) -> Result<(), TempoError> {
        if self.routine.id.trim().is_empty() {
            return Err(TempoError::InvalidInput("routine id is empty".to_string()));
        }
        if self.routine.name.trim().is_empty() {
            return Err(TempoError::InvalidInput(format!(
                "routine {} has no name",
                self.routine.id
            )));
        }
        if self.exercises.is_empty() {
            return Err(TempoError::InvalidInput(format!(
                "routine {} has no exercises",
                self.routine.id
            )));
        }

        for (index, slot) in self.exercises.iter_mut().enumerate() {
            if slot.exercise.id.trim().is_empty() || slot.exercise.name.trim().is_empty() {
                return Err(TempoError::InvalidInput(format!(
                    "exercise {} of routine {} needs an id and a name",
                    index + 1,
                    self.routine.id
                )));
            }
            if slot.sets == 0 {
                return Err(TempoError::InvalidInput(format!(
                    "exercise {} in routine {} must have at least one set",
                    slot.exercise.id, self.routine.id
                )));
            }
            slot.order_index = u32::try_from(index).map_err(|_| {
                TempoError::InvalidInput(format!("routine {} is too long", self.routine.id))
            })?;
        }

        if self.routine.estimated_minutes == 0 {
            let seconds = session_length_seconds(&self.session_exercises());
            self.routine.estimated_minutes = u32::try_from(seconds.div_ceil(60)).unwrap_or(u32::MAX);
        }

        Ok(())
    }

    /// The engine's view of this routine.
    #[must_use]
    pub fn session_exercises(&self) -> Vec<SessionExercise> {
        self.exercises
            .iter()
            .map(RoutineExercise::to_session_exercise)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r"
id: hiit
name: HIIT Blast
difficulty: intermediate
exercises:
  - exercise:
      id: burpee
      name: Burpees
      calories_per_minute: 10
    sets: 3
    duration_seconds: 30
    rest_seconds: 15
  - exercise:
      id: pushup
      name: Push Up
    sets: 2
    reps: 12
    rest_seconds: 20
";

    #[test]
    fn test_from_yaml() {
        let def = RoutineDefinition::from_yaml(YAML).unwrap();
        assert_eq!(def.routine.id, "hiit");
        assert_eq!(def.routine.difficulty, Difficulty::Intermediate);
        assert_eq!(def.exercises.len(), 2);
        assert_eq!(def.exercises[1].order_index, 1);
        // (3*30 + 2*15 + 60) + (2*45 + 20 + 60) = 180 + 170 = 350s
        assert_eq!(def.routine.estimated_minutes, 6);
    }

    #[test]
    fn test_session_mapping() {
        let def = RoutineDefinition::from_yaml(YAML).unwrap();
        let slots = def.session_exercises();
        assert_eq!(slots[0].target, ExerciseTarget::Duration(30));
        assert_eq!(slots[0].energy_rate_per_minute, Some(10.0));
        assert_eq!(slots[1].target, ExerciseTarget::Reps(12));
        assert_eq!(slots[1].work_seconds(), 45);
        assert_eq!(slots[1].energy_rate_per_minute, None);
    }

    #[test]
    fn test_target_label() {
        let def = RoutineDefinition::from_yaml(YAML).unwrap();
        assert_eq!(def.exercises[0].target_label(), "3 × 30s");
        assert_eq!(def.exercises[1].target_label(), "2 × 12 reps");
    }

    #[test]
    fn test_target_label_prefers_duration() {
        let mut def = RoutineDefinition::from_yaml(YAML).unwrap();
        let slot = &mut def.exercises[1];
        slot.duration_seconds = Some(40);

        assert_eq!(slot.target_label(), "2 × 40s");
        assert_eq!(
            slot.to_session_exercise().target.label(),
            ExerciseTarget::Duration(40).label()
        );
    }

    #[test]
    fn test_validation_errors() {
        let empty = "id: x\nname: Empty\nexercises: []\n";
        let err = RoutineDefinition::from_yaml(empty).unwrap_err();
        assert!(err.to_string().contains("no exercises"));

        let zero_sets = r"
id: x
name: Bad
exercises:
  - exercise: {id: a, name: A}
    sets: 0
";
        let err = RoutineDefinition::from_yaml(zero_sets).unwrap_err();
        assert!(err.to_string().contains("at least one set"));

        let no_id = "id: ''\nname: Nameless\nexercises: []\n";
        assert!(RoutineDefinition::from_yaml(no_id).is_err());
    }
}

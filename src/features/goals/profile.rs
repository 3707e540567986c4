//! Body profile and its enumerations.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::TempoError;

/// Biological sex, as used by the BMR formula.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male.
    Male,
    /// Female.
    Female,
}

/// Habitual activity level.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise.
    Sedentary,
    /// Light exercise 1-3 days a week.
    Light,
    /// Moderate exercise 3-5 days a week.
    #[default]
    Moderate,
    /// Hard exercise 6-7 days a week.
    Active,
    /// Very hard exercise or a physical job.
    VeryActive,
}

impl ActivityLevel {
    /// TDEE multiplier.
    #[must_use]
    pub const fn tdee_multiplier(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            Self::VeryActive => 1.9,
        }
    }

    /// Water intake multiplier.
    #[must_use]
    pub const fn water_multiplier(self) -> f64 {
        match self {
            Self::Sedentary => 1.0,
            Self::Light => 1.1,
            Self::Moderate => 1.2,
            Self::Active => 1.3,
            Self::VeryActive => 1.4,
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very active",
        };
        write!(f, "{name}")
    }
}

/// What the user is training for.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Keep current weight.
    #[default]
    Maintain,
    /// Lose weight.
    WeightLoss,
    /// Build muscle.
    Muscle,
}

impl std::fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Maintain => "maintain",
            Self::WeightLoss => "weight loss",
            Self::Muscle => "muscle gain",
        };
        write!(f, "{name}")
    }
}

/// Body profile, stored in the `profile` section of the config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Weight in kilograms.
    pub weight_kg: Option<f64>,
    /// Height in centimeters.
    pub height_cm: Option<f64>,
    /// Age in years.
    pub age: Option<u32>,
    /// Sex for the BMR formula.
    pub sex: Option<Sex>,
    /// Activity level.
    pub activity_level: ActivityLevel,
    /// Training goal.
    pub goal: FitnessGoal,
}

impl Profile {
    /// Weight, or an error naming the missing field.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the weight is missing or not positive.
    pub fn require_weight(&self) -> Result<f64, TempoError> {
        positive(self.weight_kg, "weight")
    }

    /// Height, or an error naming the missing field.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the height is missing or not positive.
    pub fn require_height(&self) -> Result<f64, TempoError> {
        positive(self.height_cm, "height")
    }

    /// Age, or an error naming the missing field.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the age is missing or zero.
    pub fn require_age(&self) -> Result<u32, TempoError> {
        self.age
            .filter(|a| *a > 0)
            .ok_or_else(|| missing("age"))
    }

    /// Sex, or an error naming the missing field.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the sex is missing.
    pub fn require_sex(&self) -> Result<Sex, TempoError> {
        self.sex.ok_or_else(|| missing("sex"))
    }
}

fn positive(value: Option<f64>, field: &str) -> Result<f64, TempoError> {
    value.filter(|v| *v > 0.0).ok_or_else(|| missing(field))
}

fn missing(field: &str) -> TempoError {
    TempoError::InvalidInput(format!(
        "profile {field} is required (set it in config.yaml or pass --{field})"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_fields() {
        let profile = Profile {
            weight_kg: Some(70.0),
            height_cm: None,
            age: Some(0),
            sex: Some(Sex::Male),
            ..Profile::default()
        };

        assert!((profile.require_weight().unwrap() - 70.0).abs() < f64::EPSILON);
        assert_eq!(profile.require_sex().unwrap(), Sex::Male);

        let err = profile.require_height().unwrap_err();
        assert!(err.to_string().contains("height"));
        assert!(profile.require_age().is_err());
    }

    #[test]
    fn test_activity_yaml_names() {
        let level: ActivityLevel = serde_yaml::from_str("very_active").unwrap();
        assert_eq!(level, ActivityLevel::VeryActive);
        let goal: FitnessGoal = serde_yaml::from_str("weight_loss").unwrap();
        assert_eq!(goal, FitnessGoal::WeightLoss);
    }
}

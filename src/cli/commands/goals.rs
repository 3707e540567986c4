//! Goal commands: nutrition targets, weekly workout targets and progress.

use super::{resolve_date, Context};
use crate::cli::args::{BodyArgs, GoalsCommands, ProfileOverrides};
use crate::core::week_bounds;
use crate::error::TempoError;
use crate::features::goals::{workout_goals, NutritionPlan, Profile, WorkoutGoals};
use crate::features::workout::WeeklyReport;
use crate::output::{
    format_nutrition_plan, format_profile, format_weekly_report, format_workout_goals,
};

/// Execute a goals subcommand.
///
/// # Errors
///
/// Returns an error if the profile is incomplete, a date cannot be parsed,
/// or the workout log cannot be read.
pub fn goals(ctx: &Context, command: GoalsCommands) -> Result<String, TempoError> {
    match command {
        GoalsCommands::Nutrition { body, profile } => {
            let merged = with_body(ctx.profile(&profile), &body);
            let plan = NutritionPlan::for_profile(&merged)?;
            format_nutrition_plan(&plan, ctx.format)
        },
        GoalsCommands::Profile { body, profile } => update_profile(ctx, &body, &profile),
        GoalsCommands::Workout { profile } => {
            format_workout_goals(&weekly_goals(ctx, &profile), ctx.format)
        },
        GoalsCommands::Progress { date, profile } => {
            let date = resolve_date(date.as_deref())?;
            let (start, end) = week_bounds(date);
            let records = ctx.open_workouts()?.between(start, end)?;

            let report = WeeklyReport::build(date, &records, weekly_goals(ctx, &profile));
            format_weekly_report(&report, ctx.format)
        },
    }
}

fn with_body(mut profile: Profile, body: &BodyArgs) -> Profile {
    profile.weight_kg = body.weight.or(profile.weight_kg);
    profile.height_cm = body.height.or(profile.height_cm);
    profile.age = body.age.or(profile.age);
    profile.sex = body.sex.or(profile.sex);
    profile
}

/// Save any given values into the config file, then show the profile.
fn update_profile(
    ctx: &Context,
    body: &BodyArgs,
    overrides: &ProfileOverrides,
) -> Result<String, TempoError> {
    let profile = with_body(ctx.profile(overrides), body);

    if profile != ctx.config.profile {
        let mut config = ctx.config.clone();
        config.profile = profile.clone();
        ctx.paths.ensure_dirs()?;
        config.save_to_path(&ctx.paths.config_file)?;
        tracing::info!(path = %ctx.paths.config_file.display(), "profile saved");
    }

    format_profile(&profile, ctx.format)
}

fn weekly_goals(ctx: &Context, overrides: &ProfileOverrides) -> WorkoutGoals {
    let profile = ctx.profile(overrides);
    workout_goals(profile.activity_level, profile.goal)
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_context;
    use super::*;
    use crate::cli::args::OutputFormat;
    use crate::features::goals::{ActivityLevel, FitnessGoal, Sex};

    #[test]
    fn test_nutrition_from_flags() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let mut ctx = test_context(temp_dir.path());
        ctx.format = OutputFormat::Json;

        let output = goals(
            &ctx,
            GoalsCommands::Nutrition {
                body: BodyArgs {
                    weight: Some(70.0),
                    height: Some(175.0),
                    age: Some(30),
                    sex: Some(Sex::Male),
                },
                profile: ProfileOverrides::default(),
            },
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        // 700 + 1093.75 - 150 + 5 = 1648.75; x1.55 = 2555.6
        assert_eq!(value["tdee"], 2556);
        assert_eq!(value["calories"], 2556);
        assert_eq!(value["water_ml"], 2772);
    }

    #[test]
    fn test_nutrition_needs_profile() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let ctx = test_context(temp_dir.path());

        let err = goals(
            &ctx,
            GoalsCommands::Nutrition {
                body: BodyArgs {
                    weight: Some(70.0),
                    height: None,
                    age: Some(30),
                    sex: Some(Sex::Male),
                },
                profile: ProfileOverrides::default(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, TempoError::InvalidInput(_)));
        assert!(err.to_string().contains("height"));
    }

    #[test]
    fn test_workout_goals_overrides() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let mut ctx = test_context(temp_dir.path());
        ctx.format = OutputFormat::Json;

        let output = goals(
            &ctx,
            GoalsCommands::Workout {
                profile: ProfileOverrides {
                    activity: Some(ActivityLevel::Sedentary),
                    goal: Some(FitnessGoal::WeightLoss),
                },
            },
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["workouts_per_week"], 3);
        assert_eq!(value["minutes_per_workout"], 30);
        assert_eq!(value["calories_per_week"], 1440);
    }

    #[test]
    fn test_progress_empty_week() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let mut ctx = test_context(temp_dir.path());
        ctx.format = OutputFormat::Json;

        let output = goals(
            &ctx,
            GoalsCommands::Progress {
                date: Some("2024-03-13".to_string()),
                profile: ProfileOverrides::default(),
            },
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["week_start"], "2024-03-11");
        assert_eq!(value["workouts"], 0);
        assert_eq!(value["workouts_percent"], 0.0);
    }

    #[test]
    fn test_profile_update_is_saved() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let ctx = test_context(temp_dir.path());

        goals(
            &ctx,
            GoalsCommands::Profile {
                body: BodyArgs {
                    weight: Some(72.5),
                    ..BodyArgs::default()
                },
                profile: ProfileOverrides {
                    activity: Some(ActivityLevel::Active),
                    goal: None,
                },
            },
        )
        .unwrap();

        let saved = crate::config::Config::load_from_path(&ctx.paths.config_file).unwrap();
        assert_eq!(saved.profile.weight_kg, Some(72.5));
        assert_eq!(saved.profile.activity_level, ActivityLevel::Active);
    }

    #[test]
    fn test_profile_show_does_not_write() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let ctx = test_context(temp_dir.path());

        let output = goals(
            &ctx,
            GoalsCommands::Profile {
                body: BodyArgs::default(),
                profile: ProfileOverrides::default(),
            },
        )
        .unwrap();
        assert!(output.contains("moderate"));
        assert!(!ctx.paths.config_file.exists());
    }
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::features::goals::{ActivityLevel, FitnessGoal, Sex};
use crate::features::intake::MealType;

#[derive(Parser)]
#[command(name = "tempo")]
#[command(about = "Interval workout timer, workout log, intake log and fitness goal calculator")]
#[command(long_about = "tempo - interval workouts from the terminal

Runs routines as timed work/rest intervals, keeps a log of finished
workouts, and derives nutrition and weekly training targets from your
body profile.

QUICK START:
  tempo routine list               Show available routines
  tempo workout start full-body    Run a routine with the interactive timer
  tempo workout week               This week's workouts
  tempo goals progress             This week against your targets
  tempo water add 250              Log a glass of water

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

Data lives in ~/.tempo (config.yaml, tempo.db, routines/).")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from the config file, or
    /// 'pretty' when unset.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    ///
    /// `TEMPO_LOG` or `RUST_LOG` override this when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse and manage routines
    ///
    /// # Examples
    ///
    ///   tempo routine list
    ///   tempo routine show full-body
    ///   tempo routine import ~/hiit.yaml
    #[command(alias = "r")]
    Routine(RoutineArgs),

    /// Run workouts and browse the workout log
    ///
    /// # Examples
    ///
    ///   tempo workout start full-body
    ///   tempo workout simulate legs-core --record
    ///   tempo workout history --limit 5
    #[command(alias = "w")]
    Workout(WorkoutArgs),

    /// Nutrition and weekly training targets
    ///
    /// Values not passed as flags are taken from the `profile` section
    /// of ~/.tempo/config.yaml.
    ///
    /// # Examples
    ///
    ///   tempo goals nutrition --weight 70 --height 175 --age 30 --sex male
    ///   tempo goals workout --activity active --goal muscle
    ///   tempo goals progress
    #[command(alias = "g")]
    Goals(GoalsArgs),

    /// Log water against the daily target
    ///
    /// # Examples
    ///
    ///   tempo water add 250
    ///   tempo water remove 250
    ///   tempo water week
    Water(WaterArgs),

    /// Log meals against the daily calorie and macro targets
    ///
    /// # Examples
    ///
    ///   tempo meal add "Chicken salad" --type lunch --calories 450 --protein 35
    ///   tempo meal today
    #[command(alias = "m")]
    Meal(MealArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   tempo completions bash > ~/.local/share/bash-completion/completions/tempo
    ///   tempo completions zsh > ~/.zfunc/_tempo
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct RoutineArgs {
    #[command(subcommand)]
    pub command: RoutineCommands,
}

#[derive(Subcommand)]
pub enum RoutineCommands {
    /// List all routines
    #[command(alias = "ls")]
    List,

    /// Show a routine and its exercises
    Show {
        /// Routine ID
        id: String,
    },

    /// Import a routine from a YAML file
    ///
    /// The file is validated and then inserted, replacing any routine with
    /// the same ID.
    Import {
        /// Path to the YAML file
        file: PathBuf,
    },

    /// Delete a routine
    #[command(alias = "rm")]
    Delete {
        /// Routine ID
        id: String,
    },
}

#[derive(Args)]
pub struct WorkoutArgs {
    #[command(subcommand)]
    pub command: WorkoutCommands,
}

#[derive(Subcommand)]
pub enum WorkoutCommands {
    /// Run a routine with the interactive timer
    ///
    /// Keys: space start/pause, n/→ next exercise, p/← previous exercise,
    /// r reset workout, f finish and record, q/Esc abandon.
    Start {
        /// Routine ID
        routine: String,

        /// Notes to store with the workout
        #[arg(long)]
        notes: Option<String>,
    },

    /// Run a routine to completion without the timer
    ///
    /// Ticks the session as fast as possible and prints the summary.
    Simulate {
        /// Routine ID
        routine: String,

        /// Store the result in the workout log
        #[arg(long)]
        record: bool,

        /// Notes to store with the workout
        #[arg(long)]
        notes: Option<String>,
    },

    /// Show recent workouts
    History {
        /// Maximum number of workouts to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show today's workouts
    Today,

    /// Show the workouts of a week
    Week {
        /// Any date in the week (today, yesterday, "3 days ago", YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete a workout from the log
    #[command(alias = "rm")]
    Delete {
        /// Workout ID
        id: i64,
    },
}

#[derive(Args)]
pub struct GoalsArgs {
    #[command(subcommand)]
    pub command: GoalsCommands,
}

/// Overrides for the configured profile.
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileOverrides {
    /// Activity level
    #[arg(long, value_enum)]
    pub activity: Option<ActivityLevel>,

    /// Training goal
    #[arg(long, value_enum)]
    pub goal: Option<FitnessGoal>,
}

/// Body measurements for the nutrition formulas.
#[derive(Args, Debug, Clone, Default)]
pub struct BodyArgs {
    /// Weight in kilograms
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in centimeters
    #[arg(long)]
    pub height: Option<f64>,

    /// Age in years
    #[arg(long)]
    pub age: Option<u32>,

    /// Sex
    #[arg(long, value_enum)]
    pub sex: Option<Sex>,
}

#[derive(Subcommand)]
pub enum GoalsCommands {
    /// Daily calories, water and macros
    Nutrition {
        #[command(flatten)]
        body: BodyArgs,

        #[command(flatten)]
        profile: ProfileOverrides,
    },

    /// Show the stored profile, or update it with the given values
    ///
    /// # Examples
    ///
    ///   tempo goals profile
    ///   tempo goals profile --weight 72.5 --activity active
    Profile {
        #[command(flatten)]
        body: BodyArgs,

        #[command(flatten)]
        profile: ProfileOverrides,
    },

    /// Weekly workout targets
    Workout {
        #[command(flatten)]
        profile: ProfileOverrides,
    },

    /// This week's workouts against the weekly targets
    Progress {
        /// Any date in the week (today, yesterday, "3 days ago", YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        #[command(flatten)]
        profile: ProfileOverrides,
    },
}

#[derive(Args)]
pub struct WaterArgs {
    #[command(subcommand)]
    pub command: WaterCommands,
}

#[derive(Subcommand)]
pub enum WaterCommands {
    /// Add water to a day's total
    Add {
        /// Milliliters
        amount: u32,

        /// Day to log against (today, yesterday, "3 days ago", YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Take water off a day's total
    Remove {
        /// Milliliters
        amount: u32,

        /// Day to log against (today, yesterday, "3 days ago", YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Replace a day's total
    Set {
        /// Milliliters
        amount: u32,

        /// Day to log against (today, yesterday, "3 days ago", YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show today's water
    Today,

    /// Show the water of a week
    Week {
        /// Any date in the week (today, yesterday, "3 days ago", YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Args)]
pub struct MealArgs {
    #[command(subcommand)]
    pub command: MealCommands,
}

#[derive(Subcommand)]
pub enum MealCommands {
    /// Log a meal
    Add {
        /// What was eaten
        name: String,

        /// Meal slot
        #[arg(long = "type", value_enum, default_value_t = MealType::Snack)]
        meal_type: MealType,

        /// Energy in kcal
        #[arg(long, default_value_t = 0)]
        calories: u32,

        /// Protein grams
        #[arg(long, default_value_t = 0)]
        protein: u32,

        /// Carbohydrate grams
        #[arg(long, default_value_t = 0)]
        carbs: u32,

        /// Fat grams
        #[arg(long, default_value_t = 0)]
        fats: u32,

        /// Day to log against (today, yesterday, "3 days ago", YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show today's meals
    Today,

    /// Show the meals of a week
    Week {
        /// Any date in the week (today, yesterday, "3 days ago", YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete a meal from the log
    #[command(alias = "rm")]
    Delete {
        /// Meal ID
        id: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_output_format_default() {
        let cli = Cli::try_parse_from(["tempo", "routine", "list"]).unwrap();
        assert!(cli.output.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_output_format_json() {
        let cli = Cli::try_parse_from(["tempo", "-o", "json", "routine", "list"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tempo", "workout", "today", "-vv", "--output", "json"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_routine_alias() {
        let cli = Cli::try_parse_from(["tempo", "r", "ls"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Routine(RoutineArgs {
                command: RoutineCommands::List
            })
        ));
    }

    #[test]
    fn test_cli_simulate() {
        let cli = Cli::try_parse_from([
            "tempo", "workout", "simulate", "full-body", "--record", "--notes", "easy",
        ])
        .unwrap();
        match cli.command {
            Commands::Workout(WorkoutArgs {
                command:
                    WorkoutCommands::Simulate {
                        routine,
                        record,
                        notes,
                    },
            }) => {
                assert_eq!(routine, "full-body");
                assert!(record);
                assert_eq!(notes.as_deref(), Some("easy"));
            },
            _ => panic!("expected workout simulate"),
        }
    }

    #[test]
    fn test_cli_history_default_limit() {
        let cli = Cli::try_parse_from(["tempo", "workout", "history"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Workout(WorkoutArgs {
                command: WorkoutCommands::History { limit: 10 }
            })
        ));
    }

    #[test]
    fn test_cli_goals_nutrition() {
        let cli = Cli::try_parse_from([
            "tempo",
            "goals",
            "nutrition",
            "--weight",
            "70",
            "--sex",
            "female",
            "--activity",
            "very-active",
            "--goal",
            "weight-loss",
        ])
        .unwrap();
        match cli.command {
            Commands::Goals(GoalsArgs {
                command: GoalsCommands::Nutrition { body, profile },
            }) => {
                assert_eq!(body.weight, Some(70.0));
                assert_eq!(body.sex, Some(Sex::Female));
                assert_eq!(profile.activity, Some(ActivityLevel::VeryActive));
                assert_eq!(profile.goal, Some(FitnessGoal::WeightLoss));
            },
            _ => panic!("expected goals nutrition"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_activity() {
        assert!(Cli::try_parse_from(["tempo", "goals", "workout", "--activity", "lazy"]).is_err());
    }

    #[test]
    fn test_cli_water_add() {
        let cli = Cli::try_parse_from(["tempo", "water", "add", "250", "--date", "yesterday"])
            .unwrap();
        match cli.command {
            Commands::Water(WaterArgs {
                command: WaterCommands::Add { amount, date },
            }) => {
                assert_eq!(amount, 250);
                assert_eq!(date.as_deref(), Some("yesterday"));
            },
            _ => panic!("expected water add"),
        }
    }

    #[test]
    fn test_cli_meal_add_defaults() {
        let cli = Cli::try_parse_from(["tempo", "m", "add", "Apple", "--calories", "95"]).unwrap();
        match cli.command {
            Commands::Meal(MealArgs {
                command:
                    MealCommands::Add {
                        name,
                        meal_type,
                        calories,
                        protein,
                        ..
                    },
            }) => {
                assert_eq!(name, "Apple");
                assert_eq!(meal_type, MealType::Snack);
                assert_eq!(calories, 95);
                assert_eq!(protein, 0);
            },
            _ => panic!("expected meal add"),
        }
    }

    #[test]
    fn test_cli_meal_type() {
        let cli = Cli::try_parse_from(["tempo", "meal", "add", "Eggs", "--type", "breakfast"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Meal(MealArgs {
                command: MealCommands::Add {
                    meal_type: MealType::Breakfast,
                    ..
                }
            })
        ));
    }

    #[test]
    fn test_cli_rejects_negative_water() {
        assert!(Cli::try_parse_from(["tempo", "water", "add", "-250"]).is_err());
    }
}

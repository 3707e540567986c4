use colored::Colorize;

use crate::features::goals::{NutritionPlan, Profile, Sex, WorkoutGoals};
use crate::features::intake::{MealDay, MealTotals, MealWeek, WaterDay, WaterWeek};
use crate::features::routines::{Difficulty, RoutineDefinition, RoutineSummary};
use crate::features::workout::{
    format_clock, render_progress_bar, SessionSummary, WeeklyReport, WorkoutRecord,
};

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "─".repeat(RULE_WIDTH)
}

fn difficulty_badge(difficulty: Difficulty) -> String {
    match difficulty {
        Difficulty::Beginner => difficulty.as_str().green().to_string(),
        Difficulty::Intermediate => difficulty.as_str().yellow().to_string(),
        Difficulty::Advanced => difficulty.as_str().red().to_string(),
    }
}

/// Format the routine catalog as a list
pub fn format_routines_pretty(routines: &[RoutineSummary]) -> String {
    if routines.is_empty() {
        return "Routines (0)\n  No routines".to_string();
    }

    let mut output = format!("Routines ({})\n", routines.len());
    output.push_str(&rule());
    output.push('\n');

    for summary in routines {
        let routine = &summary.routine;
        output.push_str(&format!(
            "{} {}  {}  {} exercises, ~{} min  {}\n",
            "▸".white(),
            routine.name.bold(),
            difficulty_badge(routine.difficulty),
            summary.exercise_count,
            routine.estimated_minutes,
            routine.id.dimmed(),
        ));
    }

    output
}

/// Format one routine with its exercises
pub fn format_routine_pretty(definition: &RoutineDefinition) -> String {
    let routine = &definition.routine;

    let mut output = format!("{}\n", routine.name.bold());
    output.push_str(&format!("  {}: {}\n", "ID".dimmed(), routine.id));
    if !routine.description.is_empty() {
        output.push_str(&format!(
            "  {}: {}\n",
            "Description".dimmed(),
            routine.description
        ));
    }
    output.push_str(&format!(
        "  {}: {}\n",
        "Difficulty".dimmed(),
        difficulty_badge(routine.difficulty)
    ));
    if !routine.category.is_empty() {
        output.push_str(&format!("  {}: {}\n", "Category".dimmed(), routine.category));
    }
    output.push_str(&format!(
        "  {}: ~{} min\n",
        "Length".dimmed(),
        routine.estimated_minutes
    ));

    output.push_str(&format!("  {}:\n", "Exercises".dimmed()));
    for (i, slot) in definition.exercises.iter().enumerate() {
        let mut line = format!(
            "    {}. {}  {}  rest {}s",
            i + 1,
            slot.exercise.name,
            slot.target_label().cyan(),
            slot.rest_seconds
        );
        if !slot.exercise.muscles_worked.is_empty() {
            line.push_str(&format!(
                "  {}",
                slot.exercise.muscles_worked.join(", ").dimmed()
            ));
        }
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format a list of workout log entries
pub fn format_workouts_pretty(workouts: &[WorkoutRecord], title: &str) -> String {
    if workouts.is_empty() {
        return format!("{title} (0)\n  No workouts");
    }

    let mut output = format!("{} ({})\n", title, workouts.len());
    output.push_str(&rule());
    output.push('\n');

    for workout in workouts {
        let icon = if workout.completed {
            "✓".green()
        } else {
            "·".dimmed()
        };
        let mut line = format!(
            "{} {}  {}  {} min  {} kcal  {}",
            icon,
            workout.tracking_date.to_string().yellow(),
            workout.routine_name.bold(),
            workout.duration_minutes,
            workout.calories_burned,
            format!("#{}", workout.id).dimmed(),
        );
        if let Some(notes) = &workout.notes {
            line.push_str(&format!("  {}", notes.dimmed()));
        }
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format the result of a session
pub fn format_session_summary_pretty(
    routine_name: &str,
    summary: &SessionSummary,
    record_id: Option<i64>,
) -> String {
    let mut output = format!("{} {}\n", "Workout finished:".green().bold(), routine_name);
    output.push_str(&format!(
        "  {}: {}\n",
        "Time".dimmed(),
        format_clock(summary.total_elapsed_seconds)
    ));
    output.push_str(&format!(
        "  {}: {} kcal\n",
        "Energy".dimmed(),
        summary.estimated_energy
    ));
    match record_id {
        Some(id) => output.push_str(&format!("  {}: #{}\n", "Recorded".dimmed(), id)),
        None => output.push_str(&format!("  {}\n", "Not recorded".dimmed())),
    }
    output
}

fn progress_line(label: &str, value: String, percent: f64) -> String {
    let bar = render_progress_bar(percent / 100.0, 20);
    let bar = if percent >= 100.0 {
        bar.green().to_string()
    } else {
        bar.cyan().to_string()
    };
    format!("  {label:<10} {bar} {percent:>5.0}%  {value}\n")
}

/// Format a weekly progress report
pub fn format_weekly_report_pretty(report: &WeeklyReport) -> String {
    let mut output = format!(
        "{} {} - {}\n",
        "Week".bold(),
        report.week_start.format("%b %d"),
        report.week_end.format("%b %d")
    );
    output.push_str(&rule());
    output.push('\n');

    output.push_str(&progress_line(
        "Workouts",
        format!("{}/{}", report.workouts, report.goals.workouts_per_week),
        report.workouts_percent,
    ));
    output.push_str(&progress_line(
        "Minutes",
        format!("{}/{}", report.minutes, report.goals.minutes_per_week()),
        report.minutes_percent,
    ));
    output.push_str(&progress_line(
        "Calories",
        format!("{}/{}", report.calories, report.goals.calories_per_week),
        report.calories_percent,
    ));

    output
}

/// Format daily nutrition recommendations
pub fn format_nutrition_plan_pretty(plan: &NutritionPlan) -> String {
    let mut output = format!(
        "{} ({}, {})\n",
        "Daily nutrition".bold(),
        plan.activity_level,
        plan.goal
    );
    output.push_str(&rule());
    output.push('\n');
    output.push_str(&format!("  {:<10} {:.0} kcal\n", "BMR", plan.bmr));
    output.push_str(&format!("  {:<10} {} kcal\n", "TDEE", plan.tdee));
    output.push_str(&format!(
        "  {:<10} {}\n",
        "Calories",
        format!("{} kcal", plan.calories).green().bold()
    ));
    output.push_str(&format!("  {:<10} {} ml\n", "Water", plan.water_ml));
    output.push_str(&format!(
        "  {:<10} protein {} g, carbs {} g, fats {} g\n",
        "Macros", plan.macros.protein, plan.macros.carbs, plan.macros.fats
    ));
    output
}

/// Format weekly workout targets
pub fn format_workout_goals_pretty(goals: &WorkoutGoals) -> String {
    let mut output = format!("{}\n", "Weekly workout goals".bold());
    output.push_str(&rule());
    output.push('\n');
    output.push_str(&format!(
        "  {:<10} {}\n",
        "Workouts",
        goals.workouts_per_week
    ));
    output.push_str(&format!(
        "  {:<10} {} min each ({} min/week)\n",
        "Duration",
        goals.minutes_per_workout,
        goals.minutes_per_week()
    ));
    output.push_str(&format!(
        "  {:<10} {} kcal\n",
        "Calories", goals.calories_per_week
    ));
    output
}

/// Format the body profile
pub fn format_profile_pretty(profile: &Profile) -> String {
    fn or_unset<T: std::fmt::Display>(value: Option<T>, unit: &str) -> String {
        value.map_or_else(
            || "not set".dimmed().to_string(),
            |v| format!("{v}{unit}"),
        )
    }

    let mut output = format!("{}\n", "Profile".bold());
    output.push_str(&rule());
    output.push('\n');
    output.push_str(&format!("  {:<10} {}\n", "Weight", or_unset(profile.weight_kg, " kg")));
    output.push_str(&format!("  {:<10} {}\n", "Height", or_unset(profile.height_cm, " cm")));
    output.push_str(&format!("  {:<10} {}\n", "Age", or_unset(profile.age, "")));
    output.push_str(&format!(
        "  {:<10} {}\n",
        "Sex",
        or_unset(
            profile.sex.map(|s| match s {
                Sex::Male => "male",
                Sex::Female => "female",
            }),
            ""
        )
    ));
    output.push_str(&format!("  {:<10} {}\n", "Activity", profile.activity_level));
    output.push_str(&format!("  {:<10} {}\n", "Goal", profile.goal));
    output
}

/// Format one day of water
pub fn format_water_day_pretty(day: &WaterDay) -> String {
    let mut output = format!("{} {}\n", "Water".bold(), day.tracking_date.format("%a %b %d"));
    output.push_str(&rule());
    output.push('\n');

    match (day.goal_ml, day.percent) {
        (Some(goal), Some(percent)) => output.push_str(&progress_line(
            "Intake",
            format!("{}/{} ml", day.amount_ml, goal),
            percent,
        )),
        _ => {
            output.push_str(&format!("  {:<10} {} ml\n", "Intake", day.amount_ml));
            output.push_str(&format!(
                "  {}\n",
                "No target: set a weight with `tempo goals profile --weight <kg>`".dimmed()
            ));
        },
    }
    output
}

/// Format a week of water
pub fn format_water_week_pretty(week: &WaterWeek) -> String {
    let mut output = format!(
        "{} {} - {}\n",
        "Water week".bold(),
        week.week_start.format("%b %d"),
        week.week_end.format("%b %d")
    );
    output.push_str(&rule());
    output.push('\n');

    for day in &week.days {
        let label = day.tracking_date.format("%a %d").to_string();
        match (day.goal_ml, day.percent) {
            (Some(goal), Some(percent)) => output.push_str(&progress_line(
                &label,
                format!("{}/{} ml", day.amount_ml, goal),
                percent,
            )),
            _ => output.push_str(&format!("  {:<10} {} ml\n", label, day.amount_ml)),
        }
    }

    output.push_str(&format!("  {:<10} {} ml", "Total", week.total_ml));
    if week.days.iter().any(|d| d.goal_ml.is_some()) {
        let days = week.days_on_target;
        output.push_str(&format!(
            ", {} {} on target",
            days,
            if days == 1 { "day" } else { "days" }
        ));
    }
    output.push('\n');
    output
}

fn totals_line(totals: &MealTotals) -> String {
    format!(
        "{} kcal  P {} g  C {} g  F {} g",
        totals.calories, totals.protein, totals.carbs, totals.fats
    )
}

#[allow(clippy::cast_precision_loss)]
fn share(value: u64, target: i64) -> f64 {
    if target <= 0 {
        return 0.0;
    }
    value as f64 / target as f64 * 100.0
}

/// Format one day of meals
pub fn format_meal_day_pretty(day: &MealDay) -> String {
    let mut output = format!(
        "{} {} ({})\n",
        "Meals".bold(),
        day.tracking_date.format("%a %b %d"),
        day.meals.len()
    );
    output.push_str(&rule());
    output.push('\n');

    if day.meals.is_empty() {
        output.push_str("  No meals\n");
    }
    for meal in &day.meals {
        output.push_str(&format!(
            "{} {:<10} {}  {} kcal  {}\n",
            "▸".white(),
            meal.meal_type.to_string().cyan(),
            meal.name.bold(),
            meal.calories,
            format!("P {} g  C {} g  F {} g  #{}", meal.protein, meal.carbs, meal.fats, meal.id)
                .dimmed(),
        ));
    }

    output.push_str(&rule());
    output.push('\n');
    match (day.targets, day.calories_percent) {
        (Some(targets), Some(percent)) => {
            let totals = &day.totals;
            output.push_str(&progress_line(
                "Calories",
                format!("{}/{} kcal", totals.calories, targets.calories),
                percent,
            ));
            for (label, value, target) in [
                ("Protein", totals.protein, targets.macros.protein),
                ("Carbs", totals.carbs, targets.macros.carbs),
                ("Fats", totals.fats, targets.macros.fats),
            ] {
                output.push_str(&progress_line(
                    label,
                    format!("{value}/{target} g"),
                    share(value, target),
                ));
            }
        },
        _ => output.push_str(&format!("  {:<10} {}\n", "Total", totals_line(&day.totals))),
    }
    output
}

/// Format a week of meals
pub fn format_meal_week_pretty(week: &MealWeek) -> String {
    let mut output = format!(
        "{} {} - {}\n",
        "Meals week".bold(),
        week.week_start.format("%b %d"),
        week.week_end.format("%b %d")
    );
    output.push_str(&rule());
    output.push('\n');

    for day in &week.days {
        let label = day.tracking_date.format("%a %d").to_string();
        let count = format!("({} meals)", day.meals.len()).dimmed();
        match (day.targets, day.calories_percent) {
            (Some(targets), Some(percent)) => {
                let line = progress_line(
                    &label,
                    format!("{}/{} kcal {}", day.totals.calories, targets.calories, count),
                    percent,
                );
                output.push_str(&line);
            },
            _ => output.push_str(&format!(
                "  {:<10} {} kcal {}\n",
                label, day.totals.calories, count
            )),
        }
    }

    output.push_str(&format!("  {:<10} {}\n", "Total", totals_line(&week.totals)));
    output
}

//! Workout commands: the interactive timer, headless runs and the log.

use std::time::Duration;

use chrono::Local;
use colored::Colorize;
use serde_json::json;

use super::{resolve_date, Context};
use crate::cli::args::{OutputFormat, WorkoutCommands};
use crate::core::week_bounds;
use crate::error::TempoError;
use crate::features::workout::{SessionSummary, WorkoutController, WorkoutSessionEngine};
use crate::output::{format_session_summary, format_workouts, to_json};
use crate::tui::{self, WorkoutOutcome};

/// Execute a workout subcommand.
///
/// # Errors
///
/// Returns an error if the routine or workout does not exist, storage
/// fails, or the terminal cannot be used.
pub fn workout(ctx: &Context, command: WorkoutCommands) -> Result<String, TempoError> {
    match command {
        WorkoutCommands::Start { routine, notes } => start(ctx, &routine, notes),
        WorkoutCommands::Simulate {
            routine,
            record,
            notes,
        } => simulate(ctx, &routine, record, notes),
        WorkoutCommands::History { limit } => history(ctx, limit),
        WorkoutCommands::Today => today(ctx),
        WorkoutCommands::Week { date } => week(ctx, date.as_deref()),
        WorkoutCommands::Delete { id } => delete(ctx, id),
    }
}

fn start(ctx: &Context, routine_id: &str, notes: Option<String>) -> Result<String, TempoError> {
    let mut controller = WorkoutController::new(ctx.open_routines()?, ctx.open_workouts()?);
    controller.begin(routine_id)?;

    let tick = Duration::from_millis(ctx.config.workout.tick_millis);
    match tui::run(&mut controller, tick, notes)? {
        WorkoutOutcome::Finished(finished) => format_session_summary(
            &finished.workout.routine_name,
            &finished.workout.summary,
            Some(finished.record_id),
            ctx.format,
        ),
        WorkoutOutcome::Abandoned => match ctx.format {
            OutputFormat::Json => to_json(&json!({ "abandoned": routine_id })),
            OutputFormat::Pretty => Ok(format!("{}", "Workout abandoned".yellow())),
        },
    }
}

/// Start the session if needed and tick until it stops.
fn run_to_completion(engine: &mut WorkoutSessionEngine) -> u64 {
    if !engine.snapshot().is_some_and(|s| s.running) {
        engine.toggle_running();
    }

    let mut ticks = 0;
    while engine.snapshot().is_some_and(|s| s.running) {
        engine.tick();
        ticks += 1;
    }
    ticks
}

fn simulate(
    ctx: &Context,
    routine_id: &str,
    record: bool,
    notes: Option<String>,
) -> Result<String, TempoError> {
    let mut controller = WorkoutController::new(ctx.open_routines()?, ctx.open_workouts()?);
    let routine_name = controller.begin(routine_id)?.routine.name.clone();

    let ticks = controller
        .engine_mut()
        .map_or(0, run_to_completion);
    tracing::debug!(routine = %routine_id, ticks, "simulated workout");

    let (summary, record_id): (SessionSummary, Option<i64>) = if record {
        let finished = controller.finish(notes)?;
        (finished.workout.summary, Some(finished.record_id))
    } else {
        let summary = controller
            .engine_mut()
            .map(WorkoutSessionEngine::finish)
            .transpose()?
            .ok_or(crate::error::SessionError::NoActiveSession)?;
        controller.abandon();
        (summary, None)
    };

    format_session_summary(&routine_name, &summary, record_id, ctx.format)
}

fn history(ctx: &Context, limit: usize) -> Result<String, TempoError> {
    let storage = ctx.open_workouts()?;
    format_workouts(&storage.recent(limit)?, "Recent workouts", ctx.format)
}

fn today(ctx: &Context) -> Result<String, TempoError> {
    let storage = ctx.open_workouts()?;
    let workouts = storage.on_date(Local::now().date_naive())?;
    format_workouts(&workouts, "Today", ctx.format)
}

fn week(ctx: &Context, date: Option<&str>) -> Result<String, TempoError> {
    let (start, end) = week_bounds(resolve_date(date)?);
    let storage = ctx.open_workouts()?;
    let workouts = storage.between(start, end)?;
    let title = format!("Week of {}", start.format("%Y-%m-%d"));
    format_workouts(&workouts, &title, ctx.format)
}

fn delete(ctx: &Context, id: i64) -> Result<String, TempoError> {
    let storage = ctx.open_workouts()?;
    if !storage.delete(id)? {
        return Err(TempoError::NotFound(format!("workout {id}")));
    }

    match ctx.format {
        OutputFormat::Json => to_json(&json!({ "deleted": id })),
        OutputFormat::Pretty => Ok(format!("{} workout #{}", "Deleted".green(), id)),
    }
}

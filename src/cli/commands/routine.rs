//! Routine catalog commands.

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use super::Context;
use crate::cli::args::{OutputFormat, RoutineCommands};
use crate::error::TempoError;
use crate::features::routines::RoutineDefinition;
use crate::output::{format_routine, format_routines, to_json};

/// Execute a routine subcommand.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read or written, or the
/// routine does not exist.
pub fn routine(ctx: &Context, command: RoutineCommands) -> Result<String, TempoError> {
    match command {
        RoutineCommands::List => list(ctx),
        RoutineCommands::Show { id } => show(ctx, &id),
        RoutineCommands::Import { file } => import(ctx, &file),
        RoutineCommands::Delete { id } => delete(ctx, &id),
    }
}

fn list(ctx: &Context) -> Result<String, TempoError> {
    let storage = ctx.open_routines()?;
    format_routines(&storage.list()?, ctx.format)
}

fn show(ctx: &Context, id: &str) -> Result<String, TempoError> {
    let storage = ctx.open_routines()?;
    let definition = storage
        .definition(id)?
        .ok_or_else(|| TempoError::NotFound(format!("routine {id}")))?;
    format_routine(&definition, ctx.format)
}

fn import(ctx: &Context, file: &Path) -> Result<String, TempoError> {
    let definition = RoutineDefinition::from_yaml_file(file)?;
    let mut storage = ctx.open_routines()?;
    storage.upsert_routine(&definition)?;

    let routine = &definition.routine;
    match ctx.format {
        OutputFormat::Json => to_json(&json!({
            "imported": routine.id,
            "name": routine.name,
            "exercises": definition.exercises.len(),
            "estimated_minutes": routine.estimated_minutes
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} {} ({} exercises, ~{} min)",
            "Imported".green(),
            routine.name.bold(),
            definition.exercises.len(),
            routine.estimated_minutes
        )),
    }
}

fn delete(ctx: &Context, id: &str) -> Result<String, TempoError> {
    let storage = ctx.open_routines()?;
    if !storage.delete(id)? {
        return Err(TempoError::NotFound(format!("routine {id}")));
    }

    match ctx.format {
        OutputFormat::Json => to_json(&json!({ "deleted": id })),
        OutputFormat::Pretty => Ok(format!("{} routine {}", "Deleted".green(), id)),
    }
}

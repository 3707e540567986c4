//! Water commands: log intake and show it against the daily target.

use super::{resolve_date, Context};
use crate::cli::args::WaterCommands;
use crate::core::week_bounds;
use crate::error::TempoError;
use crate::features::goals::water_ml;
use crate::features::intake::{WaterDay, WaterWeek};
use crate::output::{format_water_day, format_water_week};

/// Execute a water subcommand.
///
/// # Errors
///
/// Returns an error if a date cannot be parsed or the log cannot be read
/// or written.
pub fn water(ctx: &Context, command: WaterCommands) -> Result<String, TempoError> {
    let storage = ctx.open_water()?;
    let goal = daily_goal(ctx);

    match command {
        WaterCommands::Add { amount, date } => {
            let date = resolve_date(date.as_deref())?;
            let total = storage.adjust(date, i64::from(amount))?;
            format_water_day(&WaterDay::new(date, total, goal), ctx.format)
        },
        WaterCommands::Remove { amount, date } => {
            let date = resolve_date(date.as_deref())?;
            let total = storage.adjust(date, -i64::from(amount))?;
            format_water_day(&WaterDay::new(date, total, goal), ctx.format)
        },
        WaterCommands::Set { amount, date } => {
            let date = resolve_date(date.as_deref())?;
            let total = storage.set(date, amount)?;
            format_water_day(&WaterDay::new(date, total, goal), ctx.format)
        },
        WaterCommands::Today => {
            let date = resolve_date(None)?;
            let total = storage.amount_on(date)?;
            format_water_day(&WaterDay::new(date, total, goal), ctx.format)
        },
        WaterCommands::Week { date } => {
            let date = resolve_date(date.as_deref())?;
            let (start, end) = week_bounds(date);
            let entries = storage.between(start, end)?;
            format_water_week(&WaterWeek::build(date, &entries, goal), ctx.format)
        },
    }
}

/// Daily target from the configured weight, if there is one.
fn daily_goal(ctx: &Context) -> Option<u32> {
    let profile = &ctx.config.profile;
    let weight = profile.require_weight().ok()?;
    u32::try_from(water_ml(weight, profile.activity_level)).ok()
}

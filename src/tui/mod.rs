//! Terminal User Interface (TUI) for tempo.
//!
//! Interactive interval timer for a running workout. Built with ratatui and
//! crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, WorkoutOutcome};
pub use event::{action_for_key, Action};

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::core::{RoutineSource, WorkoutRecorder};
use crate::error::TempoError;
use crate::features::workout::WorkoutController;

/// Longest wait for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run the timer screen for the controller's active workout.
///
/// `tick` is the real time between engine ticks.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn.
pub fn run<S: RoutineSource, R: WorkoutRecorder>(
    controller: &mut WorkoutController<S, R>,
    tick: Duration,
    notes: Option<String>,
) -> Result<WorkoutOutcome, TempoError> {
    let mut app = App::new(controller, notes)?;

    // Setup terminal
    enable_raw_mode().map_err(|e| TempoError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| TempoError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| TempoError::Terminal(format!("Failed to create terminal: {e}")))?;

    let result = run_app(&mut terminal, &mut app, tick);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
///
/// Ticks are delivered one at a time against a fixed schedule, so a slow
/// frame is followed by catch-up ticks rather than lost time.
fn run_app<B, S, R>(
    terminal: &mut Terminal<B>,
    app: &mut App<'_, S, R>,
    tick: Duration,
) -> Result<WorkoutOutcome, TempoError>
where
    B: Backend,
    S: RoutineSource,
    R: WorkoutRecorder,
{
    let tick = tick.max(Duration::from_millis(1));
    let mut next_tick = Instant::now() + tick;

    loop {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| TempoError::Terminal(format!("Failed to draw: {e}")))?;

        let timeout = next_tick
            .saturating_duration_since(Instant::now())
            .min(POLL_INTERVAL);
        if let Some(action) = event::poll_action(timeout)? {
            app.apply(action);
        }

        if let Some(outcome) = app.take_outcome() {
            return Ok(outcome);
        }

        let now = Instant::now();
        while next_tick <= now {
            app.on_tick();
            next_tick += tick;
        }
    }
}

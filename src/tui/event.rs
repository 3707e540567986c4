//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::TempoError;

/// Action requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Start or pause the timer.
    Toggle,
    /// Skip to the next exercise.
    Next,
    /// Go back to the previous exercise.
    Previous,
    /// Restart the current exercise.
    Reset,
    /// Finish and record the workout.
    Finish,
    /// Drop the workout without recording.
    Abandon,
}

/// Map a key press to an action.
#[must_use]
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Abandon);
    }

    match key.code {
        KeyCode::Char(' ') => Some(Action::Toggle),
        KeyCode::Char('n') | KeyCode::Right => Some(Action::Next),
        KeyCode::Char('p') | KeyCode::Left => Some(Action::Previous),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('f') => Some(Action::Finish),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Abandon),
        _ => None,
    }
}

/// Wait up to `timeout` for a key press.
///
/// Returns the action it maps to, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_action(timeout: Duration) -> Result<Option<Action>, TempoError> {
    if !event::poll(timeout).map_err(|e| TempoError::Terminal(format!("Event poll failed: {e}")))? {
        return Ok(None);
    }

    match event::read().map_err(|e| TempoError::Terminal(format!("Event read failed: {e}")))? {
        Event::Key(key) => Ok(action_for_key(key)),
        _ => Ok(None),
    }
}

//! UI rendering for the workout timer.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

use crate::core::{RoutineSource, WorkoutRecorder};
use crate::features::workout::{format_clock, Phase, SessionState, WorkoutSessionEngine};
use crate::tui::app::App;

const UPCOMING: usize = 3;

const HELP: &str = "space:start/pause | n/→:next | p/←:prev | r:reset | f:finish | q:quit";

/// Render the timer screen.
pub fn render<S: RoutineSource, R: WorkoutRecorder>(frame: &mut Frame<'_>, app: &App<'_, S, R>) {
    // Layout: header, overall progress, current phase, upcoming, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Overall progress
            Constraint::Length(9), // Current phase
            Constraint::Min(0),    // Upcoming
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    if let Some(engine) = app.engine() {
        if let Some(state) = engine.snapshot() {
            render_overall(frame, engine, chunks[1]);
            render_phase(frame, engine, &state, chunks[2]);
            render_upcoming(frame, engine, chunks[3]);
        }
    }

    render_status_bar(frame, app, chunks[4]);
}

/// Render the header.
fn render_header<S, R>(frame: &mut Frame<'_>, app: &App<'_, S, R>, area: Rect)
where
    S: RoutineSource,
    R: WorkoutRecorder,
{
    let header = Paragraph::new(format!(" {} ", app.routine_name))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the whole-routine progress gauge.
fn render_overall(frame: &mut Frame<'_>, engine: &WorkoutSessionEngine, area: Rect) {
    let progress = engine.total_progress().clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Routine "))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(progress)
        .label(format!("{:.0}%", progress * 100.0));

    frame.render_widget(gauge, area);
}

/// Render the current exercise, set and phase timer.
fn render_phase(
    frame: &mut Frame<'_>,
    engine: &WorkoutSessionEngine,
    state: &SessionState,
    area: Rect,
) {
    let Some(exercise) = engine.current_exercise() else {
        return;
    };

    let resting = state.phase == Phase::Rest;
    let color = if resting { Color::Yellow } else { Color::Green };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Position
            Constraint::Length(1), // Phase label
            Constraint::Length(1), // Target
            Constraint::Length(1), // Clock
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Phase gauge
            Constraint::Min(0),
        ])
        .split(inner);

    let position = format!(
        "Exercise {} of {} - Set {} of {}",
        state.exercise_index + 1,
        engine.exercises().len(),
        state.set_index,
        exercise.set_count
    );
    frame.render_widget(
        Paragraph::new(position)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        rows[0],
    );

    let label = if resting { "Rest" } else { exercise.name.as_str() };
    frame.render_widget(
        Paragraph::new(label)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        rows[1],
    );

    if !resting {
        frame.render_widget(
            Paragraph::new(exercise.target.label()).alignment(Alignment::Center),
            rows[2],
        );
    }

    let mut clock = vec![Span::raw(format_clock(u64::from(state.phase_elapsed_seconds)))];
    if let Some(remaining) = engine.phase_remaining() {
        clock.push(Span::styled(
            format!("   {} left", format_clock(u64::from(remaining))),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if !state.running && !state.completed {
        clock.push(Span::styled(
            "   paused",
            Style::default().fg(Color::Red),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(clock)).alignment(Alignment::Center),
        rows[3],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .ratio(engine.phase_progress().clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, rows[5]);
}

/// Render the next few exercises.
fn render_upcoming(frame: &mut Frame<'_>, engine: &WorkoutSessionEngine, area: Rect) {
    let items: Vec<ListItem<'_>> = engine
        .upcoming(UPCOMING)
        .iter()
        .map(|exercise| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{}  ", exercise.name)),
                Span::styled(
                    format!("{} × {}", exercise.set_count, exercise.target.label()),
                    Style::default().fg(Color::Blue),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Up next ")
            .border_style(Style::default().fg(Color::White)),
    );

    frame.render_widget(list, area);
}

/// Render the status bar.
fn render_status_bar<S, R>(frame: &mut Frame<'_>, app: &App<'_, S, R>, area: Rect)
where
    S: RoutineSource,
    R: WorkoutRecorder,
{
    let text = match app.status.as_deref() {
        Some(status) => format!("{status} | {HELP}"),
        None => HELP.to_string(),
    };

    let status = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

//! Clock formatting and duration parsing for workout timers.

use chrono::Duration;

/// Format seconds as `m:ss`.
#[must_use]
pub fn format_clock(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.num_minutes();

    if total_minutes < 1 {
        let seconds = d.num_seconds();
        return format!("{} second{}", seconds, plural(seconds));
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    match (hours, minutes) {
        (0, m) => format!("{} minute{}", m, plural(m)),
        (h, 0) => format!("{} hour{}", h, plural(h)),
        (h, m) => format!("{} hour{}, {} minute{}", h, plural(h), m, plural(m)),
    }
}

const fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Parse a duration string like "45", "90s", "1m30s", "2m" into seconds.
///
/// A bare number is taken as seconds.
#[must_use]
pub fn parse_duration(s: &str) -> Option<u32> {
    let s = s.trim().to_lowercase();

    if let Ok(seconds) = s.parse::<u32>() {
        return (seconds > 0).then_some(seconds);
    }

    let mut total: u32 = 0;
    let mut current = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            current.push(c);
            continue;
        }
        if current.is_empty() {
            return None;
        }
        let num: u32 = current.parse().ok()?;
        current.clear();

        let unit = match c {
            'h' => 3600,
            'm' => 60,
            's' => 1,
            _ => return None,
        };
        total = total.checked_add(num.checked_mul(unit)?)?;
    }

    // Trailing number without unit counts as seconds.
    if !current.is_empty() {
        total = total.checked_add(current.parse().ok()?)?;
    }

    (total > 0).then_some(total)
}

/// Render a text progress bar for a fraction in `[0, 1]`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    let empty = width - filled;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

//! Date helpers for the workout log.

use chrono::{Datelike, Duration, Local, NaiveDate};

/// The Monday..Sunday week containing `date`, inclusive on both ends.
#[must_use]
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = i64::from(date.weekday().num_days_from_monday());
    let monday = date - Duration::days(offset);
    (monday, monday + Duration::days(6))
}

/// Parse a date given as `today`, `yesterday`, `N days ago` or `YYYY-MM-DD`.
///
/// Returns `None` if the input cannot be parsed.
#[must_use]
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    parse_date_from(input, Local::now().date_naive())
}

fn parse_date_from(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "today" => return Some(today),
        "yesterday" => return Some(today - Duration::days(1)),
        _ => {},
    }

    if let Some(amount) = input
        .strip_suffix(" days ago")
        .or_else(|| input.strip_suffix(" day ago"))
    {
        let days: i64 = amount.trim().parse().ok()?;
        return today.checked_sub_signed(Duration::days(days));
    }

    NaiveDate::parse_from_str(&input, "%Y-%m-%d").ok()
}

use chrono::{Local, NaiveTime, Timelike};

/// Parse a departure time in HH:MM or HH:MM:SS format
///
/// # Errors
///
/// Returns an error if the string is neither a valid HH:MM nor HH:MM:SS time.
pub fn parse_departure_time(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M").or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
}

/// Format a departure time the way the routing service expects it
#[must_use]
pub fn format_departure_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Current local time truncated to the minute
#[must_use]
pub fn current_departure_time() -> NaiveTime {
    let now = Local::now().time();
    now.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}

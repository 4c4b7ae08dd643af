//! Formatting utilities used for CLI outputs.

use chrono::Duration;

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// "1 hour", "4 hours", "2.5 hours".
pub fn format_hours(hours: f64) -> String {
    let unit = if hours == 1.0 { "hour" } else { "hours" };
    if hours.fract() == 0.0 {
        format!("{} {}", hours as i64, unit)
    } else {
        let trimmed = format!("{:.2}", hours);
        let trimmed = trimmed.trim_end_matches('0').trim_end_matches('.');
        format!("{} {}", trimmed, unit)
    }
}

/// Countdown as "02h 25m". Partial minutes round up, so anything left
/// shows at least "00h 01m".
pub fn duration_readable(d: Duration) -> String {
    let millis = d.num_milliseconds().max(0);
    let total_m = (millis + 59_999) / 60_000;
    format!("{:02}h {:02}m", total_m / 60, total_m % 60)
}

/// "1 Cup" / "3 Cups".
pub fn cups(n: usize) -> String {
    if n == 1 {
        "1 Cup".to_string()
    } else {
        format!("{} Cups", n)
    }
}

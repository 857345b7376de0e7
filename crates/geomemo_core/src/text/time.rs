//! Relative-time rendering for note lists.
//!
//! Buckets are evaluated in order against the elapsed whole seconds. Each
//! coarser unit is rounded from the previous rounded unit, so 3661 s reads as
//! `"1 hr ago"` and 5.6 days reads as `"6 days ago"`.

use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;
const RELATIVE_WINDOW_DAYS: i64 = 7;

/// en-US `toLocaleString` shape, e.g. `"3/14/2026, 9:05:00 AM"`.
const ABSOLUTE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Current wall-clock time in epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Renders the age of `timestamp_ms` relative to `now_ms` using the local
/// time zone for the absolute fallback.
pub fn relative_time(timestamp_ms: i64, now_ms: i64) -> String {
    relative_time_in(timestamp_ms, now_ms, &Local)
}

/// Same as [`relative_time`] with an explicit zone for the absolute fallback.
pub fn relative_time_in<Tz>(timestamp_ms: i64, now_ms: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let elapsed_ms = now_ms.saturating_sub(timestamp_ms);
    let seconds = (elapsed_ms as f64 / 1000.0).round() as i64;
    // Future timestamps (clock skew between devices) read as fresh.
    if seconds < SECONDS_PER_MINUTE {
        return "Just now".to_string();
    }

    let minutes = (seconds as f64 / SECONDS_PER_MINUTE as f64).round() as i64;
    if seconds < SECONDS_PER_HOUR {
        return format!("{minutes} min ago");
    }

    let hours = (minutes as f64 / 60.0).round() as i64;
    if seconds < SECONDS_PER_DAY {
        return format!("{hours} hr ago");
    }

    let days = (hours as f64 / 24.0).round() as i64;
    if seconds < RELATIVE_WINDOW_DAYS * SECONDS_PER_DAY {
        let suffix = if days == 1 { "" } else { "s" };
        return format!("{days} day{suffix} ago");
    }

    format_absolute(timestamp_ms, tz)
}

/// Formats an epoch-millisecond timestamp as an absolute date-time in `tz`.
///
/// Timestamps outside chrono's representable range fall back to the raw
/// millisecond value.
pub fn format_absolute<Tz>(timestamp_ms: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::<Utc>::from_timestamp_millis(timestamp_ms) {
        Some(utc) => utc.with_timezone(tz).format(ABSOLUTE_FORMAT).to_string(),
        None => timestamp_ms.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::relative_time_in;
    use chrono::Utc;

    const NOW: i64 = 1_760_000_000_000;

    fn ago(seconds: i64) -> String {
        relative_time_in(NOW - seconds * 1000, NOW, &Utc)
    }

    #[test]
    fn minute_bucket_rounds_seconds() {
        assert_eq!(ago(60), "1 min ago");
        assert_eq!(ago(89), "1 min ago");
        assert_eq!(ago(90), "2 min ago");
        assert_eq!(ago(3599), "60 min ago");
    }

    #[test]
    fn day_bucket_uses_singular_for_one() {
        assert_eq!(ago(86_400), "1 day ago");
        assert_eq!(ago(2 * 86_400), "2 days ago");
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        assert_eq!(ago(-600), "Just now");
    }
}

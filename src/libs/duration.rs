//! Charging duration derived from two time-of-day values.
//!
//! A final time earlier than the initial one means the charge ran past
//! midnight, so a day is added to the difference. The result is always recomputed from
//! the two inputs alone.
//!
//! ```rust
//! use battlog::libs::duration::compute_duration;
//!
//! assert_eq!(compute_duration("09:15", "11:40"), "2 hours 25 mins");
//! assert_eq!(compute_duration("23:30", "01:00"), "1 hours 30 mins");
//! assert_eq!(compute_duration("", "01:00"), "");
//! ```

use chrono::{Duration, NaiveTime};

/// Accepted time-of-day layout, 24-hour.
pub const TIME_FORMAT: &str = "%H:%M";

/// Parses an `HH:MM` value, ignoring surrounding whitespace.
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).ok()
}

/// Elapsed time from `start` to `end`, rolling `end` over to the next day
/// when it is strictly earlier than `start`.
pub fn elapsed(start: NaiveTime, end: NaiveTime) -> Duration {
    let span = end - start;
    if span < Duration::zero() {
        span + Duration::days(1)
    } else {
        span
    }
}

/// Whole minutes in `duration`, rounded to the nearest minute.
pub fn rounded_minutes(duration: Duration) -> i64 {
    (duration.num_seconds() + 30).div_euclid(60)
}

/// Renders a minute count as `"<h> hours <m> mins"`, dropping the zero part.
pub fn format_minutes(total_minutes: i64) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    match (hours, minutes) {
        (0, m) => format!("{} mins", m),
        (h, 0) => format!("{} hours", h),
        (h, m) => format!("{} hours {} mins", h, m),
    }
}

/// Duration label for the two form values, or an empty string when either
/// one is missing or not a valid time of day.
pub fn compute_duration(start: &str, end: &str) -> String {
    match (parse_time_of_day(start), parse_time_of_day(end)) {
        (Some(start), Some(end)) => format_minutes(rounded_minutes(elapsed(start, end))),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_minutes_is_labelled_in_minutes() {
        assert_eq!(format_minutes(0), "0 mins");
    }

    #[test]
    fn rounding_goes_to_the_nearest_minute() {
        assert_eq!(rounded_minutes(Duration::seconds(89)), 1);
        assert_eq!(rounded_minutes(Duration::seconds(90)), 2);
    }

    #[test]
    fn out_of_range_times_are_ignored() {
        assert_eq!(compute_duration("24:00", "01:00"), "");
        assert_eq!(compute_duration("09:60", "10:00"), "");
        assert_eq!(compute_duration("09:00", "later"), "");
    }
}

use chrono::{NaiveTime, Timelike};

const CLOCK_FORMAT: &str = "%H:%M";

/// Tolerant `HH:MM` parse: anything malformed is `None`.
pub fn parse_clock_text(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), CLOCK_FORMAT).ok()
}

pub fn format_clock(time: NaiveTime) -> String {
    time.format(CLOCK_FORMAT).to_string()
}

/// Legacy spreadsheet encoding: `6.5` is 06:30. Minutes rounding up to 60
/// carry into the hour, and the hour wraps modulo 24.
pub fn fractional_hours_to_clock_text(hours: f64) -> Option<String> {
    if !hours.is_finite() || hours < 0.0 {
        return None;
    }
    let mut whole_hours = hours.trunc() as u64;
    let mut minutes = ((hours - hours.trunc()) * 60.0).round() as u64;
    if minutes >= 60 {
        whole_hours += 1;
        minutes -= 60;
    }
    Some(format!("{:02}:{:02}", whole_hours % 24, minutes))
}

/// Hours slept between `sleep` and `wake`, rounded to 2 decimals. A wake time
/// at or before the sleep time falls on the next day. Missing input is 0.0.
pub fn duration_hours(sleep: Option<NaiveTime>, wake: Option<NaiveTime>) -> f64 {
    let (Some(sleep), Some(wake)) = (sleep, wake) else {
        return 0.0;
    };
    let sleep_secs = i64::from(sleep.num_seconds_from_midnight());
    let mut wake_secs = i64::from(wake.num_seconds_from_midnight());
    if wake_secs <= sleep_secs {
        wake_secs += 24 * 3600;
    }
    let hours = (wake_secs - sleep_secs) as f64 / 3600.0;
    (hours * 100.0).round() / 100.0
}

//! Time utilities: epoch-float timestamps as stored in the day logs.

use chrono::{DateTime, Local, Utc};

/// Seconds since the Unix epoch, microsecond precision.
pub fn epoch_seconds(at: DateTime<Local>) -> f64 {
    at.timestamp_micros() as f64 / 1_000_000.0
}

pub fn from_epoch_seconds(t: f64) -> Option<DateTime<Local>> {
    if !t.is_finite() {
        return None;
    }
    let secs = t.floor();
    let nanos = (((t - secs) * 1_000_000_000.0).round() as u32).min(999_999_999);
    DateTime::<Utc>::from_timestamp(secs as i64, nanos).map(|dt| dt.with_timezone(&Local))
}

pub fn format_clock(at: DateTime<Local>) -> String {
    at.format("%H:%M:%S").to_string()
}

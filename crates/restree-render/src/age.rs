//! Human-readable resource ages.

use chrono::{DateTime, TimeDelta, Utc};

/// Age shown when a resource has no creation timestamp.
pub const UNKNOWN_AGE: &str = "<unknown>";

/// Age of a resource relative to `now`, or [`UNKNOWN_AGE`].
pub fn age_since(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    match created_at {
        Some(created_at) => format_age(now - created_at),
        None => UNKNOWN_AGE.to_string(),
    }
}

/// Format an age compactly, keeping at most two units.
///
/// Up to a second of clock skew renders as `0s`; anything further in the
/// future is `<invalid>`.
pub fn format_age(age: TimeDelta) -> String {
    let seconds = age.num_seconds();
    if seconds < -1 {
        return "<invalid>".to_string();
    } else if seconds < 0 {
        return "0s".to_string();
    } else if seconds < 60 * 2 {
        return format!("{seconds}s");
    }

    let minutes = age.num_minutes();
    if minutes < 10 {
        return with_remainder(minutes, "m", seconds % 60, "s");
    } else if minutes < 60 * 3 {
        return format!("{minutes}m");
    }

    let hours = age.num_hours();
    if hours < 8 {
        with_remainder(hours, "h", minutes % 60, "m")
    } else if hours < 48 {
        format!("{hours}h")
    } else if hours < 24 * 8 {
        with_remainder(hours / 24, "d", hours % 24, "h")
    } else if hours < 24 * 365 * 2 {
        format!("{}d", hours / 24)
    } else if hours < 24 * 365 * 8 {
        with_remainder(hours / 24 / 365, "y", (hours / 24) % 365, "d")
    } else {
        format!("{}y", hours / 24 / 365)
    }
}

fn with_remainder(major: i64, major_unit: &str, minor: i64, minor_unit: &str) -> String {
    if minor == 0 {
        format!("{major}{major_unit}")
    } else {
        format!("{major}{major_unit}{minor}{minor_unit}")
    }
}

//! Countdown Duration Formatting
//!
//! Renders a non-negative second count the way the timer display expects:
//! - `"{d}d {h}h {m}m"` at one day or more
//! - `"{h}h {m}m {s}s"` at one hour or more
//! - `"{m}m {s}s"` below one hour

/// Seconds per minute
pub const SECS_PER_MINUTE: u64 = 60;

/// Seconds per hour
pub const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;

/// Seconds per day
pub const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Format a remaining-seconds count for display
pub fn format_remaining(seconds: u64) -> String {
    let days = seconds / SECS_PER_DAY;
    let hours = (seconds % SECS_PER_DAY) / SECS_PER_HOUR;
    let minutes = (seconds % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let secs = seconds % SECS_PER_MINUTE;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else {
        format!("{minutes}m {secs}s")
    }
}

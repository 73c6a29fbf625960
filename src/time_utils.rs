use chrono::{DateTime, Utc};

/// Format epoch milliseconds as `YYYY-MM-DD HH:MM` (UTC).
///
/// Values chrono cannot place on the calendar are shown as the raw number.
pub fn format_epoch_millis(ms: f64) -> String {
    utc_from_millis(ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| ms.to_string())
}

/// Time of day `HH:MM:SS.mmm` (UTC) for log lines.
pub fn format_log_clock(ms: u64) -> String {
    i64::try_from(ms)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.format("%H:%M:%S%.3f").to_string())
        .unwrap_or_else(|| ms.to_string())
}

fn utc_from_millis(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(ms.floor() as i64)
}

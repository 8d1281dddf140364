use chrono::DateTime;
use serde::Serialize;

/// Check whether the given string is blank (empty or whitespace-only)
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Render any serializable value as a JSON string, best-effort
///
/// Intended for log messages and diagnostics; returns an empty string when
/// serialization fails rather than propagating the error.
pub fn to_json_string<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Format epoch milliseconds as a fixed UTC calendar string with millisecond
/// precision, e.g. `2020-09-13 12:26:40.000`
///
/// Deterministic for every representable timestamp; returns an empty string
/// for values beyond the calendar range.
pub fn format_time_millis(ts_millis: u64) -> String {
    i64::try_from(ts_millis)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S%.3f").to_string())
        .unwrap_or_default()
}

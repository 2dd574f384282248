use chrono::{Datelike, NaiveDateTime, Timelike};

/// Render a civil date-time as an RFC 5424 TIMESTAMP, e.g. `2024-03-07T09:05:00Z`.
///
/// The value is taken to be UTC already. Fractional seconds are dropped and
/// years past 9999 widen the field rather than being truncated.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        ts.year(),
        ts.month(),
        ts.day(),
        ts.hour(),
        ts.minute(),
        ts.second()
    )
}

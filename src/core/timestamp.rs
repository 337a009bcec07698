//! Timestamp formatting for log lines

use chrono::{DateTime, Local, TimeZone};

/// strftime pattern of the leading timestamp, e.g. `2025/01/08-10:30:45`
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d-%H:%M:%S";

/// Format a timestamp the way it appears at the start of a log line
///
/// # Examples
///
/// ```
/// use chrono::{Local, TimeZone};
/// use rust_clog::core::timestamp::format_timestamp;
///
/// let ts = Local.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).single().unwrap();
/// assert_eq!(format_timestamp(&ts), "2025/01/08-10:30:45");
/// ```
#[must_use]
pub fn format_timestamp<Tz: TimeZone>(datetime: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    datetime.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time
#[inline]
pub fn now() -> DateTime<Local> {
    Local::now()
}

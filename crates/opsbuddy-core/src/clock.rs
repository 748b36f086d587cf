//! Timestamp Labels

use chrono::{DateTime, Local, TimeZone, Utc};

/// Two-digit hour and minute on a 12-hour clock, e.g. `"09:05 PM"`
const CLOCK_FORMAT: &str = "%I:%M %p";

/// Footer label for a message timestamp in the viewer's local time
pub fn clock_label(timestamp: DateTime<Utc>) -> String {
    clock_label_in(timestamp, &Local)
}

/// Footer label for a message timestamp in the given time zone
pub fn clock_label_in<Tz>(timestamp: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    timestamp.with_timezone(tz).format(CLOCK_FORMAT).to_string()
}

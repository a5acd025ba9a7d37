// src/utils/timestamp.rs

use chrono::{DateTime, SecondsFormat, Utc};

/// Current server time in epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// RFC 3339 rendering of an epoch-millisecond timestamp. `0` means "never" and yields `None`.
pub fn to_rfc3339(millis: i64) -> Option<String> {
    if millis == 0 {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

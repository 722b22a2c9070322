//! Wall-clock helpers shared by the store and query layers.
//!
//! Domain timestamps are Unix epoch milliseconds. Calendar-day comparisons use
//! the process local timezone.

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use std::time::{SystemTime, UNIX_EPOCH};

pub const MINUTE_MS: i64 = 60 * 1000;
pub const HOUR_MS: i64 = 60 * MINUTE_MS;
pub const DAY_MS: i64 = 24 * HOUR_MS;

/// Current time in epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// Converts epoch milliseconds to a local datetime.
///
/// Out-of-range values clamp to the Unix epoch.
pub fn to_local(epoch_ms: i64) -> DateTime<Local> {
    Local
        .timestamp_millis_opt(epoch_ms)
        .single()
        .unwrap_or_else(|| DateTime::<Local>::from(UNIX_EPOCH))
}

/// Local calendar date of an epoch-milliseconds timestamp.
pub fn local_date(epoch_ms: i64) -> NaiveDate {
    to_local(epoch_ms).date_naive()
}

/// Whether two timestamps fall on the same local calendar day.
pub fn is_same_local_day(a_ms: i64, b_ms: i64) -> bool {
    local_date(a_ms) == local_date(b_ms)
}

/// `yyyy-MM-dd HH:mm:ss` in local time.
pub fn format_local_timestamp(epoch_ms: i64) -> String {
    to_local(epoch_ms).format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::{format_local_timestamp, is_same_local_day, now_epoch_ms, HOUR_MS};

    #[test]
    fn now_is_after_2020() {
        assert!(now_epoch_ms() > 1_577_836_800_000);
    }

    #[test]
    fn formatted_timestamp_has_fixed_width() {
        let formatted = format_local_timestamp(1_700_000_000_000);
        assert_eq!(formatted.len(), 19);
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[10..11], " ");
    }

    #[test]
    fn same_day_is_reflexive() {
        let now = now_epoch_ms();
        assert!(is_same_local_day(now, now));
        assert!(!is_same_local_day(now, now + 48 * HOUR_MS));
    }
}

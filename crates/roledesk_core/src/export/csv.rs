//! CSV export of activity log entries.
//!
//! This is a display convenience, not an interchange format: fields are not
//! quoted, and commas in `details` become semicolons so columns stay aligned.

use crate::model::system_log::SystemLogEntry;
use crate::time::{format_local_timestamp, to_local};

pub const LOG_CSV_HEADER: &str = "Timestamp,Action,User,Details";

/// Renders entries in the given order, one line each, without a trailing
/// newline.
pub fn export_logs_csv<'a>(entries: impl IntoIterator<Item = &'a SystemLogEntry>) -> String {
    let mut lines = vec![LOG_CSV_HEADER.to_string()];
    lines.extend(entries.into_iter().map(|entry| {
        [
            format_local_timestamp(entry.timestamp),
            entry.action.clone(),
            entry.user_name.clone(),
            entry.details.replace(',', ";"),
        ]
        .join(",")
    }));
    lines.join("\n")
}

/// `system-logs-YYYY-MM-DD.csv` for the local date of `now`.
pub fn export_file_name(now: i64) -> String {
    format!("system-logs-{}.csv", to_local(now).format("%Y-%m-%d"))
}

//! Activity log filtering and summary counts.

use crate::model::system_log::SystemLogEntry;
use crate::query::contains_ignore_case;
use crate::store::DomainStore;
use crate::time::{is_same_local_day, DAY_MS};
use std::collections::HashSet;

/// Age window applied to log timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogWindow {
    #[default]
    All,
    /// Same local calendar day as `now`.
    Today,
    /// Last 7 days.
    Week,
    /// Last 30 days.
    Month,
}

impl LogWindow {
    pub fn contains(self, timestamp: i64, now: i64) -> bool {
        match self {
            Self::All => true,
            Self::Today => is_same_local_day(timestamp, now),
            Self::Week => timestamp >= now - 7 * DAY_MS,
            Self::Month => timestamp >= now - 30 * DAY_MS,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "all" => Some(Self::All),
            "today" => Some(Self::Today),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
    /// Matched against action, details and user name.
    pub search: String,
    /// Exact action name; `None` means all.
    pub action: Option<String>,
    pub window: LogWindow,
}

impl LogFilter {
    pub fn matches(&self, entry: &SystemLogEntry, now: i64) -> bool {
        let needle = self.search.to_lowercase();
        let search_ok = contains_ignore_case(&entry.action, &needle)
            || contains_ignore_case(&entry.details, &needle)
            || contains_ignore_case(&entry.user_name, &needle);
        let action_ok = self
            .action
            .as_deref()
            .map_or(true, |action| entry.action == action);
        search_ok && action_ok && self.window.contains(entry.timestamp, now)
    }
}

/// Matching entries, newest first.
pub fn filter_logs<'a>(
    store: &'a DomainStore,
    filter: &LogFilter,
    now: i64,
) -> Vec<&'a SystemLogEntry> {
    store
        .system_logs()
        .iter()
        .filter(|entry| filter.matches(entry, now))
        .collect()
}

/// Distinct action names in first-seen (newest-first) order.
pub fn unique_actions(store: &DomainStore) -> Vec<&str> {
    let mut seen = HashSet::new();
    store
        .system_logs()
        .iter()
        .map(|entry| entry.action.as_str())
        .filter(|action| seen.insert(*action))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogStats {
    pub total: usize,
    pub today: usize,
    pub this_week: usize,
    pub unique_users: usize,
}

pub fn log_stats(store: &DomainStore, now: i64) -> LogStats {
    let logs = store.system_logs();
    LogStats {
        total: logs.len(),
        today: logs
            .iter()
            .filter(|entry| LogWindow::Today.contains(entry.timestamp, now))
            .count(),
        this_week: logs
            .iter()
            .filter(|entry| LogWindow::Week.contains(entry.timestamp, now))
            .count(),
        unique_users: logs
            .iter()
            .map(|entry| entry.user_id.as_str())
            .collect::<HashSet<_>>()
            .len(),
    }
}

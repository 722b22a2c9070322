//! Dashboard counters derived from the current store state.

use crate::model::task::TaskStatus;
use crate::store::DomainStore;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub pending_tasks: usize,
    pub total_users: usize,
    pub active_users: usize,
    pub total_notifications: usize,
    pub unread_notifications: usize,
    /// Events strictly after "now".
    pub upcoming_events: usize,
}

impl DomainStore {
    /// Recomputes counters against the store clock.
    pub fn get_stats(&self) -> DashboardStats {
        self.get_stats_at(self.now())
    }

    /// Recomputes counters against an explicit `now`.
    pub fn get_stats_at(&self, now: i64) -> DashboardStats {
        let tasks = self.tasks();
        let notifications = self.notifications();
        DashboardStats {
            total_tasks: tasks.len(),
            completed_tasks: tasks
                .iter()
                .filter(|task| task.status == TaskStatus::Completed)
                .count(),
            pending_tasks: tasks
                .iter()
                .filter(|task| task.status == TaskStatus::Pending)
                .count(),
            total_users: self.users().len(),
            active_users: self.users().iter().filter(|user| user.is_active).count(),
            total_notifications: notifications.len(),
            unread_notifications: notifications.iter().filter(|notif| !notif.read).count(),
            upcoming_events: self.events().iter().filter(|event| event.date > now).count(),
        }
    }
}

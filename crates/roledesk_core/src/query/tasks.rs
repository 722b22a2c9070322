//! Task list filtering.

use crate::model::task::{Task, TaskStatus};
use crate::query::contains_ignore_case;
use crate::store::DomainStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// `None` means all statuses.
    pub status: Option<TaskStatus>,
    /// Matched against title and description.
    pub search: String,
    /// Keep only tasks assigned to or created by this user.
    pub viewer: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        let needle = self.search.to_lowercase();
        let status_ok = self.status.map_or(true, |status| task.status == status);
        let search_ok = contains_ignore_case(&task.title, &needle)
            || contains_ignore_case(&task.description, &needle);
        let viewer_ok = self.viewer.as_deref().map_or(true, |viewer| {
            task.assigned_to == viewer || task.created_by == viewer
        });
        status_ok && search_ok && viewer_ok
    }
}

/// Tasks in insertion order that pass `filter`.
pub fn filter_tasks<'a>(store: &'a DomainStore, filter: &TaskFilter) -> Vec<&'a Task> {
    store
        .tasks()
        .iter()
        .filter(|task| filter.matches(task))
        .collect()
}

pub fn count_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> TaskCounts {
    tasks
        .into_iter()
        .fold(TaskCounts::default(), |mut counts, task| {
            counts.total += 1;
            match task.status {
                TaskStatus::Pending => counts.pending += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                TaskStatus::Completed => counts.completed += 1,
            }
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::{count_tasks, filter_tasks, TaskFilter};
    use crate::model::task::TaskStatus;
    use crate::store::DomainStore;

    fn fixed_now() -> i64 {
        1_700_000_000_000
    }

    #[test]
    fn viewer_scope_keeps_assigned_or_created() {
        let store = DomainStore::seeded_with_clock(fixed_now);
        let filter = TaskFilter {
            viewer: Some("2".to_string()),
            ..TaskFilter::default()
        };
        let ids: Vec<_> = filter_tasks(&store, &filter)
            .into_iter()
            .map(|task| task.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn search_and_status_combine() {
        let store = DomainStore::seeded_with_clock(fixed_now);
        let filter = TaskFilter {
            status: Some(TaskStatus::Completed),
            search: "SLIDES".to_string(),
            viewer: None,
        };
        let tasks = filter_tasks(&store, &filter);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "3");

        let counts = count_tasks(store.tasks());
        assert_eq!(counts.total, 3);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.in_progress, 1);
        assert_eq!(counts.completed, 1);
    }
}

//! Personal activity summary for the analytics page.

use crate::model::task::{TaskPriority, TaskStatus};
use crate::store::DomainStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserActivity {
    /// Tasks assigned to or created by the viewer.
    pub tasks: usize,
    pub completed_tasks: usize,
    /// `completed_tasks / tasks` as a rounded percentage; 0 with no tasks.
    pub completion_rate_percent: u32,
    /// Viewer tasks that are completed or not yet due.
    pub on_track_tasks: usize,
    /// Events the viewer attends or created.
    pub events: usize,
    pub documents: usize,
    /// Counts over all tasks, highest priority first.
    pub priority_breakdown: Vec<(TaskPriority, usize)>,
}

pub fn user_activity(store: &DomainStore, viewer: &str, now: i64) -> UserActivity {
    let tasks: Vec<_> = store
        .tasks()
        .iter()
        .filter(|task| task.assigned_to == viewer || task.created_by == viewer)
        .collect();
    let completed_tasks = tasks
        .iter()
        .filter(|task| task.status == TaskStatus::Completed)
        .count();
    let completion_rate_percent = if tasks.is_empty() {
        0
    } else {
        ((completed_tasks as f64 / tasks.len() as f64) * 100.0).round() as u32
    };
    let on_track_tasks = tasks
        .iter()
        .filter(|task| task.due_date >= now || task.status == TaskStatus::Completed)
        .count();

    UserActivity {
        tasks: tasks.len(),
        completed_tasks,
        completion_rate_percent,
        on_track_tasks,
        events: store
            .events()
            .iter()
            .filter(|event| event.has_attendee(viewer) || event.created_by == viewer)
            .count(),
        documents: store
            .documents()
            .iter()
            .filter(|document| document.uploaded_by == viewer)
            .count(),
        priority_breakdown: TaskPriority::ALL
            .iter()
            .map(|priority| {
                let count = store
                    .tasks()
                    .iter()
                    .filter(|task| task.priority == *priority)
                    .count();
                (*priority, count)
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::user_activity;
    use crate::model::task::TaskPriority;
    use crate::store::DomainStore;

    fn fixed_now() -> i64 {
        1_700_000_000_000
    }

    #[test]
    fn admin_activity_over_seed_data() {
        let store = DomainStore::seeded_with_clock(fixed_now);
        let activity = user_activity(&store, "1", fixed_now());
        assert_eq!(activity.tasks, 3);
        assert_eq!(activity.completed_tasks, 1);
        assert_eq!(activity.completion_rate_percent, 33);
        assert_eq!(activity.on_track_tasks, 3);
        assert_eq!(activity.events, 2);
        assert_eq!(activity.documents, 1);
        assert_eq!(
            activity.priority_breakdown,
            vec![
                (TaskPriority::High, 2),
                (TaskPriority::Medium, 1),
                (TaskPriority::Low, 0)
            ]
        );
    }

    #[test]
    fn unknown_viewer_has_zero_rate() {
        let store = DomainStore::seeded_with_clock(fixed_now);
        let activity = user_activity(&store, "404", fixed_now());
        assert_eq!(activity.tasks, 0);
        assert_eq!(activity.completion_rate_percent, 0);
    }
}

//! Task records and their lifecycle enums.
//!
//! # Invariants
//! - `completed_at` is set by the store on the transition into `Completed`
//!   and cleared on the transition out of it.
//! - `due_date < created_at` is allowed.

use crate::model::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [Self::High, Self::Medium, Self::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    /// Parses the wire id (`pending|in-progress|completed`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "pending" => Some(Self::Pending),
            "in-progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub assigned_to: EntityId,
    pub created_by: EntityId,
    /// Epoch milliseconds.
    pub created_at: i64,
    /// Epoch milliseconds.
    pub due_date: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
}

/// Input for `DomainStore::create_task`; `id` and `created_at` are assigned by
/// the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub assigned_to: EntityId,
    pub created_by: EntityId,
    pub due_date: i64,
}

impl NewTask {
    /// Pending, medium-priority task with empty description and references.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            priority: TaskPriority::Medium,
            status: TaskStatus::Pending,
            assigned_to: EntityId::new(),
            created_by: EntityId::new(),
            due_date: 0,
        }
    }
}

/// Partial update merged into an existing task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    pub assigned_to: Option<EntityId>,
    pub due_date: Option<i64>,
}

impl TaskPatch {
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl Task {
    /// Merges `patch` and maintains `completed_at` against `now`.
    pub(crate) fn apply(&mut self, patch: TaskPatch, now: i64) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(assigned_to) = patch.assigned_to {
            self.assigned_to = assigned_to;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(status) = patch.status {
            match (self.status, status) {
                (TaskStatus::Completed, TaskStatus::Completed) => {}
                (_, TaskStatus::Completed) => self.completed_at = Some(now),
                (_, TaskStatus::Pending | TaskStatus::InProgress) => self.completed_at = None,
            }
            self.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskPatch, TaskPriority, TaskStatus};

    fn pending_task() -> Task {
        Task {
            id: "t".to_string(),
            title: "title".to_string(),
            description: String::new(),
            priority: TaskPriority::Low,
            status: TaskStatus::Pending,
            assigned_to: "2".to_string(),
            created_by: "1".to_string(),
            created_at: 10,
            due_date: 5,
            completed_at: None,
        }
    }

    #[test]
    fn completing_stamps_and_reopening_clears() {
        let mut task = pending_task();
        task.apply(TaskPatch::status(TaskStatus::Completed), 100);
        assert_eq!(task.completed_at, Some(100));

        task.apply(TaskPatch::status(TaskStatus::Completed), 200);
        assert_eq!(task.completed_at, Some(100));

        task.apply(TaskPatch::status(TaskStatus::InProgress), 300);
        assert_eq!(task.completed_at, None);
        assert_eq!(task.status, TaskStatus::InProgress);
    }

    #[test]
    fn status_uses_kebab_case_on_the_wire() {
        let json = serde_json::to_value(pending_task()).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["assignedTo"], "2");
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(TaskStatus::parse("in-progress"), Some(TaskStatus::InProgress));
    }
}

//! Task mutators.

use crate::model::new_entity_id;
use crate::model::system_log::{ACTION_TASK_COMPLETED, ACTION_TASK_CREATED, ACTION_TASK_DELETED};
use crate::model::task::{NewTask, Task, TaskPatch, TaskStatus};
use crate::model::EntityId;
use crate::store::DomainStore;
use log::debug;

impl DomainStore {
    /// Appends a task with a fresh id and `created_at = now`.
    ///
    /// Logs `Task Created` attributed to `created_by`.
    pub fn create_task(&mut self, new_task: NewTask) -> EntityId {
        let now = self.now();
        let completed_at = (new_task.status == TaskStatus::Completed).then_some(now);
        let task = Task {
            id: new_entity_id(),
            title: new_task.title,
            description: new_task.description,
            priority: new_task.priority,
            status: new_task.status,
            assigned_to: new_task.assigned_to,
            created_by: new_task.created_by,
            created_at: now,
            due_date: new_task.due_date,
            completed_at,
        };
        let id = task.id.clone();
        let details = format!("Created task: {}", task.title);
        let created_by = task.created_by.clone();
        self.tasks.push(task);
        debug!("event=task_create module=store status=ok");
        self.add_system_log(ACTION_TASK_CREATED, created_by, "User", details);
        id
    }

    /// Merges `patch` into the task with `id`.
    ///
    /// A patch whose status is `Completed` always logs `Task Completed`, even
    /// when no task matched.
    pub fn update_task(&mut self, id: &str, patch: TaskPatch) {
        let now = self.now();
        let completes = patch.status == Some(TaskStatus::Completed);
        let log_user_id = patch.assigned_to.clone().unwrap_or_default();

        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.apply(patch, now);
                debug!("event=task_update module=store status=ok");
            }
            None => debug!("event=task_update module=store status=noop reason=not_found"),
        }

        if completes {
            self.add_system_log(
                ACTION_TASK_COMPLETED,
                log_user_id,
                "User",
                format!("Completed task: {id}"),
            );
        }
    }

    /// Removes the task with `id`; logs `Task Deleted` unconditionally.
    pub fn delete_task(&mut self, id: &str) {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        debug!(
            "event=task_delete module=store status=ok removed={}",
            before - self.tasks.len()
        );
        self.add_system_log(ACTION_TASK_DELETED, "", "User", format!("Deleted task: {id}"));
    }
}

//! Activity log entries.

use crate::model::EntityId;
use serde::{Deserialize, Serialize};

pub const ACTION_TASK_CREATED: &str = "Task Created";
pub const ACTION_TASK_COMPLETED: &str = "Task Completed";
pub const ACTION_TASK_DELETED: &str = "Task Deleted";
pub const ACTION_EVENT_CREATED: &str = "Event Created";
pub const ACTION_EVENT_DELETED: &str = "Event Deleted";
pub const ACTION_DOCUMENT_UPLOADED: &str = "Document Uploaded";
pub const ACTION_DOCUMENT_DELETED: &str = "Document Deleted";
pub const ACTION_USER_CREATED: &str = "User Created";
pub const ACTION_USER_UPDATED: &str = "User Updated";
pub const ACTION_USER_DELETED: &str = "User Deleted";
pub const ACTION_PROFILE_UPDATED: &str = "Profile Updated";
pub const ACTION_SETTINGS_UPDATED: &str = "Settings Updated";
pub const ACTION_USER_LOGIN: &str = "User Login";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemLogEntry {
    pub id: EntityId,
    pub action: String,
    pub user_id: EntityId,
    pub user_name: String,
    pub timestamp: i64,
    pub details: String,
}

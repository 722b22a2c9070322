//! Demo dataset loaded by `DomainStore::seeded`.
//!
//! Relative timestamps are anchored at the `now` passed in.

use crate::model::document::Document;
use crate::model::event::Event;
use crate::model::notification::{Notification, NotificationKind};
use crate::model::role::Role;
use crate::model::system_log::{
    SystemLogEntry, ACTION_TASK_CREATED, ACTION_USER_LOGIN, ACTION_USER_UPDATED,
};
use crate::model::task::{Task, TaskPriority, TaskStatus};
use crate::model::user::{AppUser, Theme, UserSettings};
use crate::time::{DAY_MS, HOUR_MS};

pub(crate) struct SeedData {
    pub users: Vec<AppUser>,
    pub tasks: Vec<Task>,
    pub notifications: Vec<Notification>,
    pub events: Vec<Event>,
    pub documents: Vec<Document>,
    /// Newest first.
    pub system_logs: Vec<SystemLogEntry>,
}

pub(crate) fn seed_data(now: i64) -> SeedData {
    SeedData {
        users: seed_users(now),
        tasks: seed_tasks(now),
        notifications: seed_notifications(now),
        events: seed_events(now),
        documents: seed_documents(now),
        system_logs: seed_system_logs(now),
    }
}

fn user(
    id: &str,
    email: &str,
    name: &str,
    role: Role,
    is_active: bool,
    last_login: i64,
    settings: UserSettings,
) -> AppUser {
    AppUser {
        id: id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        role,
        avatar: None,
        last_login: Some(last_login),
        is_active,
        settings,
    }
}

fn seed_users(now: i64) -> Vec<AppUser> {
    vec![
        user(
            "1",
            "admin@example.com",
            "Admin User",
            Role::Admin,
            true,
            now,
            UserSettings::default(),
        ),
        user(
            "2",
            "worker@example.com",
            "Worker User",
            Role::Worker,
            true,
            now - 2 * HOUR_MS,
            UserSettings::default(),
        ),
        user(
            "3",
            "user@example.com",
            "Regular User",
            Role::User,
            true,
            now - HOUR_MS,
            UserSettings::default(),
        ),
        user(
            "4",
            "john.doe@example.com",
            "John Doe",
            Role::User,
            false,
            now - DAY_MS,
            UserSettings {
                notifications: false,
                theme: Theme::Dark,
                language: "en".to_string(),
            },
        ),
    ]
}

fn seed_tasks(now: i64) -> Vec<Task> {
    vec![
        Task {
            id: "1".to_string(),
            title: "Complete project documentation".to_string(),
            description: "Write comprehensive documentation for the new authentication system"
                .to_string(),
            priority: TaskPriority::High,
            status: TaskStatus::InProgress,
            assigned_to: "2".to_string(),
            created_by: "1".to_string(),
            created_at: now - 2 * DAY_MS,
            due_date: now + 2 * DAY_MS,
            completed_at: None,
        },
        Task {
            id: "2".to_string(),
            title: "Review code changes".to_string(),
            description: "Review the latest pull request for security improvements".to_string(),
            priority: TaskPriority::Medium,
            status: TaskStatus::Pending,
            assigned_to: "1".to_string(),
            created_by: "2".to_string(),
            created_at: now - DAY_MS,
            due_date: now + DAY_MS,
            completed_at: None,
        },
        Task {
            id: "3".to_string(),
            title: "Update client presentation".to_string(),
            description: "Prepare slides for the quarterly business review".to_string(),
            priority: TaskPriority::High,
            status: TaskStatus::Completed,
            assigned_to: "3".to_string(),
            created_by: "1".to_string(),
            created_at: now - 3 * DAY_MS,
            due_date: now - DAY_MS,
            completed_at: Some(now - DAY_MS),
        },
    ]
}

fn seed_notifications(now: i64) -> Vec<Notification> {
    vec![
        Notification {
            id: "1".to_string(),
            title: "New Task Assigned".to_string(),
            message: "You have been assigned a new high-priority task".to_string(),
            kind: NotificationKind::Info,
            read: false,
            created_at: now - 2 * HOUR_MS,
            user_id: "2".to_string(),
        },
        Notification {
            id: "2".to_string(),
            title: "System Maintenance".to_string(),
            message: "Scheduled maintenance will occur tonight at 2 AM".to_string(),
            kind: NotificationKind::Warning,
            read: false,
            created_at: now - 4 * HOUR_MS,
            user_id: "1".to_string(),
        },
        Notification {
            id: "3".to_string(),
            title: "Task Completed".to_string(),
            message: "Your task \"Update client presentation\" has been completed".to_string(),
            kind: NotificationKind::Success,
            read: true,
            created_at: now - 6 * HOUR_MS,
            user_id: "3".to_string(),
        },
    ]
}

fn seed_events(now: i64) -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            title: "Team Meeting".to_string(),
            description: "Weekly team sync and project updates".to_string(),
            date: now + 2 * DAY_MS,
            duration_minutes: 60,
            attendees: vec!["1".to_string(), "2".to_string(), "3".to_string()],
            created_by: "1".to_string(),
        },
        Event {
            id: "2".to_string(),
            title: "Client Presentation".to_string(),
            description: "Quarterly business review with key stakeholders".to_string(),
            date: now + 5 * DAY_MS,
            duration_minutes: 120,
            attendees: vec!["1".to_string(), "3".to_string()],
            created_by: "1".to_string(),
        },
    ]
}

fn seed_documents(now: i64) -> Vec<Document> {
    vec![
        Document {
            id: "1".to_string(),
            name: "Project Requirements.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            size_bytes: 2_048_576,
            uploaded_by: "1".to_string(),
            uploaded_at: now - 7 * DAY_MS,
            content: None,
        },
        Document {
            id: "2".to_string(),
            name: "System Architecture.docx".to_string(),
            mime_type:
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
                    .to_string(),
            size_bytes: 1_024_768,
            uploaded_by: "2".to_string(),
            uploaded_at: now - 3 * DAY_MS,
            content: None,
        },
    ]
}

fn seed_system_logs(now: i64) -> Vec<SystemLogEntry> {
    let entry = |id: &str, action: &str, timestamp: i64, details: &str| SystemLogEntry {
        id: id.to_string(),
        action: action.to_string(),
        user_id: "1".to_string(),
        user_name: "Admin User".to_string(),
        timestamp,
        details: details.to_string(),
    };
    vec![
        entry(
            "1",
            ACTION_USER_LOGIN,
            now,
            "Successful login from IP 192.168.1.100",
        ),
        entry(
            "2",
            ACTION_TASK_CREATED,
            now - HOUR_MS,
            "Created task: Complete project documentation",
        ),
        entry(
            "3",
            ACTION_USER_UPDATED,
            now - 2 * HOUR_MS,
            "Updated user profile for john.doe@example.com",
        ),
    ]
}

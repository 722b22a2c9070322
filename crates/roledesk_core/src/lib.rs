//! Core logic for the roledesk dashboard.
//!
//! This crate owns the session, the in-memory domain collections and the
//! role-gated routing decisions. Presentation layers only read from it and
//! call its mutators.

pub mod access;
pub mod auth;
pub mod db;
pub mod export;
pub mod logging;
pub mod model;
pub mod query;
pub mod storage;
pub mod store;
pub mod time;

pub use access::guard::{check as check_access, evaluate as evaluate_access, home_route, GuardDecision};
pub use access::routes::{
    nav_links, navigate, resolve_path, NavLink, Navigation, Route, RouteAccess, RouteTarget,
};
pub use auth::identity::{IdentityError, IdentityResult, IdentityStore, SESSION_STORAGE_KEY};
pub use export::csv::{export_file_name, export_logs_csv};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::document::{Document, DocumentKind, NewDocument};
pub use model::event::{Event, EventPatch, NewEvent};
pub use model::notification::{NewNotification, Notification, NotificationKind};
pub use model::role::{parse_role, Role, RoleParseError};
pub use model::session::Session;
pub use model::system_log::SystemLogEntry;
pub use model::task::{NewTask, Task, TaskPatch, TaskPriority, TaskStatus};
pub use model::user::{AppUser, NewUser, Theme, UserPatch, UserSettings};
pub use model::EntityId;
pub use storage::local_storage::{
    LocalStorage, MemoryLocalStorage, SqliteLocalStorage, StorageError, StorageResult,
};
pub use store::{DashboardStats, DomainStore, SystemLogRing, SYSTEM_LOG_CAPACITY};

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

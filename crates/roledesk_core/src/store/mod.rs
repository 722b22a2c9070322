//! In-memory domain store.
//!
//! # Responsibility
//! - Own every dashboard collection for the lifetime of the process.
//! - Expose the only mutation paths for those collections.
//! - Record activity in the ring-bounded system log.
//!
//! # Invariants
//! - Collections are mutated only through `DomainStore` methods.
//! - Mutators never fail; unknown ids are silent no-ops.
//! - Store-created ids are unique within their collection.
//! - No cascade on delete; cross-references may dangle.

mod documents;
mod events;
pub mod log_ring;
mod notifications;
mod seed;
pub mod stats;
mod tasks;
mod users;

use crate::model::document::Document;
use crate::model::event::Event;
use crate::model::new_entity_id;
use crate::model::notification::Notification;
use crate::model::system_log::SystemLogEntry;
use crate::model::task::Task;
use crate::model::user::AppUser;
use crate::time::now_epoch_ms;
use log::debug;

pub use log_ring::{SystemLogRing, SYSTEM_LOG_CAPACITY};
pub use stats::DashboardStats;

/// Clock used for `created_at`, log timestamps and stats.
pub type Clock = fn() -> i64;

/// Process-wide container for dashboard entities.
#[derive(Debug, Clone)]
pub struct DomainStore {
    users: Vec<AppUser>,
    tasks: Vec<Task>,
    notifications: Vec<Notification>,
    events: Vec<Event>,
    documents: Vec<Document>,
    system_logs: SystemLogRing,
    clock: Clock,
}

impl DomainStore {
    /// Empty store using the wall clock.
    pub fn empty() -> Self {
        Self::empty_with_clock(now_epoch_ms)
    }

    pub fn empty_with_clock(clock: Clock) -> Self {
        Self {
            users: Vec::new(),
            tasks: Vec::new(),
            notifications: Vec::new(),
            events: Vec::new(),
            documents: Vec::new(),
            system_logs: SystemLogRing::default(),
            clock,
        }
    }

    /// Store loaded with the demo dataset, anchored at the wall clock.
    pub fn seeded() -> Self {
        Self::seeded_with_clock(now_epoch_ms)
    }

    /// Store loaded with the demo dataset, anchored at `clock()`.
    pub fn seeded_with_clock(clock: Clock) -> Self {
        let data = seed::seed_data(clock());
        let mut store = Self::empty_with_clock(clock);
        store.users = data.users;
        store.tasks = data.tasks;
        store.notifications = data.notifications;
        store.events = data.events;
        store.documents = data.documents;
        for entry in data.system_logs.into_iter().rev() {
            store.system_logs.push_front(entry);
        }
        debug!(
            "event=store_seed module=store status=ok users={} tasks={} notifications={} events={} documents={} logs={}",
            store.users.len(),
            store.tasks.len(),
            store.notifications.len(),
            store.events.len(),
            store.documents.len(),
            store.system_logs.len()
        );
        store
    }

    pub fn now(&self) -> i64 {
        (self.clock)()
    }

    pub fn users(&self) -> &[AppUser] {
        &self.users
    }

    pub fn user(&self, id: &str) -> Option<&AppUser> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Activity log, newest first.
    pub fn system_logs(&self) -> &SystemLogRing {
        &self.system_logs
    }

    /// Prepends one activity entry; the ring keeps the newest
    /// `SYSTEM_LOG_CAPACITY` entries.
    pub fn add_system_log(
        &mut self,
        action: impl Into<String>,
        user_id: impl Into<String>,
        user_name: impl Into<String>,
        details: impl Into<String>,
    ) {
        let entry = SystemLogEntry {
            id: new_entity_id(),
            action: action.into(),
            user_id: user_id.into(),
            user_name: user_name.into(),
            timestamp: self.now(),
            details: details.into(),
        };
        debug!(
            "event=system_log_append module=store status=ok action={:?}",
            entry.action
        );
        self.system_logs.push_front(entry);
    }
}

impl Default for DomainStore {
    fn default() -> Self {
        Self::seeded()
    }
}

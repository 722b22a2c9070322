//! Calendar events.

use crate::model::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    /// Start time, epoch milliseconds.
    pub date: i64,
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    /// Attendee user ids, unique, in insertion order.
    pub attendees: Vec<EntityId>,
    pub created_by: EntityId,
}

impl Event {
    pub fn has_attendee(&self, user_id: &str) -> bool {
        self.attendees.iter().any(|attendee| attendee == user_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: i64,
    pub duration_minutes: u32,
    pub attendees: Vec<EntityId>,
    pub created_by: EntityId,
}

impl NewEvent {
    /// One-hour event with the creator as the only attendee.
    pub fn new(title: impl Into<String>, date: i64, created_by: impl Into<EntityId>) -> Self {
        let created_by = created_by.into();
        Self {
            title: title.into(),
            description: String::new(),
            date,
            duration_minutes: 60,
            attendees: vec![created_by.clone()],
            created_by,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<i64>,
    pub duration_minutes: Option<u32>,
    pub attendees: Option<Vec<EntityId>>,
}

impl Event {
    pub(crate) fn apply(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(duration_minutes) = patch.duration_minutes {
            self.duration_minutes = duration_minutes;
        }
        if let Some(attendees) = patch.attendees {
            self.attendees = dedup_attendees(attendees);
        }
    }
}

/// Drops repeated ids, keeping the first occurrence.
pub(crate) fn dedup_attendees(attendees: Vec<EntityId>) -> Vec<EntityId> {
    let mut unique: Vec<EntityId> = Vec::with_capacity(attendees.len());
    for attendee in attendees {
        if !unique.contains(&attendee) {
            unique.push(attendee);
        }
    }
    unique
}

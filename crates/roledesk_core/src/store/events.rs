//! Calendar event mutators.

use crate::model::event::{dedup_attendees, Event, EventPatch, NewEvent};
use crate::model::new_entity_id;
use crate::model::system_log::{ACTION_EVENT_CREATED, ACTION_EVENT_DELETED};
use crate::model::EntityId;
use crate::store::DomainStore;

impl DomainStore {
    /// Logs `Event Created` attributed to `created_by`.
    pub fn create_event(&mut self, new_event: NewEvent) -> EntityId {
        let event = Event {
            id: new_entity_id(),
            title: new_event.title,
            description: new_event.description,
            date: new_event.date,
            duration_minutes: new_event.duration_minutes,
            attendees: dedup_attendees(new_event.attendees),
            created_by: new_event.created_by,
        };
        let id = event.id.clone();
        let details = format!("Created event: {}", event.title);
        let created_by = event.created_by.clone();
        self.events.push(event);
        self.add_system_log(ACTION_EVENT_CREATED, created_by, "User", details);
        id
    }

    pub fn update_event(&mut self, id: &str, patch: EventPatch) {
        if let Some(event) = self.events.iter_mut().find(|event| event.id == id) {
            event.apply(patch);
        }
    }

    /// Logs `Event Deleted` unconditionally.
    pub fn delete_event(&mut self, id: &str) {
        self.events.retain(|event| event.id != id);
        self.add_system_log(ACTION_EVENT_DELETED, "", "User", format!("Deleted event: {id}"));
    }
}

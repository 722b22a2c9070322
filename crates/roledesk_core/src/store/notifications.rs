//! Notification mutators. None of these write to the activity log.

use crate::model::new_entity_id;
use crate::model::notification::{NewNotification, Notification};
use crate::model::EntityId;
use crate::store::DomainStore;

impl DomainStore {
    pub fn create_notification(&mut self, new_notification: NewNotification) -> EntityId {
        let notification = Notification {
            id: new_entity_id(),
            title: new_notification.title,
            message: new_notification.message,
            kind: new_notification.kind,
            read: new_notification.read,
            created_at: self.now(),
            user_id: new_notification.user_id,
        };
        let id = notification.id.clone();
        self.notifications.push(notification);
        id
    }

    pub fn mark_notification_read(&mut self, id: &str) {
        if let Some(notification) = self.notifications.iter_mut().find(|notif| notif.id == id) {
            notification.read = true;
        }
    }

    /// Marks every notification addressed to `user_id` as read.
    pub fn clear_all_notifications(&mut self, user_id: &str) {
        self.notifications
            .iter_mut()
            .filter(|notif| notif.user_id == user_id)
            .for_each(|notif| notif.read = true);
    }
}

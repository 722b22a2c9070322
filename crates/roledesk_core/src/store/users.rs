//! User-management mutators and self-service profile/settings updates.
//!
//! Deleting a user leaves tasks, events and documents that reference it
//! untouched.

use crate::model::new_entity_id;
use crate::model::session::Session;
use crate::model::system_log::{
    ACTION_PROFILE_UPDATED, ACTION_SETTINGS_UPDATED, ACTION_USER_CREATED, ACTION_USER_DELETED,
    ACTION_USER_UPDATED,
};
use crate::model::user::{AppUser, NewUser, UserPatch, UserSettings};
use crate::model::EntityId;
use crate::store::DomainStore;

impl DomainStore {
    /// New users start without `last_login`.
    pub fn create_user(&mut self, new_user: NewUser) -> EntityId {
        let user = AppUser {
            id: new_entity_id(),
            email: new_user.email,
            name: new_user.name,
            role: new_user.role,
            avatar: new_user.avatar,
            last_login: None,
            is_active: new_user.is_active,
            settings: new_user.settings,
        };
        let id = user.id.clone();
        let details = format!("Created user: {}", user.email);
        self.users.push(user);
        self.add_system_log(ACTION_USER_CREATED, "", "Admin", details);
        id
    }

    pub fn update_user(&mut self, id: &str, patch: UserPatch) {
        if let Some(user) = self.users.iter_mut().find(|user| user.id == id) {
            user.apply(patch);
        }
        self.add_system_log(ACTION_USER_UPDATED, id, "Admin", format!("Updated user: {id}"));
    }

    pub fn delete_user(&mut self, id: &str) {
        self.users.retain(|user| user.id != id);
        self.add_system_log(ACTION_USER_DELETED, "", "Admin", format!("Deleted user: {id}"));
    }

    /// Self-service name/email edit for the signed-in user.
    pub fn update_profile(
        &mut self,
        session: &Session,
        name: impl Into<String>,
        email: impl Into<String>,
    ) {
        self.update_user(
            &session.id,
            UserPatch {
                name: Some(name.into()),
                email: Some(email.into()),
                ..UserPatch::default()
            },
        );
        self.add_system_log(
            ACTION_PROFILE_UPDATED,
            session.id.clone(),
            session.name.clone(),
            "Updated profile information",
        );
    }

    /// Replaces the signed-in user's settings.
    pub fn save_settings(&mut self, session: &Session, settings: UserSettings) {
        self.update_user(
            &session.id,
            UserPatch {
                settings: Some(settings),
                ..UserPatch::default()
            },
        );
        self.add_system_log(
            ACTION_SETTINGS_UPDATED,
            session.id.clone(),
            session.name.clone(),
            "Updated account settings",
        );
    }
}

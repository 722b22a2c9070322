//! Managed user accounts.

use crate::model::role::Role;
use crate::model::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// Per-user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub notifications: bool,
    pub theme: Theme,
    pub language: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            notifications: true,
            theme: Theme::Light,
            language: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUser {
    pub id: EntityId,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<i64>,
    pub is_active: bool,
    pub settings: UserSettings,
}

/// Input for `DomainStore::create_user`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub role: Role,
    pub avatar: Option<String>,
    pub is_active: bool,
    pub settings: UserSettings,
}

impl NewUser {
    /// Active user with default settings.
    pub fn new(email: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            role,
            avatar: None,
            is_active: true,
            settings: UserSettings::default(),
        }
    }
}

/// Partial update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<Role>,
    pub avatar: Option<String>,
    pub last_login: Option<i64>,
    pub is_active: Option<bool>,
    pub settings: Option<UserSettings>,
}

impl AppUser {
    pub(crate) fn apply(&mut self, patch: UserPatch) {
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = Some(avatar);
        }
        if let Some(last_login) = patch.last_login {
            self.last_login = Some(last_login);
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        if let Some(settings) = patch.settings {
            self.settings = settings;
        }
    }
}

//! Closed set of dashboard roles.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Role carried by a session and a user record.
///
/// Adding a variant is a compile-time change at every `match` site (guard,
/// routing, navigation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Worker,
    User,
}

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_WORKER: &str = "worker";
pub const ROLE_USER: &str = "user";

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Worker, Role::User];

    /// Stable lowercase id used in storage and CLI input.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => ROLE_ADMIN,
            Self::Worker => ROLE_WORKER,
            Self::User => ROLE_USER,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a role from its lowercase id.
pub fn parse_role(value: &str) -> Result<Role, RoleParseError> {
    match value.trim() {
        "" => Err(RoleParseError::Empty),
        ROLE_ADMIN => Ok(Role::Admin),
        ROLE_WORKER => Ok(Role::Worker),
        ROLE_USER => Ok(Role::User),
        other => Err(RoleParseError::Unsupported(other.to_string())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleParseError {
    Empty,
    Unsupported(String),
}

impl Display for RoleParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "role value must not be empty"),
            Self::Unsupported(value) => write!(f, "role is unsupported: {value}"),
        }
    }
}

impl Error for RoleParseError {}

//! Authenticated session record.

use crate::model::role::Role;
use crate::model::EntityId;
use serde::{Deserialize, Serialize};

/// The currently authenticated actor.
///
/// Serialized as `{"id","email","name","role"}`; this is the exact record kept
/// in durable local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: EntityId,
    pub email: String,
    pub name: String,
    pub role: Role,
}

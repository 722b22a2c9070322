//! Dashboard domain model.
//!
//! # Responsibility
//! - Define the records held by the identity and domain stores.
//! - Keep wire naming aligned with the stored session record (`camelCase`).
//!
//! # Invariants
//! - Every entity is identified by an `EntityId` unique within its collection.
//! - Cross-entity references (`assigned_to`, `uploaded_by`, `user_id`,
//!   `attendees`) are soft and may dangle.

pub mod document;
pub mod event;
pub mod notification;
pub mod role;
pub mod session;
pub mod system_log;
pub mod task;
pub mod user;

/// Identifier shared by all dashboard entities.
pub type EntityId = String;

/// Generates a fresh entity id for store-created records.
pub fn new_entity_id() -> EntityId {
    uuid::Uuid::new_v4().to_string()
}

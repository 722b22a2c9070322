//! Client-side authentication.
//!
//! # Responsibility
//! - Hold the single active `Session`.
//! - Check login attempts against the static credential table.
//! - Mirror the session into durable local storage.
//!
//! # Invariants
//! - At most one session exists per `IdentityStore`.
//! - A session's role never changes after login.
//! - Secrets are never logged.

pub mod credentials;
pub mod identity;

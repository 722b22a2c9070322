//! Durable key/value storage for client-side state.
//!
//! # Responsibility
//! - Define the `LocalStorage` contract used by the identity store.
//! - Provide SQLite-backed and in-memory implementations.
//!
//! # Invariants
//! - Keys are opaque strings; values are stored verbatim.
//! - Removing a missing key is not an error.

pub mod local_storage;

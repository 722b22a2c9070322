//! Role-gated access and routing.
//!
//! The guard is a pure function of `(loading, session, required role)`; the
//! route table maps paths to pages and their role requirements.

pub mod guard;
pub mod routes;

//! Client-side export formats.

pub mod csv;

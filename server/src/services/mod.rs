//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own file access and decoding so route handlers can stay
//! focused on protocol translation.

pub mod snapshot;

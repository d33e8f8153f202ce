//! Networking modules for the topic-modeling REST payload.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds backend URLs and performs the single dataset fetch, `error`
//! classifies fetch failures, and `types` defines the shared wire schema.

pub mod api;
pub mod error;
pub mod types;

//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern: `dashboard` holds the tab selection and the
//! fetched dataset's load state, `word_cloud` holds the selector index. Both
//! are plain types wrapped in signals by the components that own them.

pub mod dashboard;
pub mod word_cloud;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one slice of the fetched dataset (or a backend-hosted
//! chart image) and receive everything they need as props from the dashboard
//! page. None of them fetch data themselves.

pub mod distribution_chart;
pub mod document_list;
pub mod image_frame;
pub mod tab_nav;
pub mod topic_list;
pub mod tsne_visualization;
pub mod word_cloud;

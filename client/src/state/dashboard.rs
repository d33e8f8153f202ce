//! Dashboard tab selection and dataset load state.
//!
//! DESIGN
//! ======
//! The dataset is write-once: a `LoadState` moves from `Loading` to either
//! `Loaded` or `Failed` and never changes again for the page session. Tab
//! selection is independent of it, so switching tabs only changes which
//! slice of an already-loaded dataset is shown.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::sync::Arc;

use crate::net::error::FetchError;
use crate::net::types::{Document, Topic, TopicModelingData};

/// Tabs in the dashboard navigation bar, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DashboardTab {
    #[default]
    Topics,
    Documents,
    Distribution,
    WordCloud,
    Tsne,
}

impl DashboardTab {
    pub const ALL: [Self; 5] = [Self::Topics, Self::Documents, Self::Distribution, Self::WordCloud, Self::Tsne];

    /// Stable identifier, also used as a CSS modifier.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Topics => "topics",
            Self::Documents => "documents",
            Self::Distribution => "distribution",
            Self::WordCloud => "wordcloud",
            Self::Tsne => "tsne",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Topics => "Topics",
            Self::Documents => "Documents",
            Self::Distribution => "Distribution",
            Self::WordCloud => "Word Clouds",
            Self::Tsne => "t-SNE",
        }
    }

    /// Move `current` to `next`, reporting whether anything changed.
    ///
    /// Re-selecting the active tab is a no-op so the open panel keeps its
    /// local state.
    pub fn replace(current: &mut Self, next: Self) -> bool {
        std::mem::replace(current, next) != next
    }
}

/// Lifecycle of the single dataset fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Arc<TopicModelingData>),
    /// Holds the user-facing message, not the underlying cause.
    Failed(String),
}

impl LoadState {
    #[must_use]
    pub fn from_result(result: Result<TopicModelingData, FetchError>) -> Self {
        match result {
            Ok(data) => Self::Loaded(Arc::new(data)),
            Err(e) => Self::Failed(e.user_message().to_owned()),
        }
    }

    #[cfg(test)]
    pub(crate) fn data(&self) -> Option<&TopicModelingData> {
        match self {
            Self::Loaded(data) => Some(data.as_ref()),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    /// Decide what the main content area shows for the given tab.
    ///
    /// An error always wins over the tab; while loading no panel is shown.
    #[must_use]
    pub fn view(&self, tab: DashboardTab) -> DashboardView<'_> {
        let data = match self {
            Self::Failed(message) => return DashboardView::Error(message),
            Self::Loading => return DashboardView::Loading,
            Self::Loaded(data) => data,
        };
        match tab {
            DashboardTab::Topics => DashboardView::Topics(&data.topics),
            DashboardTab::Documents => DashboardView::Documents(&data.documents),
            DashboardTab::Distribution => DashboardView::Distribution,
            DashboardTab::WordCloud => DashboardView::WordCloud { total_topics: data.topic_count() },
            DashboardTab::Tsne => DashboardView::Tsne,
        }
    }
}

/// Content selected for the dashboard's main area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardView<'a> {
    Error(&'a str),
    Loading,
    Topics(&'a [Topic]),
    Documents(&'a [Document]),
    Distribution,
    WordCloud { total_topics: usize },
    Tsne,
}

//! Dashboard page: one dataset fetch, tab navigation, and the active panel.
//!
//! ARCHITECTURE
//! ============
//! The dataset is a `LocalResource` owned by this page, so it is fetched once
//! per mount, only in the browser, and a response that lands after the page
//! is disposed is dropped. Tab state lives next to it; the content closure
//! re-runs on tab change and hands the relevant slice to one child panel.

use leptos::prelude::*;

use crate::components::distribution_chart::DistributionChart;
use crate::components::document_list::DocumentList;
use crate::components::tab_nav::TabNav;
use crate::components::topic_list::TopicList;
use crate::components::tsne_visualization::TsneVisualization;
use crate::components::word_cloud::WordCloudPanel;
use crate::net::api::fetch_topic_modeling;
use crate::state::dashboard::{DashboardTab, DashboardView, LoadState};

async fn load_dataset() -> LoadState {
    let result = fetch_topic_modeling().await;
    #[cfg(feature = "hydrate")]
    match &result {
        Ok(data) => log::debug!("loaded {} topics and {} documents", data.topics.len(), data.documents.len()),
        Err(e) => log::error!("failed to fetch data: {e}"),
    }
    LoadState::from_result(result)
}

fn render_content(load: &LoadState, tab: DashboardTab) -> AnyView {
    match load.view(tab) {
        DashboardView::Error(message) => {
            let message = message.to_owned();
            view! { <p class="dashboard-page__error">{message}</p> }.into_any()
        }
        DashboardView::Loading => view! { <p class="dashboard-page__loading">"Loading..."</p> }.into_any(),
        DashboardView::Topics(topics) => view! { <TopicList topics=topics.to_vec()/> }.into_any(),
        DashboardView::Documents(documents) => view! { <DocumentList documents=documents.to_vec()/> }.into_any(),
        DashboardView::Distribution => view! { <DistributionChart/> }.into_any(),
        DashboardView::WordCloud { total_topics } => view! { <WordCloudPanel total_topics=total_topics/> }.into_any(),
        DashboardView::Tsne => view! { <TsneVisualization/> }.into_any(),
    }
}

/// Dashboard page: header, tab bar, and the panel for the active tab.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let active_tab = RwSignal::new(DashboardTab::default());
    let dataset = LocalResource::new(load_dataset);

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Topic Modeling Analysis"</h1>
            </header>
            <TabNav active=active_tab/>
            <main class="dashboard-page__main">
                {move || {
                    let load = dataset.get().unwrap_or_default();
                    render_content(&load, active_tab.get())
                }}
            </main>
        </div>
    }
}

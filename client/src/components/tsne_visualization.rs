//! t-SNE embedding chart panel.

use leptos::prelude::*;

use crate::components::image_frame::ImageFrame;
use crate::net::api::{api_base, tsne_chart_url};

#[component]
pub fn TsneVisualization() -> impl IntoView {
    view! {
        <div class="image-panel">
            <h2 class="section-title">"t-SNE Visualization"</h2>
            <ImageFrame src=tsne_chart_url(api_base()) alt="t-SNE Visualization".to_owned()/>
        </div>
    }
}

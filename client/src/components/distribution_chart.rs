//! Topic distribution chart panel.

use leptos::prelude::*;

use crate::components::image_frame::ImageFrame;
use crate::net::api::{api_base, distribution_chart_url};

#[component]
pub fn DistributionChart() -> impl IntoView {
    view! {
        <div class="image-panel">
            <h2 class="section-title">"Topic Distribution"</h2>
            <ImageFrame src=distribution_chart_url(api_base()) alt="Topic Distribution Chart".to_owned()/>
        </div>
    }
}

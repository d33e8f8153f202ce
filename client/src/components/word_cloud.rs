//! Word-cloud panel with a per-topic selector.
//!
//! SYSTEM CONTEXT
//! ==============
//! The selection is local to this component and resets whenever the tab is
//! left and re-entered. Changing it only swaps the image `src`; the browser
//! issues the image request.

use leptos::prelude::*;

use crate::components::image_frame::ImageFrame;
use crate::net::api::api_base;
use crate::state::word_cloud::{WordCloudSelection, parse_topic_index, topic_option_label, topic_options};

#[component]
pub fn WordCloudPanel(total_topics: usize) -> impl IntoView {
    let selection = RwSignal::new(WordCloudSelection::default());

    let on_change = move |ev: leptos::ev::Event| {
        if let Some(index) = parse_topic_index(&event_target_value(&ev)) {
            selection.update(|s| s.select(index));
        }
    };

    view! {
        <div class="image-panel word-cloud">
            <h2 class="section-title">"Word Clouds"</h2>
            <div class="word-cloud__controls">
                <label for="topicSelect" class="word-cloud__label">
                    "Select Topic:"
                </label>
                <select
                    id="topicSelect"
                    class="word-cloud__select"
                    prop:value=move || selection.get().selected().to_string()
                    on:change=on_change
                >
                    {topic_options(total_topics)
                        .map(|i| {
                            view! { <option value=i.to_string()>{topic_option_label(i)}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </div>
            <ImageFrame
                src=Signal::derive(move || selection.get().image_url(api_base()))
                alt=Signal::derive(move || selection.get().alt_text())
            />
        </div>
    }
}

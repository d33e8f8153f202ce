//! Framed `<img>` for backend-hosted chart images.
//!
//! Load failures are left to the browser's broken-image rendering.

use leptos::prelude::*;

#[component]
pub fn ImageFrame(#[prop(into)] src: Signal<String>, #[prop(into)] alt: Signal<String>) -> impl IntoView {
    view! {
        <div class="card image-frame">
            <img class="image-frame__image" src=move || src.get() alt=move || alt.get()/>
        </div>
    }
}

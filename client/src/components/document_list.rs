//! Stacked document cards showing text and assigned topic.
//!
//! Every document is rendered; there is no truncation or paging, so very
//! large corpora produce very long pages.

#[cfg(test)]
#[path = "document_list_test.rs"]
mod document_list_test;

use leptos::prelude::*;

use crate::net::types::Document;

fn document_card_title(doc: &Document) -> String {
    format!("Document {}", doc.id)
}

fn document_topic_label(doc: &Document) -> String {
    format!("Topic: {}", doc.topic)
}

/// Renders one card per document, in the order given.
#[component]
pub fn DocumentList(documents: Vec<Document>) -> impl IntoView {
    view! {
        <div class="document-list">
            <h2 class="section-title">"Documents"</h2>
            <div class="document-list__stack">
                {documents
                    .into_iter()
                    .map(|doc| {
                        let title = document_card_title(&doc);
                        let topic = document_topic_label(&doc);
                        view! {
                            <div class="card document-card">
                                <h3 class="card__title">{title}</h3>
                                <p class="document-card__text">{doc.text}</p>
                                <span class="document-card__topic">{topic}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

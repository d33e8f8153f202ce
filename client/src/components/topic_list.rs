//! Grid of topic cards, each listing its keywords in relevance order.

#[cfg(test)]
#[path = "topic_list_test.rs"]
mod topic_list_test;

use leptos::prelude::*;

use crate::net::types::Topic;

fn topic_card_title(topic: &Topic) -> String {
    format!("Topic {}", topic.id)
}

/// Renders one card per topic, in the order given.
#[component]
pub fn TopicList(topics: Vec<Topic>) -> impl IntoView {
    view! {
        <div class="topic-list">
            <h2 class="section-title">"Topics"</h2>
            <div class="topic-list__grid">
                {topics
                    .into_iter()
                    .map(|topic| {
                        let title = topic_card_title(&topic);
                        view! {
                            <div class="card topic-card">
                                <h3 class="card__title">{title}</h3>
                                <ul class="topic-card__keywords">
                                    {topic
                                        .keywords
                                        .into_iter()
                                        .map(|keyword| view! { <li>{keyword}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

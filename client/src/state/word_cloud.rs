//! Word-cloud selector state.
//!
//! The selector only offers indices `0..total_topics`, so out-of-range values
//! never reach `select` from the UI; the type itself does not clamp.

#[cfg(test)]
#[path = "word_cloud_test.rs"]
mod word_cloud_test;

use std::ops::Range;

use crate::net::api::word_cloud_url;

/// Selected topic index for the word-cloud panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WordCloudSelection {
    selected: usize,
}

impl WordCloudSelection {
    #[must_use]
    pub fn selected(self) -> usize {
        self.selected
    }

    pub fn select(&mut self, topic_index: usize) {
        self.selected = topic_index;
    }

    #[must_use]
    pub fn image_url(self, base: &str) -> String {
        word_cloud_url(base, self.selected)
    }

    #[must_use]
    pub fn alt_text(self) -> String {
        format!("Word Cloud for Topic {}", self.selected)
    }
}

/// Indices offered by the selector.
#[must_use]
pub fn topic_options(total_topics: usize) -> Range<usize> {
    0..total_topics
}

#[must_use]
pub fn topic_option_label(topic_index: usize) -> String {
    format!("Topic {topic_index}")
}

/// Parse the `<select>` value back into an index.
#[must_use]
pub fn parse_topic_index(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}

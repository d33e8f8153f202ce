//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server decodes snapshot files into these same types before serving
//! them, so both sides agree on one schema. Relationships between documents
//! and topics are not checked; a document may name a topic id that is absent.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A topic produced by the external modeling process.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: i64,
    /// Keywords in relevance order.
    pub keywords: Vec<String>,
}

/// A document and the topic it was assigned to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub text: String,
    pub topic: i64,
}

/// Combined payload returned by `GET /api/topic_modeling`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicModelingData {
    pub topics: Vec<Topic>,
    pub documents: Vec<Document>,
}

impl TopicModelingData {
    /// Number of topics, used to size the word-cloud selector.
    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }
}

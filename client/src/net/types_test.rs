use super::*;

#[test]
fn payload_deserializes_topics_and_documents() {
    let json = r#"{"topics":[{"id":1,"keywords":["a","b"]}],"documents":[{"id":1,"text":"doc","topic":1}]}"#;
    let data: TopicModelingData = serde_json::from_str(json).unwrap();
    assert_eq!(data.topics, vec![Topic { id: 1, keywords: vec!["a".to_owned(), "b".to_owned()] }]);
    assert_eq!(data.documents, vec![Document { id: 1, text: "doc".to_owned(), topic: 1 }]);
}

#[test]
fn keyword_order_is_preserved() {
    let json = r#"{"id":3,"keywords":["zeta","alpha","mid"]}"#;
    let topic: Topic = serde_json::from_str(json).unwrap();
    assert_eq!(topic.keywords, ["zeta", "alpha", "mid"]);
}

#[test]
fn orphaned_topic_reference_is_accepted() {
    let json = r#"{"topics":[{"id":0,"keywords":[]}],"documents":[{"id":7,"text":"x","topic":42}]}"#;
    let data: TopicModelingData = serde_json::from_str(json).unwrap();
    assert_eq!(data.documents[0].topic, 42);
    assert!(data.topics.iter().all(|t| t.id != 42));
}

#[test]
fn missing_documents_field_is_rejected() {
    let json = r#"{"topics":[]}"#;
    assert!(serde_json::from_str::<TopicModelingData>(json).is_err());
}

#[test]
fn topic_count_matches_topics_len() {
    let data = TopicModelingData {
        topics: (0..4).map(|id| Topic { id, keywords: Vec::new() }).collect(),
        documents: Vec::new(),
    };
    assert_eq!(data.topic_count(), 4);
    assert_eq!(TopicModelingData::default().topic_count(), 0);
}

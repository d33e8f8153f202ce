use super::*;

#[test]
fn topic_card_title_uses_topic_id() {
    let topic = Topic { id: 1, keywords: vec!["a".to_owned(), "b".to_owned()] };
    assert_eq!(topic_card_title(&topic), "Topic 1");
}

#[test]
fn topic_card_title_handles_zero_and_negative_ids() {
    assert_eq!(topic_card_title(&Topic { id: 0, keywords: Vec::new() }), "Topic 0");
    assert_eq!(topic_card_title(&Topic { id: -3, keywords: Vec::new() }), "Topic -3");
}

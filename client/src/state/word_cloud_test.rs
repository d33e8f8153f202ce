use super::*;

#[test]
fn selection_starts_at_zero() {
    let sel = WordCloudSelection::default();
    assert_eq!(sel.selected(), 0);
    assert_eq!(sel.image_url("http://h"), "http://h/static/nube_tema_0.png");
}

#[test]
fn select_updates_url_with_exact_index() {
    for k in [1, 4, 9] {
        let mut sel = WordCloudSelection::default();
        sel.select(k);
        assert_eq!(sel.selected(), k);
        assert_eq!(sel.image_url("http://h"), format!("http://h/static/nube_tema_{k}.png"));
        assert_eq!(sel.alt_text(), format!("Word Cloud for Topic {k}"));
    }
}

#[test]
fn select_changes_only_the_index() {
    let mut sel = WordCloudSelection::default();
    sel.select(3);
    let mut expected = WordCloudSelection::default();
    expected.select(3);
    assert_eq!(sel, expected);
}

#[test]
fn options_cover_every_topic_index() {
    assert_eq!(topic_options(3).collect::<Vec<_>>(), [0, 1, 2]);
    assert_eq!(topic_options(0).count(), 0);
}

#[test]
fn option_label_names_topic() {
    assert_eq!(topic_option_label(7), "Topic 7");
}

#[test]
fn parse_topic_index_accepts_digits_only() {
    assert_eq!(parse_topic_index("5"), Some(5));
    assert_eq!(parse_topic_index(" 2 "), Some(2));
    assert_eq!(parse_topic_index("-1"), None);
    assert_eq!(parse_topic_index("abc"), None);
    assert_eq!(parse_topic_index(""), None);
}

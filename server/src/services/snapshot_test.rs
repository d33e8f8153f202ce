use std::io::Write;

use super::*;

fn write_snapshot(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn decode_snapshot_accepts_valid_payload() {
    let bytes = br#"{"topics":[{"id":1,"keywords":["a","b"]}],"documents":[{"id":1,"text":"doc","topic":1}]}"#;
    let data = decode_snapshot(Path::new("s.json"), bytes).unwrap();
    assert_eq!(data.topics[0].keywords, ["a", "b"]);
    assert_eq!(data.documents[0].text, "doc");
}

#[test]
fn decode_snapshot_reports_path_on_error() {
    let err = decode_snapshot(Path::new("bad.json"), b"{").unwrap_err();
    assert!(matches!(err, SnapshotError::Decode { .. }));
    assert!(err.to_string().contains("bad.json"));
}

#[tokio::test]
async fn load_snapshot_requires_configuration() {
    let err = load_snapshot(None).await.unwrap_err();
    assert!(matches!(err, SnapshotError::NotConfigured));
}

#[tokio::test]
async fn load_snapshot_reads_file() {
    let file = write_snapshot(r#"{"topics":[],"documents":[{"id":4,"text":"t","topic":0}]}"#);
    let data = load_snapshot(Some(file.path())).await.unwrap();
    assert!(data.topics.is_empty());
    assert_eq!(data.documents.len(), 1);
}

#[tokio::test]
async fn load_snapshot_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_snapshot(Some(&dir.path().join("absent.json"))).await.unwrap_err();
    assert!(matches!(err, SnapshotError::Read { .. }));
}

#[tokio::test]
async fn load_snapshot_picks_up_rewritten_file() {
    let file = write_snapshot(r#"{"topics":[],"documents":[]}"#);
    assert!(load_snapshot(Some(file.path())).await.unwrap().topics.is_empty());


    std::fs::write(file.path(), r#"{"topics":[{"id":0,"keywords":["x"]}],"documents":[]}"#).unwrap();
    assert_eq!(load_snapshot(Some(file.path())).await.unwrap().topics.len(), 1);
}

#[test]
fn bundled_fixture_is_a_valid_snapshot() {
    let bytes = include_bytes!("../../../fixtures/sample_snapshot.json");
    let data = decode_snapshot(Path::new("sample_snapshot.json"), bytes).unwrap();
    assert_eq!(data.topics.len(), 3);
    assert_eq!(data.documents.len(), 3);
    assert!(data.topics.iter().all(|t| t.keywords.len() == 5));
}

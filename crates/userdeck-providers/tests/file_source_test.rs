//! File source tests
//!
//! Verifies that saved API responses replay in order and that read and decode
//! failures surface as the matching FetchError variants.

use std::path::PathBuf;

use tempfile::TempDir;
use userdeck_providers::{FetchError, FetchRequest, ResponseFile, UserSource};

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/samples/randomuser_response.json")
}

#[tokio::test]
async fn test_replays_saved_response_in_order() {
    let source = ResponseFile::new(sample_path());

    let users = source.fetch_users(&FetchRequest::default()).await.unwrap();

    let names: Vec<String> = users.iter().map(|u| u.full_name()).collect();
    assert_eq!(names, vec!["Alice Smith", "Bob Jones", "Ann Lee"]);
}

#[tokio::test]
async fn test_count_truncates_batch() {
    let source = ResponseFile::new(sample_path());

    let users = source
        .fetch_users(&FetchRequest::new(2, vec!["us".to_string()]))
        .await
        .unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[1].name.first, "Bob");
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let source = ResponseFile::new(temp_dir.path().join("absent.json"));

    let err = source.fetch_users(&FetchRequest::default()).await.unwrap_err();
    assert!(matches!(err, FetchError::Io(_)));
}

#[tokio::test]
async fn test_malformed_file_is_decode_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    std::fs::write(&path, "{ \"results\": [ { \"name\": 1 } ] }").unwrap();

    let err = ResponseFile::new(&path)
        .fetch_users(&FetchRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[test]
fn test_describe_names_the_file() {
    let source = ResponseFile::new(sample_path());
    assert!(source.describe().ends_with("randomuser_response.json"));
}

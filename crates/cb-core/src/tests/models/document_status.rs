use crate::{Document, DocumentStatus};

use std::str::FromStr;

#[test]
fn test_document_status_from_str() {
    assert_eq!(
        DocumentStatus::from_str("processing").unwrap(),
        DocumentStatus::Processing
    );
    assert!(DocumentStatus::from_str("archived").is_err());
}

#[test]
fn test_document_status_terminal_states() {
    assert!(DocumentStatus::Completed.is_terminal());
    assert!(DocumentStatus::Failed.is_terminal());
    assert!(!DocumentStatus::Pending.is_terminal());
    assert!(!DocumentStatus::Processing.is_terminal());
}

#[test]
fn test_document_deserializes_with_naive_timestamps() {
    let json = r#"{
        "id": "d-1",
        "dataset_id": "ds-1",
        "title": "FAQ",
        "source_type": "text",
        "content_hash": "abc",
        "status": "completed",
        "error_message": null,
        "file_size": 120,
        "created_at": "2025-09-10T05:30:00.123456",
        "updated_at": "2025-09-10T05:31:00"
    }"#;

    let document: Document = serde_json::from_str(json).unwrap();

    assert_eq!(document.status, DocumentStatus::Completed);
    assert!(document.tags.is_empty());
}

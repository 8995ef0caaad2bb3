//! End-to-end tests for the upload, version, download, and delete flow.

use bytes::Bytes;
use futures::StreamExt;

use filedepot::{BlobStore, ErrorKind, FileFilterParams, UpdateRecordRequest, UploadParams};

use crate::helpers::{identity, TestApp};

#[tokio::test]
async fn test_full_file_lifecycle() {
    let app = TestApp::new();
    let alice = identity("alice", "Acme");

    // Upload a 500-byte original.
    let original = app
        .upload
        .upload(
            UploadParams {
                file_name: "report.txt".to_string(),
                content_type: Some("text/plain".to_string()),
                data: Bytes::from(vec![b'a'; 500]),
            },
            Some(&alice),
        )
        .await
        .unwrap();
    assert_eq!(original.version, 0);
    assert_eq!(original.size_bytes, 500);

    let rows = app.list_all(&alice).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].version, 0);
    assert_eq!(rows[0].file_name, "report.txt");

    // Upload a 700-byte replacement as a new version.
    let second = app
        .upload
        .upload_version(
            original.logical_file_id,
            UploadParams {
                file_name: "report-final.txt".to_string(),
                content_type: Some("text/plain".to_string()),
                data: Bytes::from(vec![b'b'; 700]),
            },
            Some(&alice),
        )
        .await
        .unwrap();
    assert_eq!(second.version, 1);
    assert_eq!(second.file_name, "report.txt");
    assert_eq!(second.blob_locator, "report.txt_v1");

    // History shows both versions, newest first; the listing shows one
    // row at the latest version.
    let versions = app.files.list_versions(original.logical_file_id).await.unwrap();
    let sizes: Vec<i64> = versions.iter().map(|r| r.size_bytes).collect();
    assert_eq!(sizes, vec![700, 500]);

    let rows = app.list_all(&alice).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].version, 1);
    assert_eq!(rows[0].size_bytes, 700);

    // A stranger from another company cannot delete.
    let mallory = identity("mallory", "Globex");
    let err = app
        .files
        .delete(second.id, Some(&mallory))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);

    // The owner can.
    app.files.delete(second.id, Some(&alice)).await.unwrap();
    let err = app.files.get(second.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    // The original version remains.
    let rows = app.list_all(&alice).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].version, 0);
}

#[tokio::test]
async fn test_version_content_is_preserved_per_version() {
    let app = TestApp::new();
    let alice = identity("alice", "Acme");

    let v0 = app.upload_text("notes.txt", "first draft", &alice).await;
    let v1 = app
        .upload
        .upload_version(
            v0.logical_file_id,
            UploadParams {
                file_name: "notes.txt".to_string(),
                content_type: Some("text/plain".to_string()),
                data: Bytes::from("second draft"),
            },
            Some(&alice),
        )
        .await
        .unwrap();

    let (_, old_bytes) = app.download.download_bytes(v0.id).await.unwrap();
    let (_, new_bytes) = app.download.download_bytes(v1.id).await.unwrap();
    assert_eq!(old_bytes, Bytes::from("first draft"));
    assert_eq!(new_bytes, Bytes::from("second draft"));
}

#[tokio::test]
async fn test_download_streams_full_content() {
    let app = TestApp::new();
    let alice = identity("alice", "Acme");

    let record = app.upload_text("stream.txt", "streamed bytes", &alice).await;

    let result = app.download.download(record.id).await.unwrap();
    assert_eq!(result.content_type, "text/plain");

    let mut collected = Vec::new();
    let mut stream = result.stream;
    while let Some(chunk) = stream.next().await {
        collected.extend_from_slice(&chunk.unwrap());
    }
    assert_eq!(collected, b"streamed bytes");
}

#[tokio::test]
async fn test_update_rename_by_owner_only() {
    let app = TestApp::new();
    let alice = identity("alice", "Acme");
    let record = app.upload_text("draft.txt", "text", &alice).await;

    let mallory = identity("mallory", "Globex");
    let err = app
        .files
        .update(
            record.id,
            UpdateRecordRequest {
                file_name: Some("stolen.txt".to_string()),
                content_type: None,
            },
            Some(&mallory),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);

    let updated = app
        .files
        .update(
            record.id,
            UpdateRecordRequest {
                file_name: Some("final.txt".to_string()),
                content_type: None,
            },
            Some(&alice),
        )
        .await
        .unwrap();
    assert_eq!(updated.file_name, "final.txt");

    let rows = app.list_all(&alice).await;
    assert_eq!(rows[0].file_name, "final.txt");
}

#[tokio::test]
async fn test_anonymous_callers_are_rejected() {
    let app = TestApp::new();
    let alice = identity("alice", "Acme");
    let record = app.upload_text("secret.txt", "text", &alice).await;

    let err = app
        .upload
        .upload(
            UploadParams {
                file_name: "anon.txt".to_string(),
                content_type: None,
                data: Bytes::from("x"),
            },
            None,
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);

    let err = app
        .search
        .list(FileFilterParams::default(), None)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);

    let err = app.files.delete(record.id, None).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);
}

#[tokio::test]
async fn test_delete_removes_only_that_versions_blob() {
    let app = TestApp::new();
    let alice = identity("alice", "Acme");

    let v0 = app.upload_text("keep.txt", "v0 content", &alice).await;
    let v1 = app
        .upload
        .upload_version(
            v0.logical_file_id,
            UploadParams {
                file_name: "keep.txt".to_string(),
                content_type: None,
                data: Bytes::from("v1 content"),
            },
            Some(&alice),
        )
        .await
        .unwrap();

    app.files.delete(v1.id, Some(&alice)).await.unwrap();

    assert!(!app.blobs.exists("keep.txt_v1").await.unwrap());
    assert!(app.blobs.exists("keep.txt").await.unwrap());
    let (_, data) = app.download.download_bytes(v0.id).await.unwrap();
    assert_eq!(data, Bytes::from("v0 content"));
}

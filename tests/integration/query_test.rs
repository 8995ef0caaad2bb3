//! Integration tests for the listing query engine: filters, sorting, and
//! latest-version reduction over realistic data.

use bytes::Bytes;

use filedepot::{FileFilterParams, UploadParams};

use crate::helpers::{identity, TestApp};

async fn seed_corpus(app: &TestApp) {
    let alice = identity("alice", "Acme");
    let bob = identity("bob", "Globex");

    app.upload
        .upload(
            UploadParams {
                file_name: "Quarterly-Report.pdf".to_string(),
                content_type: Some("application/pdf".to_string()),
                data: Bytes::from(vec![0u8; 2048]),
            },
            Some(&alice),
        )
        .await
        .unwrap();
    app.upload
        .upload(
            UploadParams {
                file_name: "logo.png".to_string(),
                content_type: Some("image/png".to_string()),
                data: Bytes::from(vec![0u8; 512]),
            },
            Some(&alice),
        )
        .await
        .unwrap();
    app.upload
        .upload(
            UploadParams {
                file_name: "minutes.txt".to_string(),
                content_type: Some("text/plain".to_string()),
                data: Bytes::from(vec![0u8; 128]),
            },
            Some(&bob),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_filename_filter_is_case_insensitive_substring() {
    let app = TestApp::new();
    seed_corpus(&app).await;
    let caller = identity("carol", "Acme");

    let rows = app
        .search
        .list(
            FileFilterParams {
                file_name: Some("report".to_string()),
                ..Default::default()
            },
            Some(&caller),
        )
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].file_name, "Quarterly-Report.pdf");
}

#[tokio::test]
async fn test_username_and_company_filters() {
    let app = TestApp::new();
    seed_corpus(&app).await;
    let caller = identity("carol", "Acme");

    let rows = app
        .search
        .list(
            FileFilterParams {
                username: Some("BOB".to_string()),
                ..Default::default()
            },
            Some(&caller),
        )
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].uploader_username, "bob");

    // Company is matched exactly, case included.
    let rows = app
        .search
        .list(
            FileFilterParams {
                company: Some("Acme".to_string()),
                ..Default::default()
            },
            Some(&caller),
        )
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);

    let rows = app
        .search
        .list(
            FileFilterParams {
                company: Some("acme".to_string()),
                ..Default::default()
            },
            Some(&caller),
        )
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_content_type_filter() {
    let app = TestApp::new();
    seed_corpus(&app).await;
    let caller = identity("carol", "Acme");

    let rows = app
        .search
        .list(
            FileFilterParams {
                content_type: Some("image/png".to_string()),
                ..Default::default()
            },
            Some(&caller),
        )
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].file_name, "logo.png");
}

#[tokio::test]
async fn test_combined_filters_intersect() {
    let app = TestApp::new();
    seed_corpus(&app).await;
    let caller = identity("carol", "Acme");

    let rows = app
        .search
        .list(
            FileFilterParams {
                company: Some("Acme".to_string()),
                min_size: Some(1000),
                ..Default::default()
            },
            Some(&caller),
        )
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].file_name, "Quarterly-Report.pdf");
}

#[tokio::test]
async fn test_unknown_record_id_filter_matches_nothing() {
    let app = TestApp::new();
    seed_corpus(&app).await;
    let caller = identity("carol", "Acme");

    let rows = app
        .search
        .list(
            FileFilterParams {
                id: Some("not-a-real-id".to_string()),
                ..Default::default()
            },
            Some(&caller),
        )
        .await
        .unwrap();

    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_malformed_date_filter_is_ignored() {
    let app = TestApp::new();
    seed_corpus(&app).await;
    let caller = identity("carol", "Acme");

    let rows = app
        .search
        .list(
            FileFilterParams {
                date_from: Some("yesterday".to_string()),
                ..Default::default()
            },
            Some(&caller),
        )
        .await
        .unwrap();

    // The bad bound is dropped rather than failing the query.
    assert_eq!(rows.len(), 3);
}

#[tokio::test]
async fn test_date_window_covers_today() {
    let app = TestApp::new();
    seed_corpus(&app).await;
    let caller = identity("carol", "Acme");
    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();

    let rows = app
        .search
        .list(
            FileFilterParams {
                date_from: Some(today.clone()),
                date_to: Some(today),
                ..Default::default()
            },
            Some(&caller),
        )
        .await
        .unwrap();

    // Everything was uploaded just now, inside the named day.
    assert_eq!(rows.len(), 3);

    let rows = app
        .search
        .list(
            FileFilterParams {
                date_from: Some("2099-01-01".to_string()),
                ..Default::default()
            },
            Some(&caller),
        )
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_sort_by_size_both_directions() {
    let app = TestApp::new();
    seed_corpus(&app).await;
    let caller = identity("carol", "Acme");

    let asc = app
        .search
        .list(
            FileFilterParams {
                sort_by: Some("size".to_string()),
                ..Default::default()
            },
            Some(&caller),
        )
        .await
        .unwrap();
    let sizes: Vec<i64> = asc.iter().map(|r| r.size_bytes).collect();
    assert_eq!(sizes, vec![128, 512, 2048]);

    let desc = app
        .search
        .list(
            FileFilterParams {
                sort_by: Some("size".to_string()),
                order: Some("desc".to_string()),
                ..Default::default()
            },
            Some(&caller),
        )
        .await
        .unwrap();
    let sizes: Vec<i64> = desc.iter().map(|r| r.size_bytes).collect();
    assert_eq!(sizes, vec![2048, 512, 128]);
}

#[tokio::test]
async fn test_listing_reflects_latest_matching_version() {
    let app = TestApp::new();
    let alice = identity("alice", "Acme");

    let v0 = app.upload_text("evolving.txt", "short", &alice).await;
    app.upload
        .upload_version(
            v0.logical_file_id,
            UploadParams {
                file_name: "evolving.txt".to_string(),
                content_type: Some("text/plain".to_string()),
                data: Bytes::from("a much longer second revision"),
            },
            Some(&alice),
        )
        .await
        .unwrap();

    let rows = app.list_all(&alice).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].version, 1);

    // Constraining size to the old version's makes v0 the representative.
    let rows = app
        .search
        .list(
            FileFilterParams {
                max_size: Some(10),
                ..Default::default()
            },
            Some(&alice),
        )
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].version, 0);
}

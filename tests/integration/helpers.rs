//! Shared test helpers for integration tests.

use std::sync::Arc;

use bytes::Bytes;
use tempfile::TempDir;

use filedepot::{
    DownloadService, FileFilterParams, FileListing, FileService, FileVersionRecord, Identity,
    InMemoryMetadataStore, LinksConfig, LocalBlobStore, LocalStorageConfig, MutationPolicy,
    OwnerOnlyPolicy, SearchService, StorageConfig, UploadParams, UploadService, UserId,
};

/// Test application context wiring every service over shared stores.
pub struct TestApp {
    pub upload: UploadService,
    pub download: DownloadService,
    pub search: SearchService,
    pub files: FileService,
    pub metadata: Arc<InMemoryMetadataStore>,
    pub blobs: Arc<LocalBlobStore>,
    // Held so the blob directory outlives the services.
    _dir: TempDir,
}

impl TestApp {
    /// Create a new test application with the owner-only mutation policy.
    pub fn new() -> Self {
        Self::with_policy(Arc::new(OwnerOnlyPolicy))
    }

    /// Create a new test application with an explicit mutation policy.
    pub fn with_policy(policy: Arc<dyn MutationPolicy>) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create blob tempdir");
        let root = dir.path().to_string_lossy().into_owned();

        let config = StorageConfig {
            local: LocalStorageConfig {
                root_path: root.clone(),
            },
            ..Default::default()
        };

        let metadata = Arc::new(InMemoryMetadataStore::new());
        let blobs = Arc::new(LocalBlobStore::new(&root));

        Self {
            upload: UploadService::new(metadata.clone(), blobs.clone(), config),
            download: DownloadService::new(metadata.clone(), blobs.clone()),
            search: SearchService::new(metadata.clone(), LinksConfig::default()),
            files: FileService::new(metadata.clone(), blobs.clone(), policy),
            metadata,
            blobs,
            _dir: dir,
        }
    }

    /// Upload a text file and return the stored record.
    pub async fn upload_text(
        &self,
        name: &str,
        content: &str,
        identity: &Identity,
    ) -> FileVersionRecord {
        self.upload
            .upload(
                UploadParams {
                    file_name: name.to_string(),
                    content_type: Some("text/plain".to_string()),
                    data: Bytes::from(content.to_string()),
                },
                Some(identity),
            )
            .await
            .expect("Upload failed")
    }

    /// List all files as the given identity with no filters.
    pub async fn list_all(&self, identity: &Identity) -> Vec<FileListing> {
        self.search
            .list(FileFilterParams::default(), Some(identity))
            .await
            .expect("Listing failed")
    }
}

/// A test identity with a fresh user id.
pub fn identity(username: &str, company: &str) -> Identity {
    Identity::new(UserId::new(), username, company, "user")
}

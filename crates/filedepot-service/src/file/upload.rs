//! File upload service — original uploads and new-version uploads.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;

use filedepot_core::config::storage::StorageConfig;
use filedepot_core::error::AppError;
use filedepot_core::result::AppResult;
use filedepot_core::traits::BlobStore;
use filedepot_core::types::LogicalFileId;
use filedepot_entity::{FileVersionRecord, Identity};
use filedepot_metadata::MetadataStore;

use crate::access::require_identity;
use crate::file::version::VersionPlan;

/// Parameters for a single-request upload.
#[derive(Debug, Clone)]
pub struct UploadParams {
    /// The uploaded file's name.
    pub file_name: String,
    /// MIME type, if the caller supplied one.
    pub content_type: Option<String>,
    /// File content bytes.
    pub data: Bytes,
}

/// Orchestrates blob writes, version planning, and metadata persistence
/// for uploads.
#[derive(Debug, Clone)]
pub struct UploadService {
    /// Metadata store.
    metadata: Arc<dyn MetadataStore>,
    /// Blob store.
    blobs: Arc<dyn BlobStore>,
    /// Storage configuration (upload size limit).
    config: StorageConfig,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(
        metadata: Arc<dyn MetadataStore>,
        blobs: Arc<dyn BlobStore>,
        config: StorageConfig,
    ) -> Self {
        Self {
            metadata,
            blobs,
            config,
        }
    }

    /// Upload a new logical file at version 0.
    ///
    /// Validation happens before any blob write; a blob-store failure
    /// aborts before any metadata is persisted, so no record ever points
    /// at bytes that were never stored.
    pub async fn upload(
        &self,
        params: UploadParams,
        identity: Option<&Identity>,
    ) -> AppResult<FileVersionRecord> {
        let identity = require_identity(identity)?;
        self.validate(&params)?;

        let plan = VersionPlan::initial(&params.file_name);
        let locator = self.blobs.put(&plan.blob_key, params.data.clone()).await?;

        let record = plan.into_record(locator, &params.data, params.content_type, identity);
        let record = self.metadata.insert(record).await?;

        info!(
            record_id = %record.id,
            logical_file_id = %record.logical_file_id,
            file_name = %record.file_name,
            size = record.size_bytes,
            uploader = %record.uploader_username,
            "File uploaded"
        );

        Ok(record)
    }

    /// Upload the next version of an existing logical file.
    ///
    /// Fails not-found when the logical file has no history — a new
    /// version cannot be created for an unknown logical file.
    ///
    /// The resolve-latest read and the insert below are not atomic;
    /// concurrent new-version uploads for the same logical file can race
    /// and produce duplicate version numbers. The listing reduction
    /// breaks such ties deterministically (first stored wins).
    pub async fn upload_version(
        &self,
        logical_file_id: LogicalFileId,
        params: UploadParams,
        identity: Option<&Identity>,
    ) -> AppResult<FileVersionRecord> {
        let identity = require_identity(identity)?;
        self.validate(&params)?;

        let prior = self
            .metadata
            .find_latest_version(logical_file_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Logical file not found: {logical_file_id}"))
            })?;

        let plan = VersionPlan::next(&prior);
        let locator = self.blobs.put(&plan.blob_key, params.data.clone()).await?;

        let record = plan.into_record(locator, &params.data, params.content_type, identity);
        let record = self.metadata.insert(record).await?;

        info!(
            record_id = %record.id,
            logical_file_id = %record.logical_file_id,
            version = record.version,
            size = record.size_bytes,
            "File version uploaded"
        );

        Ok(record)
    }

    /// Reject empty and oversized payloads before any blob write.
    fn validate(&self, params: &UploadParams) -> AppResult<()> {
        if params.data.is_empty() {
            return Err(AppError::validation("No file provided"));
        }
        if params.data.len() as u64 > self.config.max_upload_size_bytes {
            return Err(AppError::validation(format!(
                "File exceeds maximum upload size of {} bytes",
                self.config.max_upload_size_bytes
            )));
        }
        Ok(())
    }
}

//! Record-level file operations: fetch, version history, update, delete.

use std::sync::Arc;

use tracing::{info, warn};

use filedepot_core::error::AppError;
use filedepot_core::result::AppResult;
use filedepot_core::traits::BlobStore;
use filedepot_core::types::{LogicalFileId, RecordId};
use filedepot_entity::{FileVersionRecord, Identity, UpdateRecordRequest};
use filedepot_metadata::MetadataStore;

use crate::access::{require_identity, MutationPolicy};

/// CRUD over individual file version records. Mutations are gated by the
/// configured mutation policy.
#[derive(Debug, Clone)]
pub struct FileService {
    /// Metadata store.
    metadata: Arc<dyn MetadataStore>,
    /// Blob store.
    blobs: Arc<dyn BlobStore>,
    /// Decides who may update or delete a record.
    policy: Arc<dyn MutationPolicy>,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(
        metadata: Arc<dyn MetadataStore>,
        blobs: Arc<dyn BlobStore>,
        policy: Arc<dyn MutationPolicy>,
    ) -> Self {
        Self {
            metadata,
            blobs,
            policy,
        }
    }

    /// Fetch a single version record by id.
    pub async fn get(&self, record_id: RecordId) -> AppResult<FileVersionRecord> {
        self.metadata
            .find_by_id(record_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("File not found: {record_id}")))
    }

    /// All versions of a logical file, newest first. An unknown logical
    /// file yields an empty history, not an error.
    pub async fn list_versions(
        &self,
        logical_file_id: LogicalFileId,
    ) -> AppResult<Vec<FileVersionRecord>> {
        self.metadata.find_versions(logical_file_id).await
    }

    /// Update the mutable fields of a record.
    ///
    /// Only the display name and content type can change; size, version,
    /// uploader, and blob locator are immutable facts about the stored
    /// bytes.
    pub async fn update(
        &self,
        record_id: RecordId,
        request: UpdateRecordRequest,
        identity: Option<&Identity>,
    ) -> AppResult<FileVersionRecord> {
        let identity = require_identity(identity)?;
        let mut record = self.get(record_id).await?;
        self.authorize(&record, identity, "update")?;

        if let Some(file_name) = request.file_name {
            if file_name.trim().is_empty() {
                return Err(AppError::validation("File name cannot be empty"));
            }
            record.file_name = file_name;
        }
        if let Some(content_type) = request.content_type {
            record.content_type = Some(content_type);
        }

        let record = self.metadata.update(&record).await?;

        info!(
            record_id = %record.id,
            file_name = %record.file_name,
            user = %identity.username,
            "File record updated"
        );

        Ok(record)
    }

    /// Delete a version record and its blob.
    ///
    /// The blob goes first: if the blob store errors the record is
    /// retained and the operation can be retried. A blob that is already
    /// gone does not block the metadata delete.
    pub async fn delete(
        &self,
        record_id: RecordId,
        identity: Option<&Identity>,
    ) -> AppResult<()> {
        let identity = require_identity(identity)?;
        let record = self.get(record_id).await?;
        self.authorize(&record, identity, "delete")?;

        let removed = self.blobs.delete(&record.blob_locator).await?;
        if !removed {
            warn!(
                record_id = %record.id,
                locator = %record.blob_locator,
                "Blob already absent at delete time"
            );
        }

        self.metadata.delete(record_id).await?;

        info!(
            record_id = %record.id,
            logical_file_id = %record.logical_file_id,
            file_name = %record.file_name,
            user = %identity.username,
            "File deleted"
        );

        Ok(())
    }

    fn authorize(
        &self,
        record: &FileVersionRecord,
        identity: &Identity,
        action: &str,
    ) -> AppResult<()> {
        if self.policy.can_mutate(record, identity) {
            return Ok(());
        }
        warn!(
            record_id = %record.id,
            user = %identity.username,
            policy = self.policy.name(),
            action,
            "Mutation denied"
        );
        Err(AppError::authorization(format!(
            "Not allowed to {action} this file"
        )))
    }
}

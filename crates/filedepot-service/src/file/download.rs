//! File download service — resolves a record and streams its blob.

use std::sync::Arc;

use tracing::warn;

use filedepot_core::error::{AppError, ErrorKind};
use filedepot_core::result::AppResult;
use filedepot_core::traits::blob::{BlobStore, ByteStream};
use filedepot_core::types::RecordId;
use filedepot_entity::FileVersionRecord;
use filedepot_metadata::MetadataStore;

/// How the caller should present the downloaded bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Render in place (images).
    Inline,
    /// Save as a file (everything else).
    Attachment,
}

impl Disposition {
    /// Pick the disposition for a record: inline for image content,
    /// attachment otherwise.
    pub fn for_record(record: &FileVersionRecord) -> Self {
        if record.is_image() {
            Self::Inline
        } else {
            Self::Attachment
        }
    }

    /// Render a `Content-Disposition` header value for the record.
    pub fn header_value(&self, file_name: &str) -> String {
        match self {
            Self::Inline => format!("inline; filename=\"{file_name}\""),
            Self::Attachment => format!("attachment; filename=\"{file_name}\""),
        }
    }
}

/// A resolved download: metadata plus the byte stream. Dropping the
/// stream cancels the transfer.
pub struct DownloadResult {
    /// The record the bytes belong to.
    pub record: FileVersionRecord,
    /// The blob content.
    pub stream: ByteStream,
    /// Effective content type (defaulted when the record carries none).
    pub content_type: String,
    /// Presentation hint for the caller.
    pub disposition: Disposition,
}

impl std::fmt::Debug for DownloadResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloadResult")
            .field("record", &self.record.id)
            .field("content_type", &self.content_type)
            .field("disposition", &self.disposition)
            .finish()
    }
}

/// Handles file downloads.
#[derive(Debug, Clone)]
pub struct DownloadService {
    /// Metadata store.
    metadata: Arc<dyn MetadataStore>,
    /// Blob store.
    blobs: Arc<dyn BlobStore>,
}

impl DownloadService {
    /// Creates a new download service.
    pub fn new(metadata: Arc<dyn MetadataStore>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { metadata, blobs }
    }

    /// Download a file version by record id.
    ///
    /// Fails not-found when the record is absent — or when the blob
    /// behind it cannot be read, which from the caller's side is the
    /// same missing file.
    pub async fn download(&self, record_id: RecordId) -> AppResult<DownloadResult> {
        let record = self
            .metadata
            .find_by_id(record_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("File not found: {record_id}")))?;

        let stream = self
            .blobs
            .get(&record.blob_locator)
            .await
            .map_err(|e| self.unreadable(&record, e))?;

        Ok(DownloadResult {
            content_type: record.content_type_or_default().to_string(),
            disposition: Disposition::for_record(&record),
            record,
            stream,
        })
    }

    /// Download a file version fully buffered. Convenience for callers
    /// that need the whole payload at once.
    pub async fn download_bytes(
        &self,
        record_id: RecordId,
    ) -> AppResult<(FileVersionRecord, bytes::Bytes)> {
        let record = self
            .metadata
            .find_by_id(record_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("File not found: {record_id}")))?;

        let data = self
            .blobs
            .get_bytes(&record.blob_locator)
            .await
            .map_err(|e| self.unreadable(&record, e))?;

        Ok((record, data))
    }

    fn unreadable(&self, record: &FileVersionRecord, err: AppError) -> AppError {
        if err.kind == ErrorKind::NotFound {
            return err;
        }
        warn!(
            record_id = %record.id,
            locator = %record.blob_locator,
            error = %err,
            "Blob unreadable at download time"
        );
        AppError::not_found(format!(
            "File content unavailable: {}",
            record.blob_locator
        ))
    }
}

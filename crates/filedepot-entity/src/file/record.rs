//! File version record entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use filedepot_core::types::{LogicalFileId, RecordId, UserId};

/// Content type reported when a record carries none.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// One persisted metadata record, describing exactly one stored blob:
/// one version of one logical file.
///
/// Invariants maintained by the services that create these:
/// - `id` is unique and never reused.
/// - For a fixed `logical_file_id`, `version` values are unique and
///   strictly increasing in creation order; the highest is "current".
/// - `uploader_id` never changes after creation.
/// - `blob_locator` refers to retrievable bytes; deleting the record is
///   always paired with deleting the blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileVersionRecord {
    /// Unique record identifier.
    pub id: RecordId,
    /// Stable identifier shared by all versions of one logical file.
    pub logical_file_id: LogicalFileId,
    /// Display name. Base name only — never version-suffixed.
    pub file_name: String,
    /// Opaque reference the blob store needs to retrieve the bytes.
    pub blob_locator: String,
    /// Size in bytes.
    pub size_bytes: i64,
    /// MIME type, if the uploader supplied one.
    pub content_type: Option<String>,
    /// When this version was uploaded.
    pub uploaded_at: DateTime<Utc>,
    /// Uploader's user id, snapshotted at upload time.
    pub uploader_id: UserId,
    /// Uploader's username at upload time.
    pub uploader_username: String,
    /// Uploader's company at upload time.
    pub uploader_company: String,
    /// Uploader's role at upload time.
    pub uploader_role: String,
    /// Version number: 0 for the original upload, +1 per new version.
    pub version: i32,
}

impl FileVersionRecord {
    /// The content type to report to callers, defaulting to
    /// `application/octet-stream` when the record carries none.
    pub fn content_type_or_default(&self) -> &str {
        self.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE)
    }

    /// Whether the record's effective content type is an image.
    pub fn is_image(&self) -> bool {
        self.content_type_or_default().starts_with("image/")
    }
}

/// The caller-mutable subset of a record. Only the display name and
/// content type may ever change; everything else is immutable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRecordRequest {
    /// New display name.
    pub file_name: Option<String>,
    /// New content type.
    pub content_type: Option<String>,
}

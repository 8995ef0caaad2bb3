//! Version planning — computes version numbers, blob keys, and fully
//! populated records.
//!
//! Kept free of any store access so it can be tested in isolation: the
//! orchestrating services resolve the prior record and hand it in.

use bytes::Bytes;
use chrono::Utc;

use filedepot_core::types::{LogicalFileId, RecordId};
use filedepot_entity::{FileVersionRecord, Identity};

/// The plan for storing one new file version: where the bytes go and
/// which version slot the record occupies.
#[derive(Debug, Clone)]
pub struct VersionPlan {
    /// The logical file this version belongs to.
    pub logical_file_id: LogicalFileId,
    /// The version number the new record will carry.
    pub version: i32,
    /// The display name — stable across versions of one logical file.
    pub file_name: String,
    /// The blob key to write the bytes under. Version-qualified for
    /// everything after the original upload so prior content survives
    /// the blob store's overwrite-on-put semantics.
    pub blob_key: String,
}

impl VersionPlan {
    /// Plan the original upload of a new logical file: a fresh logical
    /// id, version 0, and the bare filename as the blob key.
    pub fn initial(file_name: &str) -> Self {
        Self {
            logical_file_id: LogicalFileId::new(),
            version: 0,
            file_name: file_name.to_string(),
            blob_key: file_name.to_string(),
        }
    }

    /// Plan the next version after `prior`.
    ///
    /// The display name comes from the prior record, not from whatever
    /// the newly uploaded file happens to be called, so the name stays
    /// stable across versions. The blob key gets a `_v{n}` suffix.
    pub fn next(prior: &FileVersionRecord) -> Self {
        let version = prior.version + 1;
        Self {
            logical_file_id: prior.logical_file_id,
            version,
            file_name: prior.file_name.clone(),
            blob_key: format!("{}_v{}", prior.file_name, version),
        }
    }

    /// Materialize the plan into a record ready for persistence, with
    /// the uploader fields snapshotted from the identity.
    pub fn into_record(
        self,
        blob_locator: String,
        data: &Bytes,
        content_type: Option<String>,
        identity: &Identity,
    ) -> FileVersionRecord {
        FileVersionRecord {
            id: RecordId::new(),
            logical_file_id: self.logical_file_id,
            file_name: self.file_name,
            blob_locator,
            size_bytes: data.len() as i64,
            content_type,
            uploaded_at: Utc::now(),
            uploader_id: identity.user_id,
            uploader_username: identity.username.clone(),
            uploader_company: identity.company.clone(),
            uploader_role: identity.role.clone(),
            version: self.version,
        }
    }
}

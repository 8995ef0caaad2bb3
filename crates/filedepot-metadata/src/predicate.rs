//! Filter predicate evaluation against file version records.
//!
//! The compiled [`FileFilter`] is plain data; this module gives it
//! meaning. Every backing store must implement exactly these semantics,
//! whether by calling [`matches`] directly (the in-memory engine does) or
//! by translating each constraint into its native query language.

use filedepot_core::types::filter::FileFilter;
use filedepot_entity::FileVersionRecord;

/// Whether a record satisfies every constraint of the filter. Absent
/// constraints always pass.
pub fn matches(filter: &FileFilter, record: &FileVersionRecord) -> bool {
    if let Some(id) = &filter.id {
        if record.id.to_string() != *id {
            return false;
        }
    }
    if let Some(fragment) = &filter.file_name {
        if !record.file_name.to_lowercase().contains(fragment) {
            return false;
        }
    }
    if let Some(fragment) = &filter.username {
        if !record.uploader_username.to_lowercase().contains(fragment) {
            return false;
        }
    }
    if let Some(user_id) = &filter.user_id {
        if record.uploader_id.to_string() != *user_id {
            return false;
        }
    }
    if let Some(company) = &filter.company {
        if record.uploader_company != *company {
            return false;
        }
    }
    if let Some(content_type) = &filter.content_type {
        if record.content_type.as_deref() != Some(content_type.as_str()) {
            return false;
        }
    }
    if let Some(from) = filter.uploaded_from {
        if record.uploaded_at < from {
            return false;
        }
    }
    if let Some(before) = filter.uploaded_before {
        if record.uploaded_at >= before {
            return false;
        }
    }
    if let Some(min) = filter.min_size {
        if record.size_bytes < min {
            return false;
        }
    }
    if let Some(max) = filter.max_size {
        if record.size_bytes > max {
            return false;
        }
    }
    true
}

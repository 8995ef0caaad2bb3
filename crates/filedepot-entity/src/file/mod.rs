//! File domain entities.

pub mod record;

pub use record::{FileVersionRecord, UpdateRecordRequest, DEFAULT_CONTENT_TYPE};
